//! CLI command implementations

pub mod classify;
pub mod definition;
pub mod shell;

pub use definition::{Cli, Commands};

use crate::task::{Task, TaskId};
use anyhow::{bail, Result};

/// Resolve a user-typed task reference.
///
/// Tries an exact ID, then a 1-based list position, then a unique ID prefix.
/// Anything else is passed through unchanged so the store reports it as not
/// found.
pub fn resolve_task(identifier: &str, tasks: &[Task]) -> Result<TaskId> {
    if let Some(task) = tasks.iter().find(|t| t.id.as_str() == identifier) {
        return Ok(task.id.clone());
    }

    if let Ok(position) = identifier.parse::<usize>() {
        if let Some(task) = position.checked_sub(1).and_then(|i| tasks.get(i)) {
            return Ok(task.id.clone());
        }
    }

    if identifier.is_empty() {
        return Ok(TaskId::from(identifier));
    }

    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.id.as_str().starts_with(identifier))
        .collect();

    match matches.as_slice() {
        [task] => Ok(task.id.clone()),
        [] => Ok(TaskId::from(identifier)),
        _ => bail!("Ambiguous task id: {} ({} matches)", identifier, matches.len()),
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::classify;

    fn task(id: &str, text: &str) -> Task {
        Task::new(TaskId::from(id), text, None, classify(text))
    }

    #[test]
    fn test_truncate_id_shorter_than_max() {
        assert_eq!(truncate_id("abc123", 10), "abc123");
    }

    #[test]
    fn test_truncate_id_longer_than_max() {
        assert_eq!(truncate_id("abc123def456", 8), "abc123de");
    }

    #[test]
    fn test_resolve_task_by_exact_id() {
        let tasks = vec![task("abc123", "one"), task("abc124", "two")];
        assert_eq!(resolve_task("abc124", &tasks).unwrap(), TaskId::from("abc124"));
    }

    #[test]
    fn test_resolve_task_by_position() {
        let tasks = vec![task("aaa", "one"), task("bbb", "two")];
        assert_eq!(resolve_task("2", &tasks).unwrap(), TaskId::from("bbb"));
    }

    #[test]
    fn test_resolve_task_position_out_of_range_passes_through() {
        let tasks = vec![task("aaa", "one")];
        assert_eq!(resolve_task("0", &tasks).unwrap(), TaskId::from("0"));
        assert_eq!(resolve_task("5", &tasks).unwrap(), TaskId::from("5"));
    }

    #[test]
    fn test_resolve_task_by_unique_prefix() {
        let tasks = vec![task("abc123", "one"), task("def456", "two")];
        assert_eq!(resolve_task("def", &tasks).unwrap(), TaskId::from("def456"));
    }

    #[test]
    fn test_resolve_task_ambiguous_prefix() {
        let tasks = vec![task("abc123", "one"), task("abc456", "two")];
        let result = resolve_task("abc", &tasks);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Ambiguous"));
    }

    #[test]
    fn test_resolve_task_unknown_passes_through() {
        let tasks = vec![task("abc123", "one")];
        assert_eq!(resolve_task("zzz", &tasks).unwrap(), TaskId::from("zzz"));
    }
}
