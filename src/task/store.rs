//! In-memory, insertion-ordered task list

use chrono::NaiveDate;
use std::collections::HashSet;

use super::classifier::classify;
use super::error::{Result, TaskError};
use super::export;
use super::model::{Task, TaskId};

/// Session-scoped task list.
///
/// Every mutation takes `&mut self` and finishes before returning, so a
/// reader never observes a half-applied update. Share it across threads by
/// wrapping the whole store in a single `Mutex`.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from an exported JSON document.
    ///
    /// Every task must satisfy the same invariants `add` guarantees: unique
    /// id, non-empty trimmed text, positive estimate and at least one tag.
    pub fn from_export(content: &str) -> Result<Self> {
        let tasks = export::from_json(content)?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(&task.id) {
                return Err(TaskError::InvalidTask(task.id.clone(), "duplicate id"));
            }
            check_task(task)?;
        }

        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Classify `text` and append it as a new task
    pub fn add(&mut self, text: &str, due: Option<NaiveDate>) -> Result<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::Validation);
        }

        let task = Task::new(self.fresh_id(), text, due, classify(text));
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip the done flag
    pub fn toggle_done(&mut self, id: &TaskId) -> Result<Task> {
        let task = self.get_mut(id)?;
        task.done = !task.done;
        Ok(task.clone())
    }

    /// Re-run the classifier on the stored text. `done` and `due` are kept.
    pub fn reclassify(&mut self, id: &TaskId) -> Result<Task> {
        let task = self.get_mut(id)?;
        let suggestion = classify(&task.text);
        task.apply(suggestion);
        Ok(task.clone())
    }

    pub fn delete(&mut self, id: &TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;
        let task = self.tasks.remove(index);
        Ok(task)
    }

    /// Drop every completed task, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    /// Snapshot of every task as JSON
    pub fn export(&self) -> Result<String> {
        export::to_json(&self.tasks)
    }
}

fn check_task(task: &Task) -> Result<()> {
    let problem = if task.text.trim().is_empty() {
        "empty text"
    } else if task.text.trim() != task.text {
        "untrimmed text"
    } else if task.est_minutes == 0 {
        "zero estimate"
    } else if task.tags.is_empty() {
        "no tags"
    } else {
        return Ok(());
    };
    Err(TaskError::InvalidTask(task.id.clone(), problem))
}
