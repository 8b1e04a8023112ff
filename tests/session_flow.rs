//! Integration tests driving a whole interactive session end to end.

use ai_todo::cli::shell::{run_session, Session};
use ai_todo::config::Config;
use ai_todo::task::{Tag, TaskPriority, TaskStore};
use anyhow::Result;
use std::io::Cursor;

fn run(script: &str, config: Config) -> Result<(String, TaskStore)> {
    let mut session = Session::new(config, Vec::new());
    run_session(Cursor::new(script.to_string()), &mut session)?;
    let store = session.store().clone();
    Ok((String::from_utf8(session.into_output())?, store))
}

#[test]
fn test_add_list_toggle_clear() -> Result<()> {
    let script = "\
add deploy the new feature asap --due 2026-02-15
add read the report tomorrow
add buy milk
done 3
list
clear
list
quit
";
    let (out, store) = run(script, Config::default())?;

    assert!(out.contains("Task added with AI suggestions."));
    assert!(out.contains("Priority: High • Est: 120m • Tags: coding, deploy • Due: 2026-02-15"));
    assert!(out.contains("Priority: Medium • Est: 20m • Tags: research • Due: —"));
    assert!(out.contains("[x] buy milk"));
    assert!(out.contains("Cleared completed tasks. (1 removed)"));

    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["deploy the new feature asap", "read the report tomorrow"]);
    Ok(())
}

#[test]
fn test_suggest_keeps_done_state() -> Result<()> {
    let script = "add call the vendor\ndone 1\nsuggest 1\n";
    let (out, store) = run(script, Config::default())?;

    let task = &store.tasks()[0];
    assert!(task.done);
    assert_eq!(task.priority, TaskPriority::Low);
    assert_eq!(task.est_minutes, 15);
    assert_eq!(task.tags, vec![Tag::Meeting]);
    assert!(out.contains("Updated suggestions:"));
    Ok(())
}

#[test]
fn test_unknown_task_reports_not_found() -> Result<()> {
    let (out, store) = run("add buy milk\ndelete nosuchid\n", Config::default())?;
    assert!(out.contains("Error: Task not found: nosuchid"));
    assert_eq!(store.len(), 1);
    Ok(())
}

#[test]
fn test_delete_by_id_prefix() -> Result<()> {
    let mut session = Session::new(Config::default(), Vec::new());
    session.handle_line("add buy milk")?;
    session.handle_line("add water plants")?;
    let prefix = session.store().tasks()[1].id.as_str()[..8].to_string();

    session.handle_line(&format!("rm {}", prefix))?;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().tasks()[0].text, "buy milk");
    Ok(())
}

#[test]
fn test_eof_ends_session() -> Result<()> {
    let (out, store) = run("add buy milk", Config::default())?;
    assert_eq!(store.len(), 1);
    assert!(out.ends_with('\n'));
    Ok(())
}

#[test]
fn test_export_to_file_round_trips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tasks.json");

    let mut config = Config::default();
    config.export.path = path.clone();

    let script = "add review the PR today\nadd email the team --due 2026-05-01\ndone 2\nexport\n";
    let (out, store) = run(script, config)?;

    assert!(out.contains("Exported 2 tasks to"));
    assert!(out.contains("application/json"));

    let restored = TaskStore::from_export(&std::fs::read_to_string(&path)?)?;
    assert_eq!(restored.tasks(), store.tasks());
    Ok(())
}

#[test]
fn test_export_to_stdout() -> Result<()> {
    let (out, _) = run("add buy milk\nexport -\n", Config::default())?;
    assert!(out.contains("\"text\": \"buy milk\""));
    assert!(out.contains("\"tags\": [\n      \"general\"\n    ]"));
    Ok(())
}
