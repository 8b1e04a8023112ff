//! `aitodo shell` - interactive to-do session
//!
//! Holds one [`TaskStore`] for the lifetime of the session. Each input line is
//! split shell-style and parsed as a [`SessionCommand`]; errors are printed and
//! the session carries on.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use super::{resolve_task, truncate_id};
use crate::config::Config;
use crate::task::{Task, TaskStore, EXPORT_MIME_TYPE};

const ID_DISPLAY_LEN: usize = 8;
const PROMPT: &str = "todo> ";

/// One line of session input
#[derive(Parser)]
#[command(name = "session", no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Add a task; priority, estimate and tags are suggested from the text
    Add {
        /// Task description
        text: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// List tasks
    #[command(alias = "ls")]
    List,

    /// Toggle a task between done and not done
    Done {
        /// Task ID, ID prefix, or list position
        id: String,
    },

    /// Re-run suggestions for a task
    Suggest {
        /// Task ID, ID prefix, or list position
        id: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID, ID prefix, or list position
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Export tasks as JSON
    Export {
        /// Destination file, or `-` for stdout (defaults to the configured path)
        path: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    store: TaskStore,
    config: Config,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            store: TaskStore::new(),
            config,
            out,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Handle one line of input. Command failures are reported to the
    /// output; only failures to write that output are returned.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(tokens) = shlex::split(line) else {
            writeln!(self.out, "Error: unbalanced quotes")?;
            return Ok(Flow::Continue);
        };

        let parsed = match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(parsed.command) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(self.out, "Error: {:#}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Add { text, due } => {
                let task = self.store.add(&text.join(" "), due)?;
                debug!(id = %task.id, priority = %task.priority, "Added task");
                writeln!(self.out, "Task added with AI suggestions.")?;
                self.print_task(self.store.len(), &task)?;
            }
            SessionCommand::List => self.print_list()?,
            SessionCommand::Done { id } => {
                let id = resolve_task(&id, self.store.tasks())?;
                let task = self.store.toggle_done(&id)?;
                debug!(id = %task.id, done = task.done, "Toggled task");
                let state = if task.done { "done" } else { "not done" };
                writeln!(self.out, "Marked as {}: {}", state, task.text)?;
            }
            SessionCommand::Suggest { id } => {
                let id = resolve_task(&id, self.store.tasks())?;
                let task = self.store.reclassify(&id)?;
                debug!(id = %task.id, priority = %task.priority, "Reclassified task");
                writeln!(self.out, "Updated suggestions: {}", task.detail_line())?;
            }
            SessionCommand::Delete { id } => {
                let id = resolve_task(&id, self.store.tasks())?;
                let task = self.store.delete(&id)?;
                debug!(id = %task.id, "Deleted task");
                writeln!(self.out, "Deleted: {}", task.text)?;
            }
            SessionCommand::Clear => {
                let removed = self.store.clear_completed();
                debug!(removed, "Cleared completed tasks");
                writeln!(self.out, "Cleared completed tasks. ({} removed)", removed)?;
            }
            SessionCommand::Export { path } => self.export(path)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_task(&mut self, position: usize, task: &Task) -> io::Result<()> {
        let check = if task.done { "x" } else { " " };
        writeln!(
            self.out,
            "{:>3}. [{}] {}  ({})",
            position,
            check,
            task.text,
            truncate_id(task.id.as_str(), ID_DISPLAY_LEN)
        )?;
        writeln!(self.out, "       {}", task.detail_line())
    }

    fn print_list(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.out, "No tasks yet — add one with `add <description>`.");
        }

        let show_done = self.config.display.show_done;
        let tasks = self.store.tasks().to_vec();
        for (i, task) in tasks.iter().enumerate() {
            if task.done && !show_done {
                continue;
            }
            self.print_task(i + 1, task)?;
        }

        let done = tasks.iter().filter(|t| t.done).count();
        writeln!(self.out, "\nTotal: {} tasks ({} done)", tasks.len(), done)
    }

    fn export(&mut self, path: Option<PathBuf>) -> Result<()> {
        let json = self.store.export()?;
        let path = path.unwrap_or_else(|| self.config.export.path.clone());

        if path.as_os_str() == "-" {
            writeln!(self.out, "{}", json)?;
            return Ok(());
        }

        fs::write(&path, &json).with_context(|| format!("Failed to write to {:?}", path))?;
        debug!(path = %path.display(), "Exported tasks");
        writeln!(
            self.out,
            "Exported {} tasks to {} ({})",
            self.store.len(),
            path.display(),
            EXPORT_MIME_TYPE
        )?;
        Ok(())
    }
}

/// Read commands from `input` until EOF or `quit`
pub fn run_session<R: BufRead, W: Write>(input: R, session: &mut Session<W>) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(session.out, "{}", PROMPT)?;
        session.out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(session.out)?;
            break;
        };

        if session.handle_line(&line?)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

pub fn run(config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut session = Session::new(config, stdout.lock());
    writeln!(
        session.out,
        "AI-assisted to-do list. Type `help` for commands, `quit` to leave."
    )?;
    run_session(io::stdin().lock(), &mut session)?;
    Ok(())
}
