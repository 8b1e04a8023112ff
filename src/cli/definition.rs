//! Top-level clap definitions for `aitodo`

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::classify::ClassifyArgs;

#[derive(Parser)]
#[command(name = "aitodo")]
#[command(version, about = "To-do list with rule-based priority, estimate and tag suggestions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest priority, estimate and tags for a task description
    Classify(ClassifyArgs),

    /// Start an interactive to-do session (default)
    Shell,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
