//! ai-todo - To-do list with rule-based priority, estimate and tag suggestions

use ai_todo::cli::{self, Cli, Commands};
use ai_todo::config::Config;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

fn main() -> Result<()> {
    if std::env::var("AI_TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("ai_todo=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "aitodo", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Classify(args)) => cli::classify::run(args),
        Some(Commands::Shell) | None => {
            let config = Config::load_or_init()?;
            cli::shell::run(config)
        }
    }
}
