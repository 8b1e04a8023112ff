//! `aitodo classify` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::task::classify;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Task description (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ClassifyArgs {
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let text = args.text();
    if text.trim().is_empty() {
        bail!("Task description must not be empty");
    }

    let suggestion = classify(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    let tags: Vec<&str> = suggestion.tags.iter().map(|t| t.label()).collect();
    println!("Priority: {}", suggestion.priority);
    println!("Estimate: {}m", suggestion.est_minutes);
    println!("Tags:     {}", tags.join(", "));

    Ok(())
}
