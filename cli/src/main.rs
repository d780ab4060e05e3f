// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DiffPolicy(args) => commands::diff_policy::run(args, cli.json),
        Commands::DiffWhitelist(args) => commands::diff_whitelist::run(args, cli.json),
        Commands::Hash(args) => commands::hash::run(args, cli.json),
    }
}
