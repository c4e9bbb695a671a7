//! mixhook CLI
//!
//! Wires a `mix precommit` workflow into an Elixir project: edits the
//! aliases list in mix.exs and manages the git pre-commit hook.

mod cli;
mod commands;
mod error;
mod interactive;
mod io;
mod version;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Install {
            force,
            no_hook,
            steps,
        }) => commands::run_install(&cli.dir, &steps, force, no_hook),
        Some(Commands::Uninstall {
            force,
            no_hook,
            steps,
        }) => commands::run_uninstall(&cli.dir, &steps, force, no_hook),
        Some(Commands::Bump { level }) => commands::run_bump(&cli.dir, level),
        None => {
            println!("{} mix precommit installer", "mixhook".green().bold());
            println!();
            println!("Run {} for available commands.", "mixhook --help".cyan());
            Ok(())
        }
    }
}
