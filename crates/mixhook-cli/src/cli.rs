//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// mixhook - wire a `mix precommit` workflow into an Elixir project
#[derive(Parser, Debug)]
#[command(name = "mixhook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory containing mix.exs
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the precommit alias to mix.exs and install the git hook
    ///
    /// Examples:
    ///   mixhook install                       # format + test
    ///   mixhook install --step credo --step test
    ///   mixhook install --force               # overwrite a conflicting alias
    ///   mixhook install --no-hook             # edit mix.exs only
    Install {
        /// Overwrite a conflicting alias or a foreign pre-commit hook
        #[arg(long)]
        force: bool,

        /// Skip the .git/hooks/pre-commit script
        #[arg(long)]
        no_hook: bool,

        /// Mix task the alias runs, in order (repeatable; defaults to
        /// "format" and "test")
        #[arg(long = "step", value_name = "TASK")]
        steps: Vec<String>,
    },

    /// Remove the precommit alias from mix.exs and the git hook
    ///
    /// Without --force only an alias matching the expected steps is removed,
    /// so a hand-customized alias survives.
    Uninstall {
        /// Remove the alias and hook regardless of their content
        #[arg(long)]
        force: bool,

        /// Leave .git/hooks/pre-commit in place
        #[arg(long)]
        no_hook: bool,

        /// Expected mix tasks of the alias (repeatable; defaults to
        /// "format" and "test")
        #[arg(long = "step", value_name = "TASK")]
        steps: Vec<String>,
    },

    /// Bump the project version literal in mix.exs
    Bump {
        /// Version component to increment
        #[arg(value_enum)]
        level: BumpLevel,
    },
}

/// Semver component selectable for `mixhook bump`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}
