//! Install command implementation
//!
//! Edits mix.exs through the planner, writes the result back atomically,
//! then installs the managed pre-commit hook.

use std::path::Path;

use colored::Colorize;

use mixhook_edit::{AliasEntry, InstallOutcome, plan_install};
use mixhook_git::HookInstall;

use crate::commands::{ALIAS_NAME, effective_steps};
use crate::error::{CliError, Result};
use crate::{interactive, io};

/// Run the install command
pub fn run_install(path: &Path, steps: &[String], force: bool, no_hook: bool) -> Result<()> {
    let mix_path = path.join("mix.exs");
    if !mix_path.exists() {
        return Err(CliError::user(format!(
            "no mix.exs found in {}; run mixhook from the project root or pass -C",
            path.display()
        )));
    }

    warn_if_staged(path);

    let text = io::read_text(&mix_path)?;
    let entry = AliasEntry::new(ALIAS_NAME, effective_steps(steps))?;

    let outcome = match plan_install(&text, &entry, force)? {
        InstallOutcome::Refused { reason } => {
            if interactive::confirm_force(&format!("{reason}. Overwrite it now?"))? {
                plan_install(&text, &entry, true)?
            } else {
                return Err(CliError::user(reason));
            }
        }
        outcome => outcome,
    };

    match outcome {
        InstallOutcome::AlreadyInstalled => {
            println!(
                "{} `{}` alias already present in mix.exs.",
                "note:".yellow().bold(),
                ALIAS_NAME
            );
        }
        InstallOutcome::Inserted(new_text) => {
            io::write_atomic(&mix_path, &new_text)?;
            println!(
                "{} Added `{}` alias to mix.exs.",
                "\u{2713}".green().bold(),
                ALIAS_NAME
            );
        }
        InstallOutcome::Replaced(new_text) => {
            io::write_atomic(&mix_path, &new_text)?;
            println!(
                "{} Replaced `{}` alias in mix.exs.",
                "\u{2713}".green().bold(),
                ALIAS_NAME
            );
        }
        InstallOutcome::Synthesized(new_text) => {
            io::write_atomic(&mix_path, &new_text)?;
            println!(
                "{} Created an aliases block in mix.exs with the `{}` alias.",
                "\u{2713}".green().bold(),
                ALIAS_NAME
            );
        }
        InstallOutcome::Refused { reason } => return Err(CliError::user(reason)),
    }

    if !no_hook {
        match mixhook_git::install_pre_commit(path, force)? {
            HookInstall::Installed => {
                println!(
                    "{} Installed the pre-commit hook.",
                    "\u{2713}".green().bold()
                );
            }
            HookInstall::AlreadyInstalled => {
                println!(
                    "{} pre-commit hook already installed.",
                    "note:".yellow().bold()
                );
            }
            HookInstall::Refused { reason } => return Err(CliError::user(reason)),
        }
    }

    println!(
        "\n{} Run {} to try it out.",
        "hint:".cyan().bold(),
        format!("mix {ALIAS_NAME}").cyan()
    );

    Ok(())
}

/// Warns when mix.exs has staged edits the rewrite would bypass.
fn warn_if_staged(path: &Path) {
    match mixhook_git::mix_exs_is_staged(path) {
        Ok(true) => {
            println!(
                "{} mix.exs has staged changes; remember to re-stage it after mixhook edits it.",
                "note:".yellow().bold()
            );
        }
        Ok(false) => {}
        Err(err) => tracing::debug!(%err, "skipping staged-change check"),
    }
}
