//! Uninstall command implementation
//!
//! Mirror of install: removes the alias from mix.exs (conservatively unless
//! forced), then deletes the managed pre-commit hook.

use std::path::Path;

use colored::Colorize;

use mixhook_edit::{AliasEntry, UninstallOutcome, plan_uninstall};
use mixhook_git::HookUninstall;

use crate::commands::{ALIAS_NAME, effective_steps};
use crate::error::{CliError, Result};
use crate::{interactive, io};

/// Run the uninstall command
pub fn run_uninstall(path: &Path, steps: &[String], force: bool, no_hook: bool) -> Result<()> {
    let mix_path = path.join("mix.exs");

    if mix_path.exists() {
        let text = io::read_text(&mix_path)?;
        let entry = AliasEntry::new(ALIAS_NAME, effective_steps(steps))?;

        let outcome = match plan_uninstall(&text, &entry, force)? {
            UninstallOutcome::Refused { reason } => {
                if interactive::confirm_force(&format!("{reason}. Remove it now?"))? {
                    plan_uninstall(&text, &entry, true)?
                } else {
                    return Err(CliError::user(reason));
                }
            }
            outcome => outcome,
        };

        match outcome {
            UninstallOutcome::AlreadyAbsent => {
                println!(
                    "{} no `{}` alias in mix.exs.",
                    "note:".yellow().bold(),
                    ALIAS_NAME
                );
            }
            UninstallOutcome::Removed(new_text) => {
                io::write_atomic(&mix_path, &new_text)?;
                println!(
                    "{} Removed `{}` alias from mix.exs.",
                    "\u{2713}".green().bold(),
                    ALIAS_NAME
                );
            }
            UninstallOutcome::Refused { reason } => return Err(CliError::user(reason)),
        }
    } else {
        println!(
            "{} no mix.exs found in {}; skipping the alias removal.",
            "note:".yellow().bold(),
            path.display()
        );
    }

    if !no_hook {
        match mixhook_git::uninstall_pre_commit(path, force)? {
            HookUninstall::Removed => {
                println!(
                    "{} Removed the pre-commit hook.",
                    "\u{2713}".green().bold()
                );
            }
            HookUninstall::AlreadyAbsent => {
                println!(
                    "{} no pre-commit hook to remove.",
                    "note:".yellow().bold()
                );
            }
            HookUninstall::Refused { reason } => return Err(CliError::user(reason)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_uninstall_removes_matching_alias() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("mix.exs"),
            "aliases: [\n  test: [\"test\"],\n  precommit: [\"format\", \"test\"]\n]\n",
        )
        .unwrap();

        run_uninstall(temp.path(), &[], false, true).unwrap();

        let content = fs::read_to_string(temp.path().join("mix.exs")).unwrap();
        assert_eq!(content, "aliases: [\n  test: [\"test\"]\n]\n");
    }

    #[test]
    fn test_uninstall_absent_alias_is_ok() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mix.exs"), "aliases: [test: [\"test\"]]\n").unwrap();

        run_uninstall(temp.path(), &[], false, true).unwrap();
    }

    #[test]
    fn test_uninstall_customized_alias_errors_without_force() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("mix.exs"),
            "aliases: [precommit: [\"my_task\"]]\n",
        )
        .unwrap();

        let err = run_uninstall(temp.path(), &[], false, true).unwrap_err();
        assert!(err.to_string().contains("--force"));

        let content = fs::read_to_string(temp.path().join("mix.exs")).unwrap();
        assert!(content.contains("my_task"));
    }

    #[test]
    fn test_uninstall_customized_alias_with_force() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("mix.exs"),
            "aliases: [precommit: [\"my_task\"]]\n",
        )
        .unwrap();

        run_uninstall(temp.path(), &[], true, true).unwrap();

        let content = fs::read_to_string(temp.path().join("mix.exs")).unwrap();
        assert_eq!(content, "aliases: []\n");
    }

    #[test]
    fn test_uninstall_without_mix_exs_is_ok() {
        let temp = TempDir::new().unwrap();
        run_uninstall(temp.path(), &[], false, true).unwrap();
    }
}
