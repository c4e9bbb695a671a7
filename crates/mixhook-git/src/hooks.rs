//! Managed pre-commit hook script install and removal.
//!
//! The script carries a marker line so mixhook can tell its own hook from a
//! user-authored one. Only marked scripts are ever overwritten or deleted
//! without `force`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::subprocess::run_git;

/// Marker identifying a script mixhook wrote.
pub const HOOK_MARKER: &str = "# generated by mixhook";

/// The script installed as `.git/hooks/pre-commit`.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# generated by mixhook; `mixhook uninstall` removes this file\n\
exec mix precommit\n";

/// Result of a hook install. Mirrors the mix.exs planner outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInstall {
    Installed,
    AlreadyInstalled,
    Refused { reason: String },
}

/// Result of a hook removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookUninstall {
    Removed,
    AlreadyAbsent,
    Refused { reason: String },
}

/// Resolves the hooks directory, honoring `core.hooksPath`.
pub fn hooks_dir(repo_root: &Path) -> Result<PathBuf> {
    let raw = run_git(repo_root, &["rev-parse", "--git-path", "hooks"])?;
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(repo_root.join(path))
    }
}

/// Writes the managed pre-commit script.
///
/// An existing script that mixhook wrote is refreshed in place; an existing
/// script from any other source is refused unless `force` is set.
pub fn install_pre_commit(repo_root: &Path, force: bool) -> Result<HookInstall> {
    let dir = hooks_dir(repo_root)?;
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    let path = dir.join("pre-commit");

    if path.exists() {
        let existing = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        if existing == HOOK_SCRIPT {
            debug!(path = %path.display(), "hook already installed");
            return Ok(HookInstall::AlreadyInstalled);
        }
        if !existing.contains(HOOK_MARKER) && !force {
            return Ok(HookInstall::Refused {
                reason: format!(
                    "{} already exists and was not written by mixhook; \
                     pass --force to overwrite it",
                    path.display()
                ),
            });
        }
    }

    write_script(&path)?;
    debug!(path = %path.display(), "hook installed");
    Ok(HookInstall::Installed)
}

/// Removes the pre-commit script.
///
/// Only a script carrying the mixhook marker is deleted without `force`.
pub fn uninstall_pre_commit(repo_root: &Path, force: bool) -> Result<HookUninstall> {
    let path = hooks_dir(repo_root)?.join("pre-commit");

    if !path.exists() {
        return Ok(HookUninstall::AlreadyAbsent);
    }

    let existing = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    if !existing.contains(HOOK_MARKER) && !force {
        return Ok(HookUninstall::Refused {
            reason: format!(
                "{} was not written by mixhook; pass --force to delete it anyway",
                path.display()
            ),
        });
    }

    fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    debug!(path = %path.display(), "hook removed");
    Ok(HookUninstall::Removed)
}

fn write_script(path: &Path) -> Result<()> {
    fs::write(path, HOOK_SCRIPT).map_err(|e| Error::io(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(path, perms).map_err(|e| Error::io(path, e))?;
    }

    Ok(())
}
