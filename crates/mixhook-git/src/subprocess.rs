//! Subprocess invocation of the git binary.
//!
//! mixhook shells out to `git` instead of linking a libgit2 binding: only a
//! handful of plumbing commands are needed and the user's git configuration
//! (core.hooksPath in particular) must be honored exactly.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Runs `git <args>` in `working_dir` and returns trimmed stdout.
///
/// # Errors
/// `Error::NotARepository` when git reports one, `Error::CommandFailed` for
/// any other non-zero exit, `Error::Spawn` when git cannot be launched.
pub fn run_git(working_dir: &Path, args: &[&str]) -> Result<String> {
    debug!(?args, "running git");
    let output = Command::new("git")
        .current_dir(working_dir)
        .args(args)
        .output()
        .map_err(Error::Spawn)?;

    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if stderr.contains("not a git repository") {
        return Err(Error::NotARepository {
            path: working_dir.to_path_buf(),
        });
    }
    Err(Error::CommandFailed {
        code: output.status.code().unwrap_or(-1),
        stderr,
    })
}
