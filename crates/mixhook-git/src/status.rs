//! Staged-change queries used to warn before rewriting mix.exs.

use std::path::Path;

use crate::error::Result;
use crate::subprocess::run_git;

/// True when mix.exs has changes in the index.
///
/// Rewriting the working-tree file while an older version is staged would
/// commit a state the user never saw; the CLI warns in that case.
pub fn mix_exs_is_staged(repo_root: &Path) -> Result<bool> {
    let staged = run_git(repo_root, &["diff", "--cached", "--name-only"])?;
    Ok(staged.lines().any(|line| line.trim() == "mix.exs"))
}
