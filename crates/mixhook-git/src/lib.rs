//! Git collaborators for mixhook.
//!
//! Everything here shells out to the `git` binary: hooks-path discovery,
//! managed pre-commit script install/removal, and staged-change queries.
//! The mix.exs editing core never touches this crate.

pub mod error;
pub mod hooks;
pub mod status;
pub mod subprocess;

pub use error::{Error, Result};
pub use hooks::{
    HOOK_MARKER, HOOK_SCRIPT, HookInstall, HookUninstall, hooks_dir, install_pre_commit,
    uninstall_pre_commit,
};
pub use status::mix_exs_is_staged;
pub use subprocess::run_git;
