//! Command implementations for mixhook-cli

pub mod bump;
pub mod install;
pub mod uninstall;

pub use bump::run_bump;
pub use install::run_install;
pub use uninstall::run_uninstall;

/// Steps the precommit alias runs when none are given on the command line.
pub const DEFAULT_STEPS: &[&str] = &["format", "test"];

/// The alias key mixhook manages.
pub const ALIAS_NAME: &str = "precommit";

pub(crate) fn effective_steps(steps: &[String]) -> Vec<String> {
    if steps.is_empty() {
        DEFAULT_STEPS.iter().map(ToString::to_string).collect()
    } else {
        steps.to_vec()
    }
}
