//! Structural mix.exs editing for mixhook.
//!
//! This crate is the pure core of mixhook: it locates the `aliases` list in
//! a mix.exs document, decides how to install or uninstall a `precommit`
//! alias, and produces a complete new document by byte-exact splicing.
//! Nothing here touches the filesystem; callers read the file once, run a
//! planner, and write the result back on a state-changing outcome.
//!
//! Only two surface forms of the aliases list are recognized:
//!
//! ```text
//! aliases: [test: ["test"]]            # inline, inside the project list
//! defp aliases do [test: ["test"]] end # block form, referenced as aliases()
//! ```
//!
//! Everything else in the file is opaque text and is preserved verbatim.

pub mod entry;
pub mod error;
pub mod install;
pub mod locate;
pub mod scan;
pub mod splice;
pub mod uninstall;

pub use entry::{AliasEntry, contains_equivalent, has_entry_key};
pub use error::{Error, Result};
pub use install::{ALIASES_BLOCK, ALIASES_KEY, InstallOutcome, PROJECT_BLOCK, plan_install};
pub use locate::{locate_block, locate_inline};
pub use scan::{BracketRange, match_closing};
pub use splice::{insert_at, replace_range, replace_span};
pub use uninstall::{UninstallOutcome, plan_uninstall};
