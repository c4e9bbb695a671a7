//! Install decision procedure for the `precommit` alias.
//!
//! Exactly one outcome is produced per call, and the input text is never
//! partially rewritten: every state-changing outcome carries a complete new
//! document. Fallback order is inline list, then block form, then synthesis
//! of a fresh `defp aliases do ... end` block plus its `aliases: aliases()`
//! reference in the `project` list.

use tracing::debug;

use crate::entry::{AliasEntry, append_to_list, contains_equivalent, find_entry};
use crate::error::{Error, Result};
use crate::locate::{locate_block, locate_inline};
use crate::scan::BracketRange;
use crate::splice::{insert_at, replace_span};

/// Key of the aliases list inside the `project` keyword list.
pub const ALIASES_KEY: &str = "aliases";

/// Name of the function-form aliases block.
pub const ALIASES_BLOCK: &str = "aliases";

/// Name of the enclosing project declaration.
pub const PROJECT_BLOCK: &str = "project";

/// Result of planning an install. At most one variant per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The alias is already present with the desired steps; no text change.
    AlreadyInstalled,
    /// The alias was appended to an existing aliases list.
    Inserted(String),
    /// An existing alias under the same key was overwritten (`force`).
    Replaced(String),
    /// No aliases list existed; a block and its reference were created.
    Synthesized(String),
    /// The key exists with a different value and `force` was not set.
    Refused { reason: String },
}

/// Locates the aliases list in either recognized form.
///
/// The inline search sees `aliases: aliases()` (the reference half of the
/// block layout) as a non-list value; that error is deferred until the block
/// search has also come up empty, so the standard two-part layout resolves to
/// its block. `Ok(None)` means no aliases construct exists anywhere and
/// synthesis is safe.
pub(crate) fn locate_aliases_list(text: &str) -> Result<Option<BracketRange>> {
    let deferred = match locate_inline(text, ALIASES_KEY) {
        Ok(Some(range)) => return Ok(Some(range)),
        Ok(None) => None,
        Err(err @ Error::UnexpectedCharacterAfterKey { .. }) => Some(err),
        Err(err) => return Err(err),
    };

    match locate_block(text, ALIASES_BLOCK)? {
        Some(range) => Ok(Some(range)),
        None => match deferred {
            Some(err) => Err(err),
            None => Ok(None),
        },
    }
}

/// Decides how to install `entry` into `text`.
///
/// # Returns
/// One of [`InstallOutcome`]'s variants; `Inserted`, `Replaced` and
/// `Synthesized` carry the complete new document text.
///
/// # Errors
/// Structural errors from the locator and scanner, plus
/// `Error::NoInsertionPoint` when synthesis is needed but mix.exs has no
/// `project` list or module-closing `end` to anchor it to. The error message
/// spells out the manual edit.
pub fn plan_install(text: &str, entry: &AliasEntry, force: bool) -> Result<InstallOutcome> {
    if let Some(range) = locate_aliases_list(text)? {
        let body = range.body(text);

        if contains_equivalent(body, entry.name(), entry.steps()) {
            debug!(alias = entry.name(), "alias already present");
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        if let Some(span) = find_entry(body, entry.name()) {
            if !force {
                debug!(alias = entry.name(), "refusing to overwrite existing alias");
                return Ok(InstallOutcome::Refused {
                    reason: format!(
                        "alias `{}:` already exists in mix.exs with a different value; \
                         pass --force to overwrite it",
                        entry.name()
                    ),
                });
            }
            let start = range.body_start() + span.key_start;
            let end = range.body_start() + span.value_end;
            debug!(alias = entry.name(), "overwriting existing alias");
            return Ok(InstallOutcome::Replaced(replace_span(
                text,
                start,
                end,
                &entry.render(),
            )));
        }

        debug!(alias = entry.name(), "appending alias to existing list");
        return Ok(InstallOutcome::Inserted(append_to_list(
            text,
            range,
            &entry.render(),
        )));
    }

    synthesize(text, entry)
}

/// Creates the aliases block and its reference when neither form exists.
///
/// Reaching this point means no `aliases:` key and no `aliases do` block
/// occur anywhere in the text, so both halves of the layout are inserted.
fn synthesize(text: &str, entry: &AliasEntry) -> Result<InstallOutcome> {
    let Some(project) = locate_block(text, PROJECT_BLOCK)? else {
        return Err(Error::no_insertion_point(format!(
            "mix.exs has no `def project` keyword list to attach aliases to; \
             add `{}: [{}]` to your project configuration by hand",
            ALIASES_KEY,
            entry.render()
        )));
    };

    let reference = format!("{ALIASES_KEY}: {ALIASES_BLOCK}()");
    let with_reference = append_to_list(text, project, &reference);

    let Some(anchor) = final_end_offset(&with_reference) else {
        return Err(Error::no_insertion_point(format!(
            "mix.exs has no module-closing `end` to insert an aliases block before; \
             add `defp {ALIASES_BLOCK} do [{}] end` by hand",
            entry.render()
        )));
    };

    let block = format!(
        "\n  defp {ALIASES_BLOCK} do\n    [{}]\n  end\n",
        entry.render()
    );
    debug!(alias = entry.name(), "synthesizing aliases block");
    Ok(InstallOutcome::Synthesized(insert_at(
        &with_reference,
        anchor,
        &block,
    )))
}

/// Byte offset of the start of the last line holding a bare `end`.
fn final_end_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    let mut last = None;
    for line in text.split_inclusive('\n') {
        if line.trim() == "end" {
            last = Some(offset);
        }
        offset += line.len();
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, steps: &[&str]) -> AliasEntry {
        AliasEntry::new(name, steps.iter().map(ToString::to_string).collect()).unwrap()
    }

    #[test]
    fn test_locate_prefers_inline() {
        let text = "aliases: [a: [\"x\"]]\ndefp aliases do\n  [b: [\"y\"]]\nend\n";
        let range = locate_aliases_list(text).unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], "[a: [\"x\"]]");
    }

    #[test]
    fn test_locate_falls_through_reference_to_block() {
        let text = "def project do\n  [aliases: aliases()]\nend\n\
                    defp aliases do\n  [a: [\"x\"]]\nend\n";
        let range = locate_aliases_list(text).unwrap().unwrap();
        assert_eq!(&text[range.start..=range.end], "[a: [\"x\"]]");
    }

    #[test]
    fn test_locate_reference_without_block_is_an_error() {
        let text = "def project do\n  [aliases: custom_aliases()]\nend\n";
        let err = locate_aliases_list(text).unwrap_err();
        assert!(matches!(err, Error::UnexpectedCharacterAfterKey { .. }));
    }

    #[test]
    fn test_final_end_offset_picks_module_end() {
        let text = "defmodule M do\n  def f do\n    :ok\n  end\nend\n";
        let offset = final_end_offset(text).unwrap();
        assert_eq!(&text[offset..], "end\n");
    }

    #[test]
    fn test_final_end_offset_none() {
        assert_eq!(final_end_offset("no module here"), None);
    }

    #[test]
    fn test_install_refuses_conflict_without_force() {
        let text = "aliases: [precommit: [\"lint\"]]";
        let outcome = plan_install(text, &entry("precommit", &["format", "test"]), false).unwrap();
        match outcome {
            InstallOutcome::Refused { reason } => assert!(reason.contains("already exists")),
            other => panic!("expected Refused, got {other:?}"),
        }
    }

    #[test]
    fn test_install_force_replaces_in_place() {
        let text = "aliases: [precommit: [\"lint\"], test: [\"test\"]]";
        let outcome = plan_install(text, &entry("precommit", &["format", "test"]), true).unwrap();
        assert_eq!(
            outcome,
            InstallOutcome::Replaced(
                "aliases: [precommit: [\"format\", \"test\"], test: [\"test\"]]".to_string()
            )
        );
    }

    #[test]
    fn test_no_insertion_point_message_has_remediation() {
        let err = plan_install("IO.puts(:hi)\n", &entry("precommit", &["test"]), false)
            .unwrap_err();
        match err {
            Error::NoInsertionPoint { message } => {
                assert!(message.contains("by hand"));
                assert!(message.contains("precommit: [\"test\"]"));
            }
            other => panic!("expected NoInsertionPoint, got {other:?}"),
        }
    }
}
