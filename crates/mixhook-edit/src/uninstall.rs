//! Uninstall decision procedure, the conservative mirror of install.
//!
//! An entry is only removed automatically when its recorded steps contain
//! every expected step; a user-customized alias that merely shares the name
//! is left alone unless `force` is set. Removal repairs the surrounding
//! separators so the list stays well formed: an emptied line disappears
//! entirely and no stray or doubled comma is left behind.

use tracing::debug;

use crate::entry::{AliasEntry, EntrySpan, contains_equivalent, find_entry};
use crate::error::Result;
use crate::install::locate_aliases_list;
use crate::scan::BracketRange;
use crate::splice::replace_span;

/// Result of planning an uninstall. At most one variant per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// No alias under that name exists; repeating the uninstall is a no-op.
    AlreadyAbsent,
    /// The alias was removed; carries the complete new document text.
    Removed(String),
    /// The alias exists but does not match the expected steps and `force`
    /// was not set.
    Refused { reason: String },
}

/// Decides how to uninstall `entry` from `text`.
///
/// # Errors
/// Structural errors from the locator and scanner. A missing aliases list is
/// not an error; it resolves to `AlreadyAbsent`.
pub fn plan_uninstall(text: &str, entry: &AliasEntry, force: bool) -> Result<UninstallOutcome> {
    let Some(range) = locate_aliases_list(text)? else {
        debug!(alias = entry.name(), "no aliases list, nothing to remove");
        return Ok(UninstallOutcome::AlreadyAbsent);
    };

    let body = range.body(text);
    let Some(span) = find_entry(body, entry.name()) else {
        debug!(alias = entry.name(), "alias not present");
        return Ok(UninstallOutcome::AlreadyAbsent);
    };

    if !force && !contains_equivalent(body, entry.name(), entry.steps()) {
        debug!(alias = entry.name(), "alias differs from expected steps, leaving it");
        return Ok(UninstallOutcome::Refused {
            reason: format!(
                "alias `{}:` in mix.exs does not match the expected steps; \
                 pass --force to remove it anyway",
                entry.name()
            ),
        });
    }

    debug!(alias = entry.name(), "removing alias");
    Ok(UninstallOutcome::Removed(remove_entry(text, range, span)))
}

/// Deletes the entry plus exactly one adjacent separator.
///
/// A trailing comma is consumed together with the emptied line (multi-line
/// lists) or the following spaces (single-line lists). When the entry is the
/// last one, the comma before it is consumed instead, which also restores
/// texts produced by a fresh insert byte-for-byte.
fn remove_entry(text: &str, range: BracketRange, span: EntrySpan) -> String {
    let body_start = range.body_start();
    let bytes = text.as_bytes();
    let mut start = body_start + span.key_start;
    let mut end = body_start + span.value_end;

    let mut probe = end;
    while probe < range.end && matches!(bytes[probe], b' ' | b'\t') {
        probe += 1;
    }

    if probe < range.end && bytes[probe] == b',' {
        end = probe + 1;
        let line_start = text[..start].rfind('\n').map_or(0, |p| p + 1);
        let alone_on_line = line_start > body_start
            && text[line_start..start].trim().is_empty()
            && end < range.end
            && bytes[end] == b'\n';
        if alone_on_line {
            start = line_start;
            end += 1;
        } else {
            while end < range.end && bytes[end] == b' ' {
                end += 1;
            }
        }
        return replace_span(text, start, end, "");
    }

    // No trailing comma: this is the last entry. Take the comma before it.
    let mut back = start;
    while back > body_start && bytes[back - 1].is_ascii_whitespace() {
        back -= 1;
    }
    if back > body_start && bytes[back - 1] == b',' {
        start = back - 1;
        return replace_span(text, start, end, "");
    }

    // Sole entry. Drop the emptied line when it stands alone.
    let line_start = text[..start].rfind('\n').map_or(0, |p| p + 1);
    if line_start > body_start
        && text[line_start..start].trim().is_empty()
        && end < range.end
        && bytes[end] == b'\n'
    {
        start = line_start;
        end += 1;
    }
    replace_span(text, start, end, "")
}
