//! Version-literal bumping in mix.exs.
//!
//! This is a literal pattern match, not a semver parser: the first
//! `version: "X.Y.Z"` occurrence is rewritten in place and any pre-release
//! or build suffix inside the quotes is carried along untouched.

use std::sync::LazyLock;

use regex::Regex;

use mixhook_edit::replace_span;

use crate::cli::BumpLevel;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version:\s*"(\d+)\.(\d+)\.(\d+)[^"]*""#).expect("invalid version regex")
});

/// A performed bump: old and new dotted versions plus the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bumped {
    pub old: String,
    pub new: String,
    pub text: String,
}

/// Bumps the first version literal, or returns `None` when there is none.
pub fn bump(text: &str, level: BumpLevel) -> Option<Bumped> {
    let caps = VERSION_REGEX.captures(text)?;
    let (major, minor, patch) = (
        caps[1].parse::<u64>().ok()?,
        caps[2].parse::<u64>().ok()?,
        caps[3].parse::<u64>().ok()?,
    );

    let (major, minor, patch) = match level {
        BumpLevel::Patch => (major, minor, patch + 1),
        BumpLevel::Minor => (major, minor + 1, 0),
        BumpLevel::Major => (major + 1, 0, 0),
    };

    let old = format!("{}.{}.{}", &caps[1], &caps[2], &caps[3]);
    let new = format!("{major}.{minor}.{patch}");
    let start = caps.get(1)?.start();
    let end = caps.get(3)?.end();

    Some(Bumped {
        text: replace_span(text, start, end, &new),
        old,
        new,
    })
}
