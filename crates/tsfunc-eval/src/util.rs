//! Small helpers shared by function implementations

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Back-reference in a user-supplied replacement (`\1`, `\12`)
pub static BACKREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(\d+)").expect("back-reference pattern is valid"));

/// Rewrite `\N` back-references into the `${N}` form understood by
/// [`Regex::replace`]
pub fn rewrite_backrefs(replacement: &str) -> Cow<'_, str> {
    BACKREF.replace_all(replacement, "$${$1}")
}

/// Whether `value` occurs in `set`
pub fn contains(set: &[i64], value: i64) -> bool {
    set.iter().any(|&v| v == value)
}
