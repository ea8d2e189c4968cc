use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// Collapses every run of whitespace (newlines and tabs included) into a single space
///
/// Leading and trailing whitespace is collapsed, not trimmed, so the text keeps
/// its overall shape. Attribute values that were split across lines become
/// single-line, which is what the attribute patterns in [`super::html`] rely on.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}
