//! Semantic verification of rewritten source.
//!
//! Every rewrite is checked before it is accepted: the dedented value of
//! each helper argument must be identical before and after formatting.
//! Any parse failure fails the check, so a rewrite that breaks the file
//! can never be written out.

use ruff_python_parser::parse_module;

use crate::locator::{find_dedent_strings, DedentSpec};
use crate::reindent::dedent;

/// Compares the dedented helper arguments of two source texts.
///
/// Returns `true` only when both parse and every argument dedents to the
/// same value, position by position.
#[must_use]
pub fn dedent_values_match(original: &str, formatted: &str, spec: &DedentSpec) -> bool {
    let Ok(original_parsed) = parse_module(original) else {
        return false;
    };
    let Ok(formatted_parsed) = parse_module(formatted) else {
        return false;
    };

    let original_strings = find_dedent_strings(&original_parsed.into_syntax(), spec);
    let formatted_strings = find_dedent_strings(&formatted_parsed.into_syntax(), spec);

    if original_strings.len() != formatted_strings.len() {
        return false;
    }

    original_strings
        .iter()
        .zip(&formatted_strings)
        .all(|(before, after)| dedent(&before.value) == dedent(&after.value))
}
