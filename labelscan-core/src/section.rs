//! Section location within noisy label text.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;

/// Header aliases for the ingredients block, including OCR corruptions seen
/// in the wild.
pub const INGREDIENTS_START_KEYS: &[&str] = &[
    "ingredients",
    "ingredient",
    "ingedients",
    "ingr edients",
    "in gredients",
];

/// Headers that terminate the ingredients block.
pub const INGREDIENTS_END_KEYS: &[&str] = &[
    "allergen",
    "allergy",
    "nutrition",
    "nutritional",
    "nutri tion",
    "storage",
];

static INGREDIENTS_START: LazyLock<Regex> =
    LazyLock::new(|| alias_regex(INGREDIENTS_START_KEYS));

static INGREDIENTS_END: LazyLock<Regex> = LazyLock::new(|| alias_regex(INGREDIENTS_END_KEYS));

/// Build a case-insensitive regex matching any of the given header aliases.
/// Each literal space in an alias stands for an optional whitespace run, so
/// OCR-split headers like "in gredients" still match.
fn alias_regex(keys: &[&str]) -> Regex {
    let pattern = keys
        .iter()
        .map(|k| k.replace(' ', r"\s*"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", pattern)).expect("Invalid section header regex")
}

/// Locate the substring lying between the earliest start header and the
/// earliest end header past it.
///
/// Returns the empty string when no start alias matches. When no end alias
/// matches (or `end_keys` is empty), the section extends to end-of-text. The
/// result is stripped of surrounding spaces, `:`, `.`, and `-`.
pub fn find_section(text: &str, start_keys: &[&str], end_keys: &[&str]) -> String {
    let end_re = if end_keys.is_empty() {
        None
    } else {
        Some(alias_regex(end_keys))
    };
    find_section_with(text, &alias_regex(start_keys), end_re.as_ref())
}

/// The ingredients block of a label, using the precompiled header patterns.
pub fn ingredients_block(text: &str) -> String {
    find_section_with(text, &INGREDIENTS_START, Some(&INGREDIENTS_END))
}

fn find_section_with(text: &str, start_re: &Regex, end_re: Option<&Regex>) -> String {
    let t = normalize(text);
    let Some(m) = start_re.find(&t) else {
        return String::new();
    };
    let tail = &t[m.end()..];
    let end = end_re
        .and_then(|re| re.find(tail))
        .map(|mm| mm.start())
        .unwrap_or(tail.len());
    tail[..end]
        .trim_matches(|c: char| c == ' ' || c == ':' || c == '.' || c == '-')
        .to_string()
}
