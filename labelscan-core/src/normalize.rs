//! Text normalization for raw OCR output.
//!
//! OCR text arrives as newline-separated lines with assorted Unicode dashes
//! and uneven spacing. Every downstream stage operates on the single-line
//! form produced here.

use std::sync::LazyLock;

use regex::Regex;

/// Unicode dash variants (hyphen U+2010 through horizontal bar U+2015).
static DASH_VARIANTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{2010}-\u{2015}]").expect("Invalid dash regex"));

/// Runs of whitespace. `\s` is Unicode-aware, so non-breaking spaces from OCR
/// collapse here too.
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Normalize raw OCR text to a canonical single-line form.
///
/// Newlines become spaces, fancy dashes become `-`, curly single quotes
/// become `'`, and whitespace runs collapse to one space. Casing is preserved
/// so ingredient names keep their label capitalization.
pub fn normalize(text: &str) -> String {
    let text = text.replace('\n', " ");
    let text = text.replace(['\u{2018}', '\u{2019}'], "'");
    let text = DASH_VARIANTS.replace_all(&text, "-");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
