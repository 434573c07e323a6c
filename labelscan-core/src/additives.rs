//! Additive code extraction and the E-number registry.
//!
//! Labels mix "E621", "INS 621", and bare "621"; codes are matched on the
//! lowercased text and resolved against a registry loaded from
//! `data/additives.json` at compile time.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::types::Additive;

/// The raw JSON structure of the embedded registry file.
#[derive(Deserialize)]
struct AdditivesData {
    codes: HashMap<String, String>,
}

/// Code → name registry. Deliberately partial: unknown codes still surface
/// in results, with no name.
static ADDITIVE_NAMES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let json = include_str!("../../data/additives.json");
    let data: AdditivesData =
        serde_json::from_str(json).expect("Failed to parse additives.json");
    data.codes
});

/// Glutamate-family flavour enhancer codes, flagged as a group.
pub const MSG_LIKE: &[&str] = &["621", "622", "623", "624", "625", "627", "631"];

/// Default pattern: a 3-digit code following a word-bounded `e`/`ins`
/// marker. The optional trailing parenthetical qualifier is consumed so its
/// content is not rescanned.
static CODE_PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:e|ins)\s*(\d{3})\b(?:\s*\([^)]+\))?").expect("Invalid additive regex")
});

/// Legacy permissive pattern: any word-initial 3-digit run, marker optional.
/// Matches fragments of larger figures ("100g"), which is why it sits behind
/// a compatibility switch.
static CODE_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:e|ins)?\s*(\d{3})(?:\s*\([^)]+\))?").expect("Invalid bare additive regex")
});

/// Look up the human-readable name for a 3-digit code.
pub fn additive_name(code: &str) -> Option<String> {
    ADDITIVE_NAMES.get(code).cloned()
}

/// Extract additive codes from normalized label text, deduplicated by first
/// occurrence with textual order preserved.
pub fn extract_additives(text: &str, bare_codes: bool) -> Vec<Additive> {
    let low = text.to_lowercase();
    let pattern: &Regex = if bare_codes { &CODE_BARE } else { &CODE_PREFIXED };

    let mut seen = HashSet::new();
    let mut additives = Vec::new();
    for cap in pattern.captures_iter(&low) {
        let code = &cap[1];
        if seen.insert(code.to_string()) {
            additives.push(Additive {
                code: code.to_string(),
                name: additive_name(code),
            });
        }
    }
    additives
}
