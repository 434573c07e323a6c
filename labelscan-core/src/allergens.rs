//! Declared-allergen detection.
//!
//! Two independent paths feed the result: the label's "ALLERGEN …:" clause
//! and free-standing "Contains …" sentences. Either alone is enough; labels
//! commonly carry both.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Allergen tokens recognized on labels (lowercase), singular and common
/// plural/synonym forms included.
pub const ALLERGENS: &[&str] = &[
    "milk",
    "soy",
    "soya",
    "wheat",
    "gluten",
    "egg",
    "peanut",
    "peanuts",
    "tree nuts",
    "almond",
    "cashew",
    "sesame",
    "mustard",
    "fish",
    "shellfish",
    "crustacean",
    "shrimp",
    "prawn",
    "celery",
    "lupin",
    "sulphite",
    "sulfite",
];

/// First "allergen …:" clause, captured up to the next sentence break.
static ALLERGEN_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)allergen[^:]*:\s*([^.\n]+)").expect("Invalid allergen clause regex")
});

/// Per-allergen "contains …" patterns: a word-bounded "contains" followed,
/// within the same sentence, by the allergen with an optional plural `s`.
static CONTAINS_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ALLERGENS
        .iter()
        .map(|&allergen| {
            let re = Regex::new(&format!(r"\bcontains\b[^.]*\b{}s?\b", allergen))
                .expect("Invalid contains regex");
            (allergen, re)
        })
        .collect()
});

/// Collect declared allergens from normalized label text.
///
/// The result is sorted lexicographically, deduplicated, and every element
/// is drawn from [`ALLERGENS`].
pub fn extract_allergens(text: &str) -> Vec<String> {
    let mut found = BTreeSet::new();

    if let Some(cap) = ALLERGEN_CLAUSE.captures(text) {
        let chunk = cap[1].to_lowercase();
        for word in chunk.split(|c: char| c == ',' || c == ';' || c == '/' || c.is_whitespace()) {
            let word = word.trim().trim_end_matches('.');
            if ALLERGENS.contains(&word) {
                found.insert(word.to_string());
            }
        }
    }

    let low = text.to_lowercase();
    for (allergen, re) in CONTAINS_PATTERNS.iter() {
        if re.is_match(&low) {
            found.insert((*allergen).to_string());
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_clause() {
        assert_eq!(
            extract_allergens("ALLERGEN ADVICE: Contains milk, soy."),
            vec!["milk", "soy"]
        );
    }

    #[test]
    fn test_contains_sentence() {
        assert_eq!(
            extract_allergens("Contains wheat and soy."),
            vec!["soy", "wheat"]
        );
    }

    #[test]
    fn test_contains_matches_optional_plural() {
        // "peanuts" satisfies both the "peanut" pattern (plural s) and the
        // "peanuts" table entry.
        assert_eq!(
            extract_allergens("Contains peanuts."),
            vec!["peanut", "peanuts"]
        );
    }

    #[test]
    fn test_contains_does_not_cross_sentence_boundary() {
        assert!(extract_allergens("Contains no additives. Wheat flour used.").is_empty());
    }

    #[test]
    fn test_unknown_words_ignored() {
        assert!(extract_allergens("ALLERGENS: sunlight, sadness.").is_empty());
    }

    #[test]
    fn test_no_allergen_text() {
        assert!(extract_allergens("Ingredients: water").is_empty());
    }
}
