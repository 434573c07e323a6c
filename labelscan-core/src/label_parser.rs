//! Label parsing module.
//!
//! Turns normalized OCR text into a structured [`Label`]: ingredients with
//! optional declared percentages, allergens, additive codes, and dietary
//! flags. Parsing is best-effort and total: malformed labels produce empty
//! fields, never errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::additives::extract_additives;
use crate::allergens::extract_allergens;
use crate::flags::compute_flags;
use crate::normalize::normalize;
use crate::section::ingredients_block;
use crate::types::{Ingredient, Label};

/// Options controlling parser behavior.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Accept bare 3-digit runs as additive codes (the legacy permissive
    /// behavior, prone to matching weights like "100g"). Off by default:
    /// codes must follow an `E`/`INS` marker.
    pub bare_additive_codes: bool,
}

/// Outer percent annotation, e.g. `(60%)` or `(12.5 %)`. The same pattern
/// extracts the declared percentage and removes the annotation from the
/// name, so the two always agree. A bare `12%` in token text is not a
/// declared proportion and stays in the name.
static PERCENT_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d{1,3}(?:\.\d+)?)\s*%\)").expect("Invalid percent regex")
});

/// Additive-code parenthetical, e.g. `(E500)` or `(INS 621)`. These annotate
/// a code rather than list sub-ingredients and do not belong in the name.
static CODE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(?:e|ins)\s*\d{3}\s*\)").expect("Invalid code annotation regex")
});

/// Parse OCR label text into a structured [`Label`] with default options.
pub fn parse_label(text: &str) -> Label {
    parse_label_with_options(text, &ParseOptions::default())
}

/// Parse OCR label text into a structured [`Label`].
pub fn parse_label_with_options(text: &str, options: &ParseOptions) -> Label {
    let normalized = normalize(text);

    let block = ingredients_block(&normalized);
    let ingredients = parse_ingredient_list(&block);
    let allergens = extract_allergens(&normalized);
    let additives = extract_additives(&normalized, options.bare_additive_codes);
    let flags = compute_flags(&normalized, &additives);

    tracing::debug!(
        ingredients = ingredients.len(),
        allergens = allergens.len(),
        additives = additives.len(),
        "label parsed"
    );

    Label {
        ingredients,
        allergens,
        additives,
        flags,
    }
}

/// Parse a located ingredients block into ordered ingredients.
fn parse_ingredient_list(block: &str) -> Vec<Ingredient> {
    split_top_level_commas(block)
        .into_iter()
        .filter_map(parse_ingredient_token)
        .collect()
}

/// Split at commas lying outside any parenthetical, so compound ingredients
/// like "flour (wheat, rice)" stay together. Unbalanced close-parens clamp
/// the depth at zero. Empty tokens are dropped.
fn split_top_level_commas(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: u32 = 0;
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let part = s[start..i].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = s[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

/// Parse one comma-separated token into an ingredient, if a name survives
/// cleanup.
fn parse_ingredient_token(token: &str) -> Option<Ingredient> {
    let token = token.trim_matches(|c: char| c == ' ' || c == '.' || c == ';');

    let percent = PERCENT_ANNOTATION
        .captures(token)
        .and_then(|cap| cap[1].parse::<f64>().ok());

    let name = PERCENT_ANNOTATION.replace_all(token, "");
    let name = CODE_ANNOTATION.replace_all(&name, "");
    let name = strip_stray_parens(name.trim());

    if name.chars().any(|c| c.is_alphanumeric()) {
        Some(Ingredient {
            name: name.to_string(),
            percent,
        })
    } else {
        None
    }
}

/// Strip unmatched surrounding parentheses. Balanced pairs stay so compound
/// ingredients like "Seasoning (Salt, Pepper, Onion)" keep their inner list.
fn strip_stray_parens(name: &str) -> &str {
    let mut s = name.trim();
    loop {
        let opens = s.chars().filter(|&c| c == '(').count();
        let closes = s.chars().filter(|&c| c == ')').count();
        if s.starts_with('(') && opens > closes {
            s = s[1..].trim();
        } else if s.ends_with(')') && closes > opens {
            s = s[..s.len() - 1].trim();
        } else {
            return s;
        }
    }
}
