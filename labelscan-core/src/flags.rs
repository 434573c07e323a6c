//! Dietary flags for downstream scoring.

use std::sync::LazyLock;

use regex::Regex;

use crate::additives::MSG_LIKE;
use crate::types::{Additive, Flags};

/// Word-initial palm / palmolein / palm oil.
static PALM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpalm(olein| oil)?\b").expect("Invalid palm regex"));

/// Artificial flavouring phrasings seen on labels.
static ARTIFICIAL_FLAVOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nature identical|artificial flavour|flavouring substances")
        .expect("Invalid artificial flavour regex")
});

/// Compute the dietary flags from normalized label text and the extracted
/// additive codes. Each flag is independent. These are deliberately crude
/// signals for a separate scoring stage, not judgements.
pub fn compute_flags(text: &str, additives: &[Additive]) -> Flags {
    let low = text.to_lowercase();
    Flags {
        palm_oil: PALM.is_match(&low),
        added_sugar: low.contains("sugar") || low.contains("corn syrup") || low.contains("glucose"),
        added_salt: low.contains("salt"),
        msg_like_enhancer: additives
            .iter()
            .any(|a| MSG_LIKE.contains(&a.code.as_str())),
        artificial_flavour: ARTIFICIAL_FLAVOUR.is_match(&low),
    }
}
