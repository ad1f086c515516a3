//! Keyword-based emotion classification.
//!
//! A pure, deterministic mapping from free text to an [`EmotionLabel`]:
//! lowercase the input, walk a fixed ordered rule list, first rule with any
//! substring match wins, otherwise `Neutral`. Rule order is part of the
//! contract: when several keyword sets would match, the earlier rule is
//! authoritative. No NLU, no scoring, auditability over accuracy.

use crate::types::EmotionLabel;

/// Ordered classification rules. Position in this list is priority.
static RULES: &[(EmotionLabel, &[&str])] = &[
    (
        EmotionLabel::Happy,
        &[
            "happy",
            "excited",
            "joy",
            "great",
            "awesome",
            "grateful",
            "wonderful",
            "amazing",
            "delighted",
            "proud",
        ],
    ),
    (
        EmotionLabel::Focused,
        &[
            "focus",
            "productive",
            "determined",
            "motivated",
            "concentrat",
            "locked in",
            "in the zone",
        ],
    ),
    (
        EmotionLabel::Tired,
        &[
            "tired",
            "exhausted",
            "sleepy",
            "drained",
            "fatigue",
            "worn out",
            "no energy",
        ],
    ),
    (
        EmotionLabel::Sad,
        &[
            "sad",
            "unhappy",
            "depress",
            "gloomy",
            "lonely",
            "miserable",
            "tearful",
            "heartbroken",
        ],
    ),
    (
        EmotionLabel::Anxious,
        &[
            "anxious",
            "anxiety",
            "nervous",
            "worried",
            "worry",
            "stress",
            "overwhelm",
            "panic",
            "uneasy",
            "afraid",
        ],
    ),
];

/// Classify free text into an emotion label.
///
/// Total over all inputs: empty or unmatched text classifies as `Neutral`,
/// and identical input always yields the identical label.
pub fn classify(text: &str) -> EmotionLabel {
    let lowered = text.to_lowercase();
    if lowered.trim().is_empty() {
        return EmotionLabel::Neutral;
    }

    for (label, keywords) in RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *label;
        }
    }

    EmotionLabel::Neutral
}
