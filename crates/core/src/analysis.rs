//! Rule-based scene heuristics: complexity bucketing and keyword
//! category matching.
//!
//! These run entirely offline and are independent of the model call --
//! the analyze-scene handler does not consult them. Word counts are
//! whitespace-delimited tokens.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Complexity thresholds
// ---------------------------------------------------------------------------

/// Word counts below this are "simple".
pub const SIMPLE_WORD_LIMIT: usize = 20;
/// Word counts below this (and at or above [`SIMPLE_WORD_LIMIT`]) are "medium".
pub const MEDIUM_WORD_LIMIT: usize = 50;

/// Coarse complexity bucket for a scene description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// Complexity bucket plus the shot count it suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityEstimate {
    pub complexity: Complexity,
    pub recommended_shots: u32,
}

/// Bucket a scene description by word count.
///
/// Thresholds are exclusive upper bounds on the lower bucket: exactly
/// 20 words is medium, exactly 50 is complex. The empty string has zero
/// words and is simple.
pub fn analyze_complexity(scene: &str) -> ComplexityEstimate {
    let word_count = scene.split_whitespace().count();

    if word_count < SIMPLE_WORD_LIMIT {
        ComplexityEstimate {
            complexity: Complexity::Simple,
            recommended_shots: 2,
        }
    } else if word_count < MEDIUM_WORD_LIMIT {
        ComplexityEstimate {
            complexity: Complexity::Medium,
            recommended_shots: 4,
        }
    } else {
        ComplexityEstimate {
            complexity: Complexity::Complex,
            recommended_shots: 6,
        }
    }
}

// ---------------------------------------------------------------------------
// Keyword categories
// ---------------------------------------------------------------------------

/// Ordered (category, keywords) table. Result order of
/// [`extract_keywords`] follows this table, not match order.
pub const KEYWORD_CATEGORIES: &[(&str, &[&str])] = &[
    ("action", &["fight", "chase", "run", "explosion", "car"]),
    ("dialogue", &["conversation", "talk", "discuss", "argue", "debate"]),
    ("emotion", &["sad", "happy", "angry", "tense", "romantic"]),
    ("lighting", &["dark", "bright", "dim", "shadow", "sunlight", "neon"]),
];

/// Match a description against the category table.
///
/// A category is included when any of its keywords appears as a
/// case-insensitive substring of the text.
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();

    KEYWORD_CATEGORIES
        .iter()
        .filter(|(_, words)| words.iter().any(|w| text_lower.contains(w)))
        .map(|(category, _)| *category)
        .collect()
}
