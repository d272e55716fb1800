//! Analysis model
//!
//! The result of running the analyzer over a piece of text. Never persisted;
//! recomputed every time it is asked for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Post;

/// Best possible score
pub const MAX_SCORE: u32 = 100;

/// Word statistics and repetition score for one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Number of tokens
    pub total_words: usize,
    /// Number of distinct tokens
    pub unique_words: usize,
    /// `total_words - unique_words`
    pub repetitions: usize,
    /// Tokens flagged by the spell checker
    pub misspelled: usize,
    /// `max(100 - misspelled - repetitions, 0)`
    pub score: u32,
    /// Occurrences per token
    pub word_counts: BTreeMap<String, usize>,
}

impl Analysis {
    /// Tokens that occur more than once, most frequent first
    ///
    /// Ties are broken alphabetically.
    #[must_use]
    pub fn repeated_words(&self) -> Vec<(&str, usize)> {
        let mut repeated: Vec<(&str, usize)> = self
            .word_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        repeated
    }
}

/// A post together with the analysis of its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostAnalysis {
    /// The analyzed post
    #[serde(flatten)]
    pub post: Post,
    /// Analysis of `post.content`
    #[serde(flatten)]
    pub analysis: Analysis,
}
