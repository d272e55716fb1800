//! Repetition scorer
//!
//! Turns word counts into a redundancy-penalized score in `[0, 100]`.

use crate::core::models::MAX_SCORE;

/// Inputs to the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreInputs {
    /// Number of tokens
    pub total_words: usize,
    /// Number of distinct tokens (never more than `total_words`)
    pub unique_words: usize,
    /// Misspelled tokens reported by the spell checker
    pub misspelled: usize,
}

/// Scorer output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// `total_words - unique_words`
    pub repetitions: usize,
    /// `max(100 - misspelled - repetitions, 0)`
    pub score: u32,
}

/// Compute repetitions and the bounded score
///
/// # Examples
///
/// ```
/// use blogo::core::services::{ScoreInputs, score};
///
/// let s = score(ScoreInputs { total_words: 4, unique_words: 1, misspelled: 0 });
/// assert_eq!(s.repetitions, 3);
/// assert_eq!(s.score, 97);
/// ```
#[must_use]
pub fn score(inputs: ScoreInputs) -> Score {
    let repetitions = inputs.total_words.saturating_sub(inputs.unique_words);
    let penalty = inputs.misspelled.saturating_add(repetitions);
    let score = u32::try_from(penalty).map_or(0, |p| MAX_SCORE.saturating_sub(p));
    Score { repetitions, score }
}
