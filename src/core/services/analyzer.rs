//! Analyzer service - tokenizer, frequency counter and scorer in one pass
//!
//! This is pure business logic with no I/O. The only collaborator is the
//! [`SpellChecker`] port, which feeds the `misspelled` term of the score.

use crate::core::models::{Analysis, Post, PostAnalysis};
use crate::core::ports::{NoSpellChecker, SpellChecker};

use super::frequency::count_frequencies;
use super::scorer::{ScoreInputs, score};
use super::tokenizer::tokenize;

/// Text analyzer with a pluggable spell checker
pub struct Analyzer {
    spell_checker: Box<dyn SpellChecker>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Box::new(NoSpellChecker))
    }
}

impl Analyzer {
    /// Create an analyzer using the given spell checker
    #[must_use]
    pub fn new(spell_checker: Box<dyn SpellChecker>) -> Self {
        Self { spell_checker }
    }

    /// Analyze a piece of text
    #[must_use]
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = tokenize(text);
        let word_counts = count_frequencies(&tokens);
        let inputs = ScoreInputs {
            total_words: tokens.len(),
            unique_words: word_counts.len(),
            misspelled: self.spell_checker.misspelled(&tokens),
        };
        let scored = score(inputs);

        Analysis {
            total_words: inputs.total_words,
            unique_words: inputs.unique_words,
            repetitions: scored.repetitions,
            misspelled: inputs.misspelled,
            score: scored.score,
            word_counts,
        }
    }

    /// Analyze the content of one post
    #[must_use]
    pub fn analyze_post(&self, post: Post) -> PostAnalysis {
        let analysis = self.analyze(&post.content);
        PostAnalysis { post, analysis }
    }

    /// Analyze every post, keeping their order
    #[must_use]
    pub fn analyze_posts(&self, posts: Vec<Post>) -> Vec<PostAnalysis> {
        posts.into_iter().map(|p| self.analyze_post(p)).collect()
    }
}

/// Analyze text with the default (no-op) spell checker
///
/// # Examples
///
/// ```
/// use blogo::core::services::analyze;
///
/// let a = analyze("dog dog dog dog");
/// assert_eq!((a.total_words, a.unique_words, a.repetitions, a.score), (4, 1, 3, 97));
/// ```
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    Analyzer::default().analyze(text)
}
