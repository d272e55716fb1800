//! Spell checker port
//!
//! The analyzer subtracts the misspelled-word count from the score. No real
//! dictionary ships with blogo; [`NoSpellChecker`] always reports zero.

/// Counts misspelled words in a token sequence
pub trait SpellChecker: Send + Sync {
    /// Number of misspelled tokens
    fn misspelled(&self, tokens: &[String]) -> usize;
}

/// Spell checker that never flags anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpellChecker;

impl SpellChecker for NoSpellChecker {
    fn misspelled(&self, _tokens: &[String]) -> usize {
        0
    }
}
