//! Property-based tests for the analysis core
//!
//! Uses proptest to verify properties that should hold for all inputs.

use blogo::core::services::{ScoreInputs, analyze, score, tokenize};
use proptest::prelude::*;

proptest! {
    /// Repetitions never exceed the word count
    #[test]
    fn repetitions_bounded_by_total(text in ".{0,400}") {
        let a = analyze(&text);
        prop_assert!(a.unique_words <= a.total_words);
        prop_assert!(a.repetitions <= a.total_words);
        prop_assert_eq!(a.repetitions, a.total_words - a.unique_words);
    }

    /// Score always lands in [0, 100]
    #[test]
    fn score_in_range(text in ".{0,400}") {
        let a = analyze(&text);
        prop_assert!(a.score <= 100);
    }

    /// Analyzing the same text twice gives the same result
    #[test]
    fn analysis_is_idempotent(text in ".{0,200}") {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    /// Upper-casing ASCII words does not change the analysis
    #[test]
    fn analysis_ignores_case(words in prop::collection::vec("[a-z]{1,8}", 0..40)) {
        let lower = words.join(" ");
        let upper = lower.to_uppercase();
        prop_assert_eq!(analyze(&lower), analyze(&upper));
    }

    /// Punctuation between words does not change the tokens
    #[test]
    fn punctuation_is_ignored(words in prop::collection::vec("[a-z0-9]{1,8}", 0..40)) {
        let spaced = words.join(" ");
        let punctuated = words.join(", ");
        prop_assert_eq!(tokenize(&spaced), tokenize(&punctuated));
    }

    /// Every token is non-empty and already lowercase
    #[test]
    fn tokens_are_lowercase(text in "[A-Za-z .,!?]{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    /// The score matches the closed form for any counts
    #[test]
    fn score_matches_formula(
        unique in 0usize..300,
        extra in 0usize..300,
        misspelled in 0usize..300
    ) {
        let total = unique + extra;
        let s = score(ScoreInputs { total_words: total, unique_words: unique, misspelled });
        let expected = 100i64 - misspelled as i64 - extra as i64;
        prop_assert_eq!(s.repetitions, extra);
        prop_assert_eq!(i64::from(s.score), expected.max(0));
    }

    /// A hundred or more repetitions always scores zero
    #[test]
    fn many_repetitions_score_zero(word in "[a-z]{1,8}", times in 101usize..300) {
        let text = vec![word.as_str(); times].join(" ");
        prop_assert_eq!(analyze(&text).score, 0);
    }
}
