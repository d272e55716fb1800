//! Parameterized tests for the analysis core using test-case

use blogo::core::ports::SpellChecker;
use blogo::core::services::{Analyzer, ScoreInputs, analyze, count_frequencies, score, tokenize};
use test_case::test_case;

// =============================================================================
// Tokenizer Tests
// =============================================================================

#[test_case("", &[] ; "empty input")]
#[test_case("!!! ... ???", &[] ; "punctuation only")]
#[test_case("Hello, World!", &["hello", "world"] ; "punctuation dropped")]
#[test_case("Cat cat CAT", &["cat", "cat", "cat"] ; "case folded")]
#[test_case("snake_case and-dash", &["snake_case", "and", "dash"] ; "underscore is a word char")]
#[test_case("it's 2024", &["it", "s", "2024"] ; "apostrophe splits digits kept")]
#[test_case("naïve Naive", &["na", "ve", "naive"] ; "non ascii letters separate")]
#[test_case("Café", &["caf"] ; "accented letter dropped")]
#[test_case("  spaced\n\tout  ", &["spaced", "out"] ; "whitespace runs")]
fn test_tokenize(input: &str, expected: &[&str]) {
    assert_eq!(tokenize(input), expected);
}

// =============================================================================
// Frequency Tests
// =============================================================================

#[test]
fn test_count_frequencies() {
    let counts = count_frequencies(&tokenize("the cat and the hat and the bat"));
    assert_eq!(counts.get("the"), Some(&3));
    assert_eq!(counts.get("and"), Some(&2));
    assert_eq!(counts.get("cat"), Some(&1));
    assert_eq!(counts.len(), 5);
}

#[test]
fn test_count_frequencies_is_ordered() {
    let counts = count_frequencies(&["zebra", "apple", "mango"]);
    let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
    assert_eq!(keys, ["apple", "mango", "zebra"]);
}

// =============================================================================
// Scorer Tests
// =============================================================================

#[test_case(0, 0, 0, 0, 100 ; "nothing")]
#[test_case(3, 3, 0, 0, 100 ; "all unique")]
#[test_case(4, 1, 0, 3, 97 ; "one word four times")]
#[test_case(101, 1, 0, 100, 0 ; "exactly one hundred repetitions")]
#[test_case(500, 2, 0, 498, 0 ; "floored at zero")]
#[test_case(10, 10, 7, 0, 93 ; "misspellings count")]
#[test_case(10, 5, 200, 5, 0 ; "misspellings floored")]
fn test_score(total: usize, unique: usize, misspelled: usize, repetitions: usize, expected: u32) {
    let s = score(ScoreInputs {
        total_words: total,
        unique_words: unique,
        misspelled,
    });
    assert_eq!(s.repetitions, repetitions);
    assert_eq!(s.score, expected);
}

// =============================================================================
// Analyzer Tests
// =============================================================================

#[test_case("", 0, 0, 0, 100 ; "empty text")]
#[test_case("one two three", 3, 3, 0, 100 ; "distinct words")]
#[test_case("dog dog dog dog", 4, 1, 3, 97 ; "repeated word")]
#[test_case("Cat cat CAT", 3, 1, 2, 98 ; "case insensitive")]
#[test_case("To be, or not to be: that is the question.", 10, 8, 2, 98 ; "hamlet")]
fn test_analyze(text: &str, total: usize, unique: usize, repetitions: usize, expected: u32) {
    let a = analyze(text);
    assert_eq!(a.total_words, total);
    assert_eq!(a.unique_words, unique);
    assert_eq!(a.repetitions, repetitions);
    assert_eq!(a.misspelled, 0);
    assert_eq!(a.score, expected);
}

#[test]
fn test_analyze_non_ascii_word() {
    let a = analyze("naïve naive");
    assert_eq!(a.total_words, 3);
    assert_eq!(a.unique_words, 3);
    assert_eq!(a.score, 100);
}

#[test]
fn test_analyze_case_insensitivity() {
    let upper = analyze("Cat cat CAT");
    let lower = analyze("cat cat cat");
    assert_eq!(upper, lower);
}

#[test]
fn test_analyze_word_counts_sum_to_total() {
    let a = analyze("a b a c b a");
    assert_eq!(a.word_counts.values().sum::<usize>(), a.total_words);
    assert_eq!(a.word_counts.len(), a.unique_words);
    assert_eq!(a.repeated_words(), vec![("a", 3), ("b", 2)]);
}

struct FlagLongWords;

impl SpellChecker for FlagLongWords {
    fn misspelled(&self, tokens: &[String]) -> usize {
        tokens.iter().filter(|t| t.chars().count() > 6).count()
    }
}

#[test]
fn test_spell_checker_lowers_score() {
    let analyzer = Analyzer::new(Box::new(FlagLongWords));
    let a = analyzer.analyze("short words and extraordinarily unnecessarily long ones");
    assert_eq!(a.misspelled, 2);
    assert_eq!(a.repetitions, 0);
    assert_eq!(a.score, 98);
}

#[test]
fn test_spell_checker_score_floor() {
    let analyzer = Analyzer::new(Box::new(FlagLongWords));
    let text = "extraordinary ".repeat(150);
    let a = analyzer.analyze(&text);
    assert_eq!(a.misspelled, 150);
    assert_eq!(a.score, 0);
}
