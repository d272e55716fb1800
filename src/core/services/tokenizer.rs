//! Tokenizer - split text into lowercase word tokens

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9_]+").expect("word pattern is a valid regex"));

/// Split `text` into lowercase word tokens
///
/// The whole input is lowercased first, then every maximal run of ASCII word
/// characters (`a-z`, `0-9`, `_`) becomes one token. Anything else, including
/// accented letters, only separates tokens.
///
/// # Examples
///
/// ```
/// use blogo::core::services::tokenize;
///
/// assert_eq!(tokenize("Hello, WORLD!"), vec!["hello", "world"]);
/// assert!(tokenize("?!").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}
