//! Frequency counter - occurrences per token

use std::collections::BTreeMap;

/// Count how often each token occurs
///
/// The number of keys in the result is the count of distinct tokens.
#[must_use]
pub fn count_frequencies<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}
