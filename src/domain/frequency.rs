//! Frequency engine: letter histograms and ranked token / n-gram tables.
//!
//! All functions are pure and total over well-formed inputs; the only
//! failure mode is invalid caller configuration (zero `n` or `top_n`).

use itertools::Itertools;

use crate::domain::error::{DomainError, DomainResult};

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub key: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Complete a-z histogram over the (already normalized) text.
///
/// Always returns exactly 26 entries in alphabetical order, zero counts
/// included. This is a fixed-domain histogram, not a sparse top-K table.
pub fn letter_frequency(text: &str) -> Vec<FrequencyEntry> {
    let mut counts = [0usize; 26];
    for c in text.chars().filter(char::is_ascii_lowercase) {
        counts[(c as u8 - b'a') as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| FrequencyEntry::new(((b'a' + i as u8) as char).to_string(), count))
        .collect()
}

/// Top `top_n` tokens by occurrence count.
///
/// Ranking is count descending; equal counts order lexicographically
/// ascending on the token, so the result is deterministic regardless of
/// input order. Returns all distinct tokens if fewer than `top_n` exist.
pub fn top_tokens(tokens: &[String], top_n: usize) -> DomainResult<Vec<FrequencyEntry>> {
    if top_n == 0 {
        return Err(DomainError::InvalidTopN(top_n));
    }
    Ok(rank(tokens.iter().map(String::as_str), top_n))
}

/// Top `top_n` n-grams of order `n`, joined with a single space.
///
/// Windows slide one token at a time over the sequence; with fewer than
/// `n` tokens there are no windows and the result is empty (not an
/// error). Ranking and tie-break match [`top_tokens`].
pub fn ngram_frequency(tokens: &[String], n: usize, top_n: usize) -> DomainResult<Vec<FrequencyEntry>> {
    if n == 0 {
        return Err(DomainError::InvalidNgramOrder(n));
    }
    if top_n == 0 {
        return Err(DomainError::InvalidTopN(top_n));
    }
    if tokens.len() < n {
        return Ok(Vec::new());
    }
    let grams: Vec<String> = tokens.windows(n).map(|window| window.join(" ")).collect();
    Ok(rank(grams.iter().map(String::as_str), top_n))
}

/// Shared ranking rule: count descending, then key ascending.
fn rank<'a>(keys: impl Iterator<Item = &'a str>, top_n: usize) -> Vec<FrequencyEntry> {
    keys.counts()
        .into_iter()
        .sorted_by(|(key_a, count_a), (key_b, count_b)| {
            count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
        })
        .take(top_n)
        .map(|(key, count)| FrequencyEntry::new(key, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn given_text_when_letter_frequency_then_26_entries_in_order() {
        let table = letter_frequency("abca");
        assert_eq!(table.len(), 26);
        assert_eq!(table[0], FrequencyEntry::new("a", 2));
        assert_eq!(table[1], FrequencyEntry::new("b", 1));
        assert_eq!(table[25], FrequencyEntry::new("z", 0));
    }

    #[test]
    fn given_text_when_letter_frequency_then_counts_sum_to_letter_total() {
        let text = "the quick brown fox";
        let total: usize = letter_frequency(text).iter().map(|e| e.count).sum();
        let expected = text.chars().filter(char::is_ascii_lowercase).count();
        assert_eq!(total, expected);
    }

    #[test]
    fn given_tie_when_top_tokens_then_lexicographic_ascending() {
        let input = tokens(&["zebra", "apple", "zebra", "apple", "mango"]);
        let table = top_tokens(&input, 3).unwrap();
        assert_eq!(table[0], FrequencyEntry::new("apple", 2));
        assert_eq!(table[1], FrequencyEntry::new("zebra", 2));
        assert_eq!(table[2], FrequencyEntry::new("mango", 1));
    }

    #[test]
    fn given_zero_top_n_when_ranking_then_fails_fast() {
        assert!(top_tokens(&tokens(&["a"]), 0).is_err());
        assert!(ngram_frequency(&tokens(&["a", "b"]), 2, 0).is_err());
    }

    #[test]
    fn given_zero_order_when_ngram_frequency_then_fails_fast() {
        assert!(ngram_frequency(&tokens(&["a", "b"]), 0, 5).is_err());
    }

    #[test]
    fn given_short_sequence_when_ngram_frequency_then_empty() {
        let table = ngram_frequency(&tokens(&["only"]), 2, 5).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn given_repeated_bigram_when_ngram_frequency_then_it_ranks_first() {
        let input = tokens(&["data", "science", "data", "science", "is", "fun"]);
        let table = ngram_frequency(&input, 2, 5).unwrap();
        assert_eq!(table[0], FrequencyEntry::new("data science", 2));
    }

    #[test]
    fn given_fewer_distinct_keys_than_top_n_when_ranking_then_all_returned() {
        let input = tokens(&["a", "b", "a"]);
        assert_eq!(top_tokens(&input, 10).unwrap().len(), 2);
    }
}
