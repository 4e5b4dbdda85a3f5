//! Tests for the frequency engine: histograms, ranking and tie-breaking

use rstest::rstest;

use lexstat::domain::{letter_frequency, ngram_frequency, normalize, tokenize, top_tokens};
use lexstat::FrequencyEntry;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// Letter Frequency Tests
// ============================================================

#[test]
fn given_any_text_when_letter_frequency_then_exactly_26_entries_a_to_z() {
    let table = letter_frequency("banana");
    assert_eq!(table.len(), 26);
    let keys: Vec<&str> = table.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys.first(), Some(&"a"));
    assert_eq!(keys.last(), Some(&"z"));
    // a→z order regardless of count
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn given_normalized_text_when_letter_frequency_then_counts_sum_to_letters() {
    let normalized = normalize("The quick brown fox, jumps!");
    let total: usize = letter_frequency(&normalized).iter().map(|e| e.count).sum();
    let letters = normalized.chars().filter(|c| c.is_ascii_lowercase()).count();
    assert_eq!(total, letters);
}

#[test]
fn given_empty_text_when_letter_frequency_then_all_zero() {
    let table = letter_frequency("");
    assert!(table.iter().all(|e| e.count == 0));
    assert_eq!(table.len(), 26);
}

// ============================================================
// Top Token Tests
// ============================================================

#[test]
fn given_repeats_when_top_tokens_then_ranked_by_count_descending() {
    let input = tokens(&["fun", "data", "data", "science", "data", "science"]);
    let table = top_tokens(&input, 3).unwrap();
    assert_eq!(table[0], FrequencyEntry::new("data", 3));
    assert_eq!(table[1], FrequencyEntry::new("science", 2));
    assert_eq!(table[2], FrequencyEntry::new("fun", 1));
}

#[test]
fn given_equal_counts_when_top_tokens_then_lexicographic_tie_break() {
    // Deterministic regardless of first-seen order.
    let forward = tokens(&["beta", "alpha", "gamma"]);
    let backward = tokens(&["gamma", "alpha", "beta"]);
    let table_f = top_tokens(&forward, 3).unwrap();
    let table_b = top_tokens(&backward, 3).unwrap();
    assert_eq!(table_f, table_b);
    assert_eq!(table_f[0].key, "alpha");
    assert_eq!(table_f[2].key, "gamma");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn given_top_n_when_top_tokens_then_cardinality_bounded(#[case] top_n: usize) {
    let input = tokens(&["a", "b", "a", "c"]);
    let distinct = 3;
    let table = top_tokens(&input, top_n).unwrap();
    assert_eq!(table.len(), top_n.min(distinct));
}

#[test]
fn given_zero_top_n_when_top_tokens_then_error() {
    assert!(top_tokens(&tokens(&["a"]), 0).is_err());
}

// ============================================================
// N-gram Tests
// ============================================================

#[test]
fn given_reference_tokens_when_bigram_frequency_then_data_science_tops() {
    let input = tokens(&["data", "science", "data", "science", "is", "fun"]);
    let table = ngram_frequency(&input, 2, 10).unwrap();
    assert_eq!(table[0], FrequencyEntry::new("data science", 2));
}

#[test]
fn given_reference_tokens_when_trigram_frequency_then_space_joined_windows() {
    let input = tokens(&["data", "science", "is", "fun"]);
    let table = ngram_frequency(&input, 3, 10).unwrap();
    let keys: Vec<&str> = table.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["data science is", "science is fun"]);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(4)]
fn given_short_sequence_when_ngram_frequency_then_empty(#[case] n: usize) {
    let input = tokens(&["solo"]);
    assert!(ngram_frequency(&input, n, 10).unwrap().is_empty());
}

#[test]
fn given_sequence_length_equal_to_n_when_ngram_frequency_then_single_window() {
    let input = tokens(&["a", "b", "c"]);
    let table = ngram_frequency(&input, 3, 10).unwrap();
    assert_eq!(table, vec![FrequencyEntry::new("a b c", 1)]);
}

#[test]
fn given_unigram_order_when_ngram_frequency_then_matches_top_tokens() {
    let input = tokens(&["x", "y", "x"]);
    let unigrams = ngram_frequency(&input, 1, 10).unwrap();
    let words = top_tokens(&input, 10).unwrap();
    assert_eq!(unigrams, words);
}

#[test]
fn given_zero_order_when_ngram_frequency_then_error() {
    assert!(ngram_frequency(&tokens(&["a"]), 0, 10).is_err());
}

// ============================================================
// End-to-end over real text
// ============================================================

#[test]
fn given_excerpt_fixture_when_counting_then_window_count_matches_tokens() {
    let raw = std::fs::read_to_string("tests/resources/excerpt.txt").unwrap();
    let toks = tokenize(&normalize(&raw));
    assert!(toks.len() > 50);

    let bigrams = ngram_frequency(&toks, 2, usize::MAX).unwrap();
    let total_windows: usize = bigrams.iter().map(|e| e.count).sum();
    assert_eq!(total_windows, toks.len() - 1);
}
