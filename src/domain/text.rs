//! Text normalization, tokenization and stopword filtering.
//!
//! All functions are pure; the stopword set is an explicit value built from
//! configuration, never process-wide state.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Characters removed by [`normalize`]: ASCII punctuation plus the common
/// smart-quote, em-dash and ellipsis variants.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{201c}\u{201d}\u{2018}\u{2019}\u{2014}\u{2026}";

/// English stopword list compatible with the wordcloud package defaults.
const BUILTIN_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
    "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself", "him",
    "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've", "if",
    "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like", "me",
    "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't",
    "since", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[a-z]+").unwrap())
}

/// Lowercases the text and deletes punctuation characters.
///
/// Punctuation is removed by deletion, not replaced with whitespace, so
/// words separated only by punctuation concatenate ("end.Start" becomes
/// "endstart"). Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect()
}

/// Extracts maximal runs of lowercase ASCII letters from the lowercased
/// input. Digits, remaining symbols and whitespace delimit tokens and
/// produce none themselves.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Stopword set, assembled from the built-in English defaults plus
/// caller-supplied extras (typically `Settings::extra_stopwords`).
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self {
            words: BUILTIN_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Stopwords {
    /// Built-in defaults plus the given extra words.
    pub fn with_extras(extras: &[String]) -> Self {
        let mut stopwords = Self::default();
        for word in extras {
            stopwords.words.insert(word.clone());
        }
        stopwords
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Removes stopword tokens, preserving the order of the survivors.
pub fn filter_stopwords(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}
