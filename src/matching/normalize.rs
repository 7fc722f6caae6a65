// Text normalization: raw document text to a cleaned token stream.
//
// Lowercase, drop everything that isn't an ASCII letter or whitespace, split on
// whitespace, then discard stopwords and tokens of two characters or fewer.
// Digits go too, so "5 years" and "python3" lose their numbers. That's
// acceptable for keyword-style comparison.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Tokens must be at least this many characters long to survive.
pub const MIN_TOKEN_LEN: usize = 3;

/// The cleaned, immutable token sequence of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText {
    tokens: Vec<String>,
}

impl CleanedText {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens rejoined with single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Reusable normalizer holding the stopword list and the character filter.
pub struct Normalizer {
    stop_words: HashSet<String>,
    non_alpha: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Build a normalizer with the English stopword list.
    pub fn new() -> Self {
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        Self::with_stop_words(stop_words)
    }

    /// Build a normalizer with a caller-provided stopword list.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            non_alpha: Regex::new(r"[^a-z\s]").expect("valid pattern"),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Clean raw text into keyword-ready tokens.
    pub fn clean(&self, raw: &str) -> CleanedText {
        // regex-lite's \s is ASCII-only; fold no-break and em spaces first
        let lower: String = raw
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        let letters_only = self.non_alpha.replace_all(&lower, "");

        let tokens = letters_only
            .split_whitespace()
            .filter(|word| word.len() >= MIN_TOKEN_LEN && !self.is_stop_word(word))
            .map(str::to_string)
            .collect();

        CleanedText { tokens }
    }
}
