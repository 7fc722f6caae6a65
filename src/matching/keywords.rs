// Keyword extraction: the top-N most frequent tokens of a cleaned text.
//
// Ranking is by descending count. Ties keep first-occurrence order, which
// falls out of counting in encounter order and then using a stable sort.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::normalize::CleanedText;

/// Default number of keywords extracted per document.
pub const DEFAULT_TOP_N: usize = 20;

/// A set of distinct keywords, kept in ranked order for display.
///
/// Equality and set operations ignore order; only output uses it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// Build from words in ranked order, dropping repeats.
    pub fn from_ranked<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| seen.insert(w.clone()))
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Keywords in `self` that are absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        let other: HashSet<&str> = other.iter().collect();
        KeywordSet {
            words: self
                .words
                .iter()
                .filter(|w| !other.contains(w.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn intersection_len(&self, other: &KeywordSet) -> usize {
        let other: HashSet<&str> = other.iter().collect();
        self.iter().filter(|w| other.contains(w)).count()
    }

    pub fn is_subset(&self, other: &KeywordSet) -> bool {
        self.difference(other).is_empty()
    }

    /// Comma-joined list for display.
    pub fn joined(&self) -> String {
        self.words.join(", ")
    }
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for KeywordSet {}

/// Token frequencies in first-encountered order.
pub fn term_frequencies(cleaned: &CleanedText) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in cleaned.tokens() {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    counts
}

/// The `n` most frequent tokens, ties broken by first occurrence.
pub fn top_keywords(cleaned: &CleanedText, n: usize) -> KeywordSet {
    let mut counts = term_frequencies(cleaned);
    // sort_by is stable, so equal counts stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    KeywordSet {
        words: counts.into_iter().take(n).map(|(word, _)| word).collect(),
    }
}
