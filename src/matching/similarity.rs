// Bag-of-words cosine similarity between two cleaned texts.
//
// Each text becomes a term-count vector over the joint vocabulary:
//
//   cos(a, b) = sum(a_t * b_t) / (|a| * |b|)
//
// Terms missing from one side contribute zero to the dot product, so only the
// shared terms need visiting. A zero vector has no direction; the score for it
// is defined as 0.0.

use std::collections::HashMap;

use super::normalize::CleanedText;

/// Term-count vector for one cleaned text.
pub fn term_counts(cleaned: &CleanedText) -> HashMap<&str, u64> {
    let mut counts = HashMap::new();
    for token in cleaned.tokens() {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of two sparse count vectors, in [0.0, 1.0].
pub fn cosine_similarity(a: &HashMap<&str, u64>, b: &HashMap<&str, u64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(term, &x)| large.get(term).map(|&y| (x * y) as f64))
        .sum();

    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(v: &HashMap<&str, u64>) -> f64 {
    v.values().map(|&c| (c * c) as f64).sum::<f64>().sqrt()
}

/// Similarity of two cleaned texts as a percentage rounded to two decimals.
pub fn similarity_percent(a: &CleanedText, b: &CleanedText) -> f64 {
    let cosine = cosine_similarity(&term_counts(a), &term_counts(b));
    round2(cosine * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
