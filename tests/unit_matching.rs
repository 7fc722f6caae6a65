// Unit tests for normalization, keyword extraction and similarity scoring.
//
// Tests the pure matching functions through the public API: property-style
// checks over a handful of realistic inputs, plus the job/resume scenarios.

use std::collections::HashSet;

use resumatch::analysis::{compare_texts, AnalysisOptions};
use resumatch::matching::keywords::{term_frequencies, top_keywords, KeywordSet};
use resumatch::matching::normalize::{Normalizer, MIN_TOKEN_LEN};
use resumatch::matching::similarity::{cosine_similarity, similarity_percent, term_counts};

const JOB: &str = "Looking for a Python developer with AWS and Docker experience";
const RESUME: &str = "Experienced Python developer skilled in Docker and Kubernetes";

fn samples() -> Vec<&'static str> {
    vec![
        JOB,
        RESUME,
        "Senior Rust engineer: async Rust, Tokio, gRPC; 5+ years building distributed systems.",
        "Data analyst with SQL, Tableau and Excel. Strong communication skills!",
        "rust rust rust python",
        "",
        "a an the of 42 !!",
    ]
}

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// Normalizer
// ============================================================

#[test]
fn normalizer_never_emits_short_tokens_or_stop_words() {
    let normalizer = Normalizer::new();
    for text in samples() {
        for token in normalizer.clean(text).tokens() {
            assert!(token.len() >= MIN_TOKEN_LEN, "short token {token:?} from {text:?}");
            assert!(!normalizer.is_stop_word(token), "stopword {token:?} from {text:?}");
            assert!(
                token.chars().all(|c| c.is_ascii_lowercase()),
                "non-letter in {token:?}"
            );
        }
    }
}

#[test]
fn normalizer_lowercases() {
    let cleaned = Normalizer::new().clean("KUBERNETES Terraform");
    assert_eq!(cleaned.joined(), "kubernetes terraform");
}

#[test]
fn no_break_spaces_do_not_glue_keywords() {
    // Word processors and PDF text often carry U+00A0 between words
    let job = "Python\u{00A0}developer with AWS\u{2003}and Docker";
    let resume = "Python developer with AWS and Docker";
    let result = compare_texts(&Normalizer::new(), job, resume, &AnalysisOptions::default());
    assert!(result.job_keywords.contains("python"));
    assert!(result.job_keywords.contains("aws"));
    assert_eq!(result.similarity, 100.0);
}

#[test]
fn normalizer_drops_digits_entirely() {
    // Known limitation: years and versions disappear
    let cleaned = Normalizer::new().clean("2019 python3");
    assert_eq!(cleaned.joined(), "python");
}

// ============================================================
// Keyword extraction
// ============================================================

#[test]
fn keywords_are_bounded_distinct_and_ranked() {
    let normalizer = Normalizer::new();
    for text in samples() {
        let cleaned = normalizer.clean(text);
        let freqs = term_frequencies(&cleaned);
        for n in [0, 1, 3, 20] {
            let kw = top_keywords(&cleaned, n);
            assert!(kw.len() <= n);

            let distinct: HashSet<&str> = kw.iter().collect();
            assert_eq!(distinct.len(), kw.len(), "duplicate keyword in {kw:?}");

            let counts: Vec<usize> = kw
                .iter()
                .map(|w| freqs.iter().find(|(t, _)| t == w).map(|(_, c)| *c).unwrap())
                .collect();
            assert!(
                counts.windows(2).all(|pair| pair[0] >= pair[1]),
                "not in descending frequency: {kw:?} {counts:?}"
            );
        }
    }
}

#[test]
fn keyword_ties_keep_first_occurrence() {
    let cleaned = Normalizer::new().clean("kafka spark kafka spark flink airflow");
    let kw = top_keywords(&cleaned, 3);
    assert_eq!(kw.as_slice(), &["kafka", "spark", "flink"].map(String::from));
}

#[test]
fn missing_is_set_difference() {
    let job = KeywordSet::from_ranked(["python", "aws", "docker"]);
    let covering = KeywordSet::from_ranked(["docker", "python", "aws", "linux"]);
    let partial = KeywordSet::from_ranked(["docker"]);

    assert!(job.difference(&covering).is_empty());
    assert!(job.is_subset(&covering));

    let missing = job.difference(&partial);
    assert_eq!(missing, KeywordSet::from_ranked(["python", "aws"]));
    assert!(!job.is_subset(&partial));
}

// ============================================================
// Similarity
// ============================================================

#[test]
fn similarity_is_symmetric() {
    let normalizer = Normalizer::new();
    let texts = samples();
    for a in &texts {
        for b in &texts {
            let ca = normalizer.clean(a);
            let cb = normalizer.clean(b);
            assert_eq!(
                similarity_percent(&ca, &cb),
                similarity_percent(&cb, &ca),
                "asymmetric for {a:?} / {b:?}"
            );
        }
    }
}

#[test]
fn self_similarity_is_100_when_non_empty() {
    let normalizer = Normalizer::new();
    for text in samples() {
        let cleaned = normalizer.clean(text);
        let expected = if cleaned.is_empty() { 0.0 } else { 100.0 };
        assert_eq!(similarity_percent(&cleaned, &cleaned), expected, "{text:?}");
    }
}

#[test]
fn empty_side_gives_zero_not_nan() {
    let normalizer = Normalizer::new();
    let empty = normalizer.clean("the and of 123");
    assert!(empty.is_empty());
    for text in samples() {
        let score = similarity_percent(&empty, &normalizer.clean(text));
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }
}

#[test]
fn similarity_stays_in_range() {
    let normalizer = Normalizer::new();
    for a in samples() {
        for b in samples() {
            let s = similarity_percent(&normalizer.clean(a), &normalizer.clean(b));
            assert!((0.0..=100.0).contains(&s), "{s} out of range");
        }
    }
}

#[test]
fn cosine_of_count_maps() {
    let normalizer = Normalizer::new();
    let a = normalizer.clean("rust rust tokio");
    let b = normalizer.clean("rust tokio tokio");
    // (2*1 + 1*2) / (sqrt(5) * sqrt(5)) = 0.8
    let cos = cosine_similarity(&term_counts(&a), &term_counts(&b));
    assert!((cos - 0.8).abs() < 1e-9, "got {cos}");
    assert_eq!(similarity_percent(&a, &b), 80.0);
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn python_developer_scenario() {
    let result = compare_texts(&Normalizer::new(), JOB, RESUME, &AnalysisOptions::default());

    let job: HashSet<String> = result.job_keywords.iter().map(String::from).collect();
    let resume: HashSet<String> = result.resume_keywords.iter().map(String::from).collect();
    let missing: HashSet<String> = result.missing_keywords.iter().map(String::from).collect();

    assert!(job.is_superset(&set(&["python", "developer", "aws", "docker", "experience"])));
    assert!(resume.is_superset(&set(&[
        "experienced",
        "python",
        "developer",
        "skilled",
        "docker",
        "kubernetes"
    ])));
    assert!(missing.is_superset(&set(&["aws", "experience"])));
    assert_eq!(missing, job.difference(&resume).cloned().collect());

    assert!(result.similarity > 0.0);
    assert!(result.similarity < 80.0, "got {}", result.similarity);
}

#[test]
fn identical_texts_scenario() {
    let result = compare_texts(&Normalizer::new(), RESUME, RESUME, &AnalysisOptions::default());
    assert_eq!(result.similarity, 100.0);
    assert!(result.missing_keywords.is_empty());
    assert!(result.is_full_match());
}
