// Document comparison: extraction, normalization and scoring in one pass.
//
// The flow is strictly forward:
//
//   extract -> normalize -> { keywords, similarity } -> AnalysisResult
//
// An analysis either fully succeeds or returns an error; nothing partial is
// produced. The result is a plain value that callers hand to the reporter.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::extract::{self, DocumentRole};
use crate::matching::keywords::{top_keywords, KeywordSet, DEFAULT_TOP_N};
use crate::matching::normalize::Normalizer;
use crate::matching::similarity::similarity_percent;

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Keywords extracted per document
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Outcome of comparing a job description against a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity as a percentage, 0.00 to 100.00
    pub similarity: f64,
    pub job_keywords: KeywordSet,
    pub resume_keywords: KeywordSet,
    /// Job keywords absent from the resume keywords
    pub missing_keywords: KeywordSet,
}

/// Keyword set sizes behind the overlap chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCounts {
    pub overlap: usize,
    pub only_job: usize,
    pub only_resume: usize,
}

impl OverlapCounts {
    pub fn max(&self) -> usize {
        self.overlap.max(self.only_job).max(self.only_resume)
    }
}

impl AnalysisResult {
    pub fn overlap(&self) -> OverlapCounts {
        OverlapCounts {
            overlap: self.job_keywords.intersection_len(&self.resume_keywords),
            only_job: self.missing_keywords.len(),
            only_resume: self.resume_keywords.difference(&self.job_keywords).len(),
        }
    }

    /// True when every job keyword also appears among the resume keywords.
    pub fn is_full_match(&self) -> bool {
        self.missing_keywords.is_empty()
    }
}

/// Compare two raw texts. Pure: no I/O, no failure modes.
pub fn compare_texts(
    normalizer: &Normalizer,
    job_text: &str,
    resume_text: &str,
    options: &AnalysisOptions,
) -> AnalysisResult {
    let job_clean = normalizer.clean(job_text);
    let resume_clean = normalizer.clean(resume_text);

    debug!(
        job_tokens = job_clean.len(),
        resume_tokens = resume_clean.len(),
        "Normalized documents"
    );

    let job_keywords = top_keywords(&job_clean, options.top_n);
    let resume_keywords = top_keywords(&resume_clean, options.top_n);
    let missing_keywords = job_keywords.difference(&resume_keywords);
    let similarity = similarity_percent(&job_clean, &resume_clean);

    AnalysisResult {
        similarity,
        job_keywords,
        resume_keywords,
        missing_keywords,
    }
}

/// Extract both documents and compare them.
pub fn analyze_files(
    normalizer: &Normalizer,
    job_path: &Path,
    resume_path: &Path,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    let job_text = load_text(DocumentRole::JobDescription, job_path)?;
    let resume_text = load_text(DocumentRole::Resume, resume_path)?;

    let result = compare_texts(normalizer, &job_text, &resume_text, options);

    info!(
        similarity = result.similarity,
        job_keywords = result.job_keywords.len(),
        resume_keywords = result.resume_keywords.len(),
        missing = result.missing_keywords.len(),
        "Analysis complete"
    );

    Ok(result)
}

/// Extract one document's text, rejecting unreadable or empty files.
pub fn load_text(role: DocumentRole, path: &Path) -> Result<String, AnalysisError> {
    extract::extract_text(path)
        .and_then(extract::Document::require_text)
        .map_err(|source| AnalysisError::Extraction { role, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn plain() -> Normalizer {
        Normalizer::with_stop_words(HashSet::new())
    }

    #[test]
    fn overlap_counts_follow_keyword_sets() {
        let result = compare_texts(
            &plain(),
            "rust docker kubernetes terraform",
            "rust docker python",
            &AnalysisOptions::default(),
        );
        assert_eq!(
            result.overlap(),
            OverlapCounts {
                overlap: 2,
                only_job: 2,
                only_resume: 1,
            }
        );
        assert_eq!(result.overlap().max(), 2);
        assert!(!result.is_full_match());
    }

    #[test]
    fn top_n_limits_both_sides() {
        let options = AnalysisOptions { top_n: 2 };
        let result = compare_texts(&plain(), "aaa bbb ccc ddd", "eee fff ggg", &options);
        assert_eq!(result.job_keywords.len(), 2);
        assert_eq!(result.resume_keywords.len(), 2);
    }

    #[test]
    fn result_serializes_keywords_as_lists() {
        let result = compare_texts(&plain(), "rust", "rust", &AnalysisOptions::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["similarity"], 100.0);
        assert_eq!(json["job_keywords"], serde_json::json!(["rust"]));
        assert_eq!(json["missing_keywords"], serde_json::json!([]));
    }
}
