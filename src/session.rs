// Interactive session state: selected documents plus the reporter state.
//
// The reporter has two states. `NoResult` until the first successful analysis,
// `HasResult` afterwards. Export is only valid in `HasResult`. A failed
// analysis leaves the state as it was; a successful one replaces the held
// result outright.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::{analyze_files, AnalysisOptions, AnalysisResult};
use crate::error::AnalysisError;
use crate::extract::DocumentRole;
use crate::matching::normalize::Normalizer;
use crate::output::pdf;

/// What the reporter can currently do.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    NoResult,
    HasResult(AnalysisResult),
}

pub struct Session {
    normalizer: Normalizer,
    options: AnalysisOptions,
    job_path: Option<PathBuf>,
    resume_path: Option<PathBuf>,
    state: ReportState,
}

impl Session {
    pub fn new(options: AnalysisOptions) -> Self {
        Self::with_normalizer(Normalizer::new(), options)
    }

    pub fn with_normalizer(normalizer: Normalizer, options: AnalysisOptions) -> Self {
        Self {
            normalizer,
            options,
            job_path: None,
            resume_path: None,
            state: ReportState::NoResult,
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Choose the document for one side of the comparison.
    ///
    /// The file is only read at analysis time, so a bad path surfaces then.
    pub fn select(&mut self, role: DocumentRole, path: impl Into<PathBuf>) {
        let path = path.into();
        info!(role = %role, path = %path.display(), "Document selected");
        match role {
            DocumentRole::JobDescription => self.job_path = Some(path),
            DocumentRole::Resume => self.resume_path = Some(path),
        }
    }

    pub fn selected(&self, role: DocumentRole) -> Option<&Path> {
        match role {
            DocumentRole::JobDescription => self.job_path.as_deref(),
            DocumentRole::Resume => self.resume_path.as_deref(),
        }
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            ReportState::HasResult(result) => Some(result),
            ReportState::NoResult => None,
        }
    }

    /// Analyze the selected documents and hold the result for export.
    pub fn analyze(&mut self) -> Result<AnalysisResult, AnalysisError> {
        let job = self
            .job_path
            .as_deref()
            .ok_or(AnalysisError::MissingInput(DocumentRole::JobDescription))?;
        let resume = self
            .resume_path
            .as_deref()
            .ok_or(AnalysisError::MissingInput(DocumentRole::Resume))?;

        let result = analyze_files(&self.normalizer, job, resume, &self.options)?;
        self.state = ReportState::HasResult(result.clone());
        Ok(result)
    }

    /// Export the held result as a PDF report. Returns the page count.
    pub fn export(&self, path: &Path) -> Result<usize, AnalysisError> {
        let result = self.result().ok_or(AnalysisError::ExportBeforeAnalysis)?;
        pdf::export_report(result, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_result() {
        let session = Session::new(AnalysisOptions::default());
        assert_eq!(session.state(), &ReportState::NoResult);
        assert!(session.result().is_none());
    }

    #[test]
    fn analyze_requires_both_documents() {
        let mut session = Session::new(AnalysisOptions::default());
        assert!(matches!(
            session.analyze(),
            Err(AnalysisError::MissingInput(DocumentRole::JobDescription))
        ));

        session.select(DocumentRole::JobDescription, "jd.txt");
        assert!(matches!(
            session.analyze(),
            Err(AnalysisError::MissingInput(DocumentRole::Resume))
        ));
        assert_eq!(session.state(), &ReportState::NoResult);
    }

    #[test]
    fn export_before_analysis_is_rejected() {
        let session = Session::new(AnalysisOptions::default());
        let err = session.export(Path::new("never-written.pdf")).unwrap_err();
        assert!(matches!(err, AnalysisError::ExportBeforeAnalysis));
        assert!(!Path::new("never-written.pdf").exists());
    }
}
