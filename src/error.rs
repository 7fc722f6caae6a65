// Error types surfaced to the presentation layer.
//
// Each variant maps to one user-facing failure: a document not chosen yet, a
// document that could not be read, an export without a result to export, or a
// report that could not be written. None of them are fatal to the shell.

use std::path::PathBuf;

use thiserror::Error;

use crate::extract::{DocumentRole, ExtractionError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no {0} file selected; choose one before analyzing")]
    MissingInput(DocumentRole),

    #[error("could not read the {role}: {source}")]
    Extraction {
        role: DocumentRole,
        #[source]
        source: ExtractionError,
    },

    #[error("no analysis to export; analyze documents first")]
    ExportBeforeAnalysis,

    #[error("failed to write report to {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },
}

impl AnalysisError {
    /// Whether the error comes from missing or unusable input documents.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::Extraction { .. })
    }
}
