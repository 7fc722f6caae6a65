// Document text extraction: turns an input file into raw text.
//
// Two formats are supported, chosen by file extension: PDF (every page's text,
// concatenated in page order) and UTF-8 plain text. Anything else is rejected
// with an explicit error instead of silently producing empty text.

pub mod pdf;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Why a document could not be turned into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file format: {} (expected .pdf or .txt)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("failed to parse PDF {}: {message}", .path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("{} contains no extractable text", .0.display())]
    Empty(PathBuf),
}

/// Input formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Text => write!(f, "txt"),
        }
    }
}

/// Which side of the comparison a document plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    JobDescription,
    Resume,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JobDescription => write!(f, "job description"),
            Self::Resume => write!(f, "resume"),
        }
    }
}

/// A document's extracted raw text. Not retained past normalization.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub text: String,
}

impl Document {
    /// Whether extraction produced anything besides whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Consume the document, rejecting one with no text.
    ///
    /// Keeps "readable but empty" distinct from "unreadable": the latter
    /// already failed inside [`extract_text`].
    pub fn require_text(self) -> Result<String, ExtractionError> {
        if self.is_blank() {
            return Err(ExtractionError::Empty(self.path));
        }
        Ok(self.text)
    }
}

/// Read a document and return its full text content.
pub fn extract_text(path: &Path) -> Result<Document, ExtractionError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(path.to_path_buf()))?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pages(path)?.concat(),
        DocumentFormat::Text => read_utf8(path)?,
    };

    debug!(
        path = %path.display(),
        format = %format,
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(Document {
        path: path.to_path_buf(),
        format,
        text,
    })
}

fn read_utf8(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ExtractionError::InvalidUtf8(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_ignores_case() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("jd.Txt")),
            Some(DocumentFormat::Text)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("cv.docx")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = extract_text(Path::new("resume.docx")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_text_file_is_io_error() {
        let err = extract_text(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn blank_document_is_rejected() {
        let doc = Document {
            path: PathBuf::from("blank.txt"),
            format: DocumentFormat::Text,
            text: "  \n\t ".to_string(),
        };
        assert!(doc.is_blank());
        assert!(matches!(doc.require_text(), Err(ExtractionError::Empty(_))));
    }
}
