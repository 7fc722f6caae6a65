// PDF text extraction via lopdf.
//
// Text is pulled page by page so that a single page without extractable text
// (a scanned image, an empty page) contributes nothing instead of failing the
// whole document. A file that lopdf cannot load at all is an error.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::ExtractionError;

/// Extract the text of every page, in page order.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_pages_from_mem(path, &bytes)
}

/// Extract page texts from PDF bytes already in memory. `path` is only used
/// to label errors.
pub fn extract_pages_from_mem(path: &Path, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| pdf_error(path, e))?;
    Ok(pages_text(&doc))
}

fn pages_text(doc: &Document) -> Vec<String> {
    let pages = doc.get_pages();
    debug!(pages = pages.len(), "Loaded PDF");

    pages
        .keys()
        .map(|&page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                warn!(page = page_num, error = %e, "No extractable text on page");
                String::new()
            }
        })
        .collect()
}

fn pdf_error(path: &Path, e: lopdf::Error) -> ExtractionError {
    ExtractionError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
