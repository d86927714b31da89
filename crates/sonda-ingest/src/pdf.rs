//! PDF text extraction.

use crate::error::{IngestError, IngestResult};
use std::path::Path;
use tracing::debug;

/// Extract the text of a PDF manual.
///
/// Fails with [`IngestError::NoTextFound`] when the extracted text is blank
/// or whitespace-only, which signals a scanned or non-textual PDF. No OCR is
/// attempted.
pub fn extract_pdf_text(path: &Path) -> IngestResult<String> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.to_path_buf()));
    }

    debug!("Extracting text from PDF: {:?}", path);

    let text = pdf_extract::extract_text(path).map_err(|e| IngestError::ParseError {
        path: path.to_path_buf(),
        message: format!("Failed to extract text from PDF: {}", e),
    })?;

    if text.trim().is_empty() {
        return Err(IngestError::NoTextFound(path.to_path_buf()));
    }

    debug!("Extracted {} characters from PDF", text.chars().count());

    Ok(text)
}
