//! Error types for the analysis pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while analyzing a manual.
///
/// Each of these aborts a single file's run; chunk-level model failures are
/// absorbed inside the pipeline and never surface here.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sonda_db::DbError),

    #[error("Model error: {0}")]
    Llm(#[from] sonda_llm::LlmError),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Parse error for {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("No text detected in {0}: the PDF may be scanned or non-textual")]
    NoTextFound(PathBuf),
}
