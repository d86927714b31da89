//! Sonda Ingest - PDF text extraction and the analysis pipeline.
//!
//! This crate provides:
//! - PDF text extraction (black box: bytes in, text out, or no text at all)
//! - Fixed-size chunking of manual text
//! - The [`Analyzer`] orchestrating one file's run: text, chunks, one model
//!   call per chunk, JSON scraping, aggregation, persistence

mod analyzer;
mod chunker;
mod error;
mod pdf;

pub use analyzer::{AnalysisOutcome, Analyzer};
pub use chunker::chunk_text;
pub use error::{IngestError, IngestResult};
pub use pdf::extract_pdf_text;
