//! Sonda LLM - Google Gemini integration.
//!
//! This crate owns everything between a text chunk and a structured result:
//! - building the extraction prompt
//! - calling the Gemini API
//! - scraping the JSON object out of the free-form response
//! - merging per-chunk results into one record

mod aggregate;
mod client;
mod error;
mod extract;
mod prompt;
mod types;

pub use aggregate::aggregate;
pub use client::{GeminiClient, GenerateText};
pub use error::{LlmError, LlmResult};
pub use extract::extract_record;
pub use prompt::build_prompt;
