//! Error types for Gemini operations.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured. A configuration gap, not a transient failure.
    #[error("Google AI API key not configured. Set gemini.api_key in the config file or the GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    /// Request timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered but carried no generated text.
    #[error("Model response contained no text")]
    EmptyResponse,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Gemini operations.
pub type LlmResult<T> = Result<T, LlmError>;
