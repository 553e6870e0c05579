//! Error types for the posts front-end core.
//!
//! # Design
//! Every way a posts fetch can fail collapses into `ApiError`. The posts
//! view never inspects the variant; it hands the error to its
//! `FetchFailurePolicy`, which decides what (if anything) becomes visible.
//! Variants exist so the diagnostic log says what actually went wrong.

use thiserror::Error;

/// Errors produced while turning a fetch completion into a post collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The host could not complete the round-trip (DNS, refused, reset...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status and a body that is not a
    /// posts envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not JSON, or has no `data.data.posts` array.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

/// Failure to load the runtime-injected configuration object.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read runtime config: {0}")]
    Read(#[from] std::io::Error),

    #[error("runtime config is not a JSON object: {0}")]
    Parse(#[from] serde_json::Error),
}
