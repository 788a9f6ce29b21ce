//! Errors returned by `TodoClient` parse methods.
//!
//! # Design
//! The two statuses the server produces on purpose, 400 and 404, get their
//! own variants carrying the server's message. Anything else lands in
//! `HttpError` with the raw status and body.

/// Errors returned by `TodoClient`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 404: no todo with the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400: empty task text or a malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
