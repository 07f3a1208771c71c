//! HTTP transport errors shared by every API adapter

use thiserror::Error;

/// Errors raised while talking to the creature API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },
    /// The body was not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
