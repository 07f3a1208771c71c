//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over transport errors and payload decoding. Domain rule
//! violations are returned as `DomainError` by the store itself.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Transport-level failure
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The JSON body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
