//! Application layer - use cases over the outbound ports

pub mod dto;
pub mod error;
pub mod services;

pub use error::ServiceError;
