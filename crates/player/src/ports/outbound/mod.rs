//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod raw_api_port;

#[cfg(test)]
pub mod testing;

pub use api_port::ApiError;
pub use platform::{storage_keys, DocumentProvider, StorageProvider, TimeProvider};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use testing::MockRawApiPort;
