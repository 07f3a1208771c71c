//! Test utilities for outbound ports
//!
//! Provides mock implementations for unit testing services that depend on outbound ports.
//! Tests run on desktop, so the mock uses the `Send` flavour of `async_trait`.

use serde_json::Value;

use super::{ApiError, RawApiPort};

mockall::mock! {
    pub RawApiPort {}

    #[async_trait::async_trait]
    impl RawApiPort for RawApiPort {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
    }
}
