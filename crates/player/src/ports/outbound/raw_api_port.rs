//! Raw API Port - Object-safe HTTP boundary
//!
//! Services decode the returned `serde_json::Value` into wire DTOs themselves,
//! so the port stays object-safe and can be stored behind `Arc<dyn ...>`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path` (relative to the configured API base URL) and return the JSON body.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
}
