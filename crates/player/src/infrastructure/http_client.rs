//! HTTP adapter for the creature API
//!
//! Implements `RawApiPort` with `reqwest` on desktop and `gloo-net` in the
//! browser. Paths are appended to the configured base URL.

use serde_json::Value;

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// JSON-over-HTTP adapter
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: build_client(config.request_timeout_ms),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout_ms: Option<u64>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(ms) = timeout_ms {
        builder = builder.timeout(std::time::Duration::from_millis(ms));
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
        reqwest::Client::new()
    })
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: response.status(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = PlayerConfig {
            api_base_url: "https://pokeapi.co/api/v2/".to_string(),
            ..PlayerConfig::default()
        };
        let adapter = ApiAdapter::new(&config);

        assert_eq!(
            adapter.url("/pokemon?limit=151"),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
        assert_eq!(adapter.url("pokemon/25"), "https://pokeapi.co/api/v2/pokemon/25");
    }
}
