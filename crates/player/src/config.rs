//! Player configuration
//!
//! Read from `POKETEAM_*` environment variables. Every setting is optional;
//! on wasm the environment is empty and the defaults apply.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default PokeAPI base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default static sprite path; sprites are `{base}/{id}.png`.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Number of catalogue entries fetched by the list view.
pub const DEFAULT_CATALOGUE_LIMIT: u32 = 151;

pub const ENV_API_BASE_URL: &str = "POKETEAM_API_BASE_URL";
pub const ENV_SPRITE_BASE_URL: &str = "POKETEAM_SPRITE_BASE_URL";
pub const ENV_CATALOGUE_LIMIT: &str = "POKETEAM_CATALOGUE_LIMIT";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "POKETEAM_REQUEST_TIMEOUT_MS";
pub const ENV_STORAGE_PATH: &str = "POKETEAM_STORAGE_PATH";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} is not a valid number: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL of the creature API, without trailing slash
    pub api_base_url: String,
    /// Base URL of catalogue sprites, without trailing slash
    pub sprite_base_url: String,
    pub catalogue_limit: u32,
    /// Per-request timeout; `None` waits indefinitely (desktop only)
    pub request_timeout_ms: Option<u64>,
    /// Storage file override (desktop only)
    pub storage_path: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
            catalogue_limit: DEFAULT_CATALOGUE_LIMIT,
            request_timeout_ms: None,
            storage_path: None,
        }
    }
}

impl PlayerConfig {
    /// Configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = get(ENV_API_BASE_URL) {
            config.api_base_url = parse_base_url(ENV_API_BASE_URL, value)?;
        }
        if let Some(value) = get(ENV_SPRITE_BASE_URL) {
            config.sprite_base_url = parse_base_url(ENV_SPRITE_BASE_URL, value)?;
        }
        if let Some(value) = get(ENV_CATALOGUE_LIMIT) {
            config.catalogue_limit = parse_number(ENV_CATALOGUE_LIMIT, value)?;
        }
        if let Some(value) = get(ENV_REQUEST_TIMEOUT_MS) {
            config.request_timeout_ms = Some(parse_number(ENV_REQUEST_TIMEOUT_MS, value)?);
        }
        if let Some(value) = get(ENV_STORAGE_PATH) {
            config.storage_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    /// Catalogue sprite URL for a creature id.
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}/{}.png", self.sprite_base_url, id)
    }
}

fn parse_base_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(value.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl { key, value }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}
