//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys and js-sys.

use crate::config::PlayerConfig;
use crate::ports::outbound::{DocumentProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM storage provider backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, dropping write for {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
///
/// The storage path setting does not apply to localStorage.
pub fn create_platform(_config: &PlayerConfig) -> Platform {
    Platform::new(WasmTimeProvider, WasmStorageProvider, WasmDocumentProvider)
}
