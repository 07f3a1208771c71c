//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by the composition root (`main.rs`)
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, StorageProvider, TimeProvider};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new(
        time: impl TimeProvider + Send + Sync,
        storage: impl StorageProvider + Send + Sync,
        document: impl DocumentProvider + Send + Sync,
    ) -> Self {
        Self {
            time: Arc::new(time),
            storage: Arc::new(storage),
            document: Arc::new(document),
        }
    }

    /// Get current time in milliseconds since epoch
    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// ```ignore
    /// let store = TeamStore::new(platform.storage_adapter(), platform.clock_adapter());
    /// ```
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    /// Get a TimeProvider adapter for use with application services
    pub fn clock_adapter(&self) -> PlatformClockAdapter {
        PlatformClockAdapter {
            platform: self.clone(),
        }
    }
}

// =============================================================================
// Port adapters for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

/// Adapter that allows application services to use Platform's clock
#[derive(Clone)]
pub struct PlatformClockAdapter {
    platform: Platform,
}

impl TimeProvider for PlatformClockAdapter {
    fn now_millis(&self) -> u64 {
        self.platform.now_millis()
    }
}
