//! In-memory platform providers for tests and headless use

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{DocumentProvider, StorageProvider, TimeProvider};

/// Storage held in a shared map; clones see the same data
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MockStorageProvider {
    /// Storage pre-filled with `entries`
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::default();
        for (key, value) in entries {
            storage.save(key, value);
        }
        storage
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.write() {
            data.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut data) = self.data.write() {
            data.remove(key);
        }
    }
}

/// A clock that only moves when told to
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    now: Arc<AtomicU64>,
}

impl MockTimeProvider {
    pub fn new(now_millis: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_millis)),
        }
    }

    pub fn set(&self, now_millis: u64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Records the last page title set
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<RwLock<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.read().ok()?.clone()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.write() {
            *current = Some(title.to_string());
        }
    }
}
