//! Catalogue loading state for the list view

use poketeam_domain::CreatureSummary;

use crate::application::ServiceError;

/// Result of the one catalogue fetch a list view makes.
///
/// Starts loading; a failed fetch ends loading with no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueState {
    loading: bool,
    entries: Vec<CreatureSummary>,
}

impl Default for CatalogueState {
    fn default() -> Self {
        Self {
            loading: true,
            entries: Vec::new(),
        }
    }
}

impl CatalogueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, result: Result<Vec<CreatureSummary>, ServiceError>) {
        self.loading = false;
        match result {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::error!("Failed to fetch catalogue: {}", e);
                self.entries.clear();
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[CreatureSummary] {
        &self.entries
    }
}
