//! Team state shared by every view
//!
//! Wraps the application `TeamStore` in a signal so that each mutation
//! persists through the store and re-renders every reader.

use dioxus::prelude::*;

use poketeam_domain::{
    CreatureId, CreatureSummary, FavoriteToggle, Favorites, SavedTeam, SavedTeamId, Team,
};

use crate::application::services::TeamStore;
use crate::state::{Platform, PlatformClockAdapter, PlatformStorageAdapter};

type PlatformTeamStore = TeamStore<PlatformStorageAdapter, PlatformClockAdapter>;

/// Handle to the team store; `Copy`, so it can move into event handlers.
#[derive(Clone, Copy)]
pub struct TeamState {
    store: Signal<PlatformTeamStore>,
}

impl TeamState {
    /// Hydrate from platform storage. Must run inside the Dioxus runtime.
    pub fn new(platform: &Platform) -> Self {
        let store = TeamStore::new(platform.storage_adapter(), platform.clock_adapter());
        Self {
            store: Signal::new(store),
        }
    }

    pub fn team(&self) -> Team {
        self.store.read().team().clone()
    }

    pub fn saved_teams(&self) -> Vec<SavedTeam> {
        self.store.read().saved_teams().to_vec()
    }

    pub fn favorites(&self) -> Favorites {
        self.store.read().favorites().clone()
    }

    pub fn is_favorite(&self, id: CreatureId) -> bool {
        self.store.read().is_favorite(id)
    }

    pub fn set_team_slot(&mut self, creature: Option<CreatureSummary>, index: usize) {
        if let Err(e) = self.store.write().set_team_slot(creature, index) {
            tracing::error!("Failed to update team slot: {}", e);
        }
    }

    pub fn add_saved_team(&mut self, name: impl Into<String>) -> SavedTeamId {
        self.store.write().add_saved_team(name)
    }

    pub fn remove_saved_team(&mut self, id: SavedTeamId) -> bool {
        self.store.write().remove_saved_team(id)
    }

    pub fn toggle_favorite(&mut self, creature: CreatureSummary) -> FavoriteToggle {
        self.store.write().toggle_favorite(creature)
    }
}

/// Hook to access the TeamState from context
pub fn use_team_state() -> TeamState {
    use_context::<TeamState>()
}
