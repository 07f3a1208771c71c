//! Team State Store
//!
//! Owns the active team, the saved teams and the favorites for the lifetime
//! of the application. Every mutation writes the whole affected collection
//! back through the storage port, so the next read (here or after a restart)
//! sees the new value.
//!
//! Stored blobs that fail to parse are treated as absent and the collection
//! starts from its default.

use serde::{de::DeserializeOwned, Serialize};

use poketeam_domain::{
    CreatureId, CreatureSummary, DomainError, FavoriteToggle, Favorites, SavedTeam, SavedTeamId,
    Team, TEAM_SIZE,
};

use crate::ports::outbound::{storage_keys, StorageProvider, TimeProvider};

pub struct TeamStore<S: StorageProvider, C: TimeProvider> {
    storage: S,
    clock: C,
    team: Team,
    saved_teams: Vec<SavedTeam>,
    favorites: Favorites,
}

impl<S: StorageProvider, C: TimeProvider> TeamStore<S, C> {
    /// Hydrate every collection from `storage`.
    pub fn new(storage: S, clock: C) -> Self {
        let team = match load_collection::<Vec<Option<CreatureSummary>>>(&storage, storage_keys::TEAM)
        {
            Some(slots) => {
                if slots.len() > TEAM_SIZE {
                    tracing::warn!(
                        "Stored team has {} slots, keeping the first {}",
                        slots.len(),
                        TEAM_SIZE
                    );
                }
                Team::from_slots(slots)
            }
            None => Team::new(),
        };
        let saved_teams = load_collection(&storage, storage_keys::TEAMS)
            .map(dedup_saved_teams)
            .unwrap_or_default();
        let favorites = load_collection(&storage, storage_keys::FAVORITES).unwrap_or_default();

        Self {
            storage,
            clock,
            team,
            saved_teams,
            favorites,
        }
    }

    // =========================================================================
    // Active team
    // =========================================================================

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Put `creature` in slot `index`, or clear the slot with `None`.
    pub fn set_team_slot(
        &mut self,
        creature: Option<CreatureSummary>,
        index: usize,
    ) -> Result<(), DomainError> {
        self.team.set_slot(index, creature)?;
        persist(&self.storage, storage_keys::TEAM, &self.team);
        Ok(())
    }

    // =========================================================================
    // Saved teams
    // =========================================================================

    pub fn saved_teams(&self) -> &[SavedTeam] {
        &self.saved_teams
    }

    /// Append a new, empty saved team and return its id.
    ///
    /// Ids are creation timestamps, bumped past the newest existing id when
    /// two teams are created within the same millisecond.
    pub fn add_saved_team(&mut self, name: impl Into<String>) -> SavedTeamId {
        let now = SavedTeamId::from_millis(self.clock.now_millis());
        let id = match self.saved_teams.iter().map(SavedTeam::id).max() {
            Some(newest) if newest >= now => newest.successor(),
            _ => now,
        };

        self.saved_teams.push(SavedTeam::new(id, name));
        persist(&self.storage, storage_keys::TEAMS, &self.saved_teams);
        id
    }

    /// Remove the saved team with `id`. Returns whether one was removed.
    pub fn remove_saved_team(&mut self, id: SavedTeamId) -> bool {
        let removed = match self.saved_teams.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.saved_teams.remove(index);
                true
            }
            None => false,
        };
        persist(&self.storage, storage_keys::TEAMS, &self.saved_teams);
        removed
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: CreatureId) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_favorite(&mut self, creature: CreatureSummary) -> FavoriteToggle {
        let outcome = self.favorites.toggle(creature);
        persist(&self.storage, storage_keys::FAVORITES, &self.favorites);
        outcome
    }
}

/// Keeps the first saved team for each id.
fn dedup_saved_teams(loaded: Vec<SavedTeam>) -> Vec<SavedTeam> {
    let mut teams: Vec<SavedTeam> = Vec::with_capacity(loaded.len());
    for team in loaded {
        if teams.iter().any(|t| t.id() == team.id()) {
            tracing::warn!("Dropping stored saved team with duplicate id {}", team.id());
        } else {
            teams.push(team);
        }
    }
    teams
}

fn load_collection<T: DeserializeOwned>(storage: &impl StorageProvider, key: &str) -> Option<T> {
    let raw = storage.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed stored {}: {}", key, e);
            None
        }
    }
}

fn persist<T: Serialize>(storage: &impl StorageProvider, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.save(key, &json),
        Err(e) => tracing::error!("Failed to serialize {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{MockStorageProvider, MockTimeProvider};

    type TestStore = TeamStore<MockStorageProvider, MockTimeProvider>;

    fn creature(id: u32, name: &str) -> CreatureSummary {
        CreatureSummary::new(
            CreatureId::new(id).expect("valid id"),
            name,
            format!("https://img/{id}.png"),
        )
    }

    fn store_with(storage: &MockStorageProvider) -> TestStore {
        TeamStore::new(storage.clone(), MockTimeProvider::new(1_700_000_000_000))
    }

    fn stored_json(storage: &MockStorageProvider, key: &str) -> serde_json::Value {
        let raw = storage.load(key).expect("key persisted");
        serde_json::from_str(&raw).expect("valid json")
    }

    #[test]
    fn test_empty_storage_gives_defaults() {
        let store = store_with(&MockStorageProvider::default());

        assert_eq!(store.team().slots().len(), TEAM_SIZE);
        assert_eq!(store.team().occupied_count(), 0);
        assert!(store.saved_teams().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_set_team_slot_updates_and_persists() {
        let storage = MockStorageProvider::default();
        let mut store = store_with(&storage);

        store
            .set_team_slot(Some(creature(25, "pikachu")), 0)
            .expect("slot in range");

        assert_eq!(store.team().slot(0).map(|c| c.id.get()), Some(25));
        let persisted = stored_json(&storage, storage_keys::TEAM);
        assert_eq!(persisted[0]["id"], 25);
        assert_eq!(persisted[0]["name"], "pikachu");
        assert_eq!(persisted.as_array().map(Vec::len), Some(TEAM_SIZE));
    }

    #[test]
    fn test_team_length_is_always_six() {
        let mut store = store_with(&MockStorageProvider::default());

        for index in 0..TEAM_SIZE {
            store
                .set_team_slot(Some(creature(index as u32 + 1, "mon")), index)
                .expect("slot in range");
            assert_eq!(store.team().slots().len(), TEAM_SIZE);
        }
        store.set_team_slot(None, 2).expect("slot in range");
        assert_eq!(store.team().slots().len(), TEAM_SIZE);
        assert_eq!(store.team().occupied_count(), TEAM_SIZE - 1);
    }

    #[test]
    fn test_out_of_range_slot_does_not_write() {
        let storage = MockStorageProvider::default();
        let mut store = store_with(&storage);

        let result = store.set_team_slot(Some(creature(1, "bulbasaur")), TEAM_SIZE);

        assert_eq!(result, Err(DomainError::slot_out_of_range(TEAM_SIZE)));
        assert_eq!(storage.load(storage_keys::TEAM), None);
    }

    #[test]
    fn test_short_persisted_team_is_padded() {
        let storage = MockStorageProvider::with_entries([(
            storage_keys::TEAM,
            r#"[{"id":1,"name":"bulbasaur","sprite":"s1"},null,{"id":4,"name":"charmander","sprite":"s4"},null]"#,
        )]);
        let store = store_with(&storage);

        assert_eq!(store.team().slots().len(), TEAM_SIZE);
        assert_eq!(store.team().slot(2).map(|c| c.name.as_str()), Some("charmander"));
        assert!(store.team().slots()[4].is_none());
        assert!(store.team().slots()[5].is_none());
    }

    #[test]
    fn test_long_persisted_team_is_truncated() {
        let slots: Vec<Option<CreatureSummary>> =
            (1..=8).map(|id| Some(creature(id, "mon"))).collect();
        let raw = serde_json::to_string(&slots).expect("serialize");
        let storage = MockStorageProvider::with_entries([(storage_keys::TEAM, raw.as_str())]);

        let store = store_with(&storage);

        assert_eq!(store.team().slots().len(), TEAM_SIZE);
        assert_eq!(store.team().slot(5).map(|c| c.id.get()), Some(6));
    }

    #[test]
    fn test_malformed_collections_are_treated_as_absent() {
        let storage = MockStorageProvider::with_entries([
            (storage_keys::TEAM, "{not json"),
            (storage_keys::TEAMS, r#"{"id": 1}"#),
            (storage_keys::FAVORITES, r#"[{"id":0,"name":"x","sprite":"s"}]"#),
        ]);
        let store = store_with(&storage);

        assert_eq!(store.team(), &Team::new());
        assert!(store.saved_teams().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_collections_survive_restart() {
        let storage = MockStorageProvider::default();
        {
            let mut store = store_with(&storage);
            store
                .set_team_slot(Some(creature(150, "mewtwo")), 5)
                .expect("slot in range");
            store.add_saved_team("Alpha");
            store.toggle_favorite(creature(151, "mew"));
        }

        let store = store_with(&storage);
        assert_eq!(store.team().slot(5).map(|c| c.id.get()), Some(150));
        assert_eq!(store.saved_teams().len(), 1);
        assert_eq!(store.saved_teams()[0].name(), "Alpha");
        assert!(store.is_favorite(CreatureId::new(151).expect("valid id")));
    }

    #[test]
    fn test_add_then_remove_saved_team_restores_collection() {
        let storage = MockStorageProvider::default();
        let clock = MockTimeProvider::new(1_000);
        let mut store = TeamStore::new(storage.clone(), clock.clone());

        store.add_saved_team("Rain");
        clock.advance(10);
        store.add_saved_team("Sun");
        let before = store.saved_teams().to_vec();

        clock.advance(10);
        let id = store.add_saved_team("Alpha");
        assert_eq!(store.saved_teams().len(), 3);
        assert!(store.saved_teams()[2].members().is_empty());

        assert!(store.remove_saved_team(id));
        assert_eq!(store.saved_teams(), before.as_slice());
        assert_eq!(
            stored_json(&storage, storage_keys::TEAMS),
            serde_json::to_value(&before).expect("serialize")
        );
    }

    #[test]
    fn test_remove_unknown_saved_team_is_noop() {
        let storage = MockStorageProvider::default();
        let mut store = store_with(&storage);
        store.add_saved_team("Alpha");
        storage.remove(storage_keys::TEAMS);

        assert!(!store.remove_saved_team(SavedTeamId::from_millis(1)));

        assert_eq!(store.saved_teams().len(), 1);
        assert_eq!(
            stored_json(&storage, storage_keys::TEAMS),
            serde_json::to_value(store.saved_teams()).expect("serialize")
        );
    }

    #[test]
    fn test_duplicate_saved_team_ids_keep_first_on_load() {
        let storage = MockStorageProvider::with_entries([(
            storage_keys::TEAMS,
            r#"[{"id":5,"name":"A"},{"id":5,"name":"B"},{"id":9,"name":"C"}]"#,
        )]);
        let mut store = store_with(&storage);

        let names: Vec<&str> = store.saved_teams().iter().map(SavedTeam::name).collect();
        assert_eq!(names, vec!["A", "C"]);

        assert!(store.remove_saved_team(SavedTeamId::from_millis(5)));
        let names: Vec<&str> = store.saved_teams().iter().map(SavedTeam::name).collect();
        assert_eq!(names, vec!["C"]);
        assert_eq!(
            stored_json(&storage, storage_keys::TEAMS),
            serde_json::to_value(store.saved_teams()).expect("serialize")
        );
    }

    #[test]
    fn test_saved_team_ids_are_unique_within_a_millisecond() {
        let clock = MockTimeProvider::new(5_000);
        let mut store = TeamStore::new(MockStorageProvider::default(), clock.clone());

        let first = store.add_saved_team("A");
        let second = store.add_saved_team("B");
        clock.set(4_000);
        let third = store.add_saved_team("C");

        assert_eq!(first.get(), 5_000);
        assert_eq!(second.get(), 5_001);
        assert_eq!(third.get(), 5_002);
    }

    #[test]
    fn test_double_toggle_favorite_is_noop() {
        let storage = MockStorageProvider::default();
        let mut store = store_with(&storage);
        store.toggle_favorite(creature(1, "bulbasaur"));
        let before = store.favorites().clone();

        assert_eq!(
            store.toggle_favorite(creature(25, "pikachu")),
            FavoriteToggle::Added
        );
        assert_eq!(
            store.toggle_favorite(creature(25, "pikachu")),
            FavoriteToggle::Removed
        );

        assert_eq!(store.favorites(), &before);
        assert_eq!(
            stored_json(&storage, storage_keys::FAVORITES),
            serde_json::to_value(&before).expect("serialize")
        );
    }

    #[test]
    fn test_distinct_favorites_keep_call_order() {
        let mut store = store_with(&MockStorageProvider::default());
        store.toggle_favorite(creature(7, "squirtle"));
        store.toggle_favorite(creature(4, "charmander"));

        let ids: Vec<u32> = store.favorites().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![7, 4]);
    }
}
