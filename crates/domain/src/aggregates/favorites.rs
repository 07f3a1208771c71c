//! Favorites aggregate - user-curated creatures, unique by id

use serde::{Deserialize, Serialize};

use crate::{CreatureId, CreatureSummary};

/// Outcome of [`Favorites::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Order-preserving collection of favorite creatures.
///
/// Order is toggle order, not sorted. Deserializing drops later duplicates
/// so a hand-edited blob cannot break id uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CreatureSummary>", into = "Vec<CreatureSummary>")]
pub struct Favorites {
    entries: Vec<CreatureSummary>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the favorite with the same id as `creature`, or append it.
    pub fn toggle(&mut self, creature: CreatureSummary) -> FavoriteToggle {
        let before = self.entries.len();
        self.entries.retain(|c| c.id != creature.id);
        if self.entries.len() < before {
            FavoriteToggle::Removed
        } else {
            self.entries.push(creature);
            FavoriteToggle::Added
        }
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.entries.iter().any(|c| c.id == id)
    }

    pub fn as_slice(&self) -> &[CreatureSummary] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureSummary> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CreatureSummary>> for Favorites {
    fn from(loaded: Vec<CreatureSummary>) -> Self {
        let mut entries: Vec<CreatureSummary> = Vec::with_capacity(loaded.len());
        for creature in loaded {
            if !entries.iter().any(|c| c.id == creature.id) {
                entries.push(creature);
            }
        }
        Self { entries }
    }
}

impl From<Favorites> for Vec<CreatureSummary> {
    fn from(favorites: Favorites) -> Self {
        favorites.entries
    }
}
