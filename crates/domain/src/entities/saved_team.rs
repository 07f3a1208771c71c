//! Saved team entity

use serde::{Deserialize, Serialize};

use crate::{CreatureSummary, SavedTeamId};

/// A named team kept alongside the active one.
///
/// Identity is the id; two saved teams with the same name are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTeam {
    id: SavedTeamId,
    name: String,
    #[serde(default)]
    members: Vec<CreatureSummary>,
}

impl SavedTeam {
    /// A new saved team with no members.
    pub fn new(id: SavedTeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> SavedTeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[CreatureSummary] {
        &self.members
    }
}
