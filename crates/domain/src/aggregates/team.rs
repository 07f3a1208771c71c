//! Team aggregate - the active six-slot team
//!
//! # Invariants
//!
//! - There are always exactly [`TEAM_SIZE`] slots. Shorter input is padded
//!   with empty slots, longer input is truncated.
//! - Slots are only changed by assigning a whole slot by index.

use serde::{Deserialize, Serialize};

use crate::{CreatureId, CreatureSummary, DomainError};

/// Number of slots in a team
pub const TEAM_SIZE: usize = 6;

/// The active team: a fixed-length sequence of optional creatures.
///
/// Serialized as a JSON array of exactly six entries, `null` for an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<Option<CreatureSummary>>",
    into = "Vec<Option<CreatureSummary>>"
)]
pub struct Team {
    slots: [Option<CreatureSummary>; TEAM_SIZE],
}

impl Team {
    /// A team with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a team from loaded slots, padding or truncating to [`TEAM_SIZE`].
    pub fn from_slots(loaded: impl IntoIterator<Item = Option<CreatureSummary>>) -> Self {
        let mut team = Self::new();
        for (slot, creature) in team.slots.iter_mut().zip(loaded) {
            *slot = creature;
        }
        team
    }

    pub fn slots(&self) -> &[Option<CreatureSummary>] {
        &self.slots
    }

    /// The creature in slot `index`, if the slot exists and is occupied.
    pub fn slot(&self, index: usize) -> Option<&CreatureSummary> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub const fn len(&self) -> usize {
        TEAM_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Occupied slots in slot order.
    pub fn members(&self) -> impl Iterator<Item = &CreatureSummary> {
        self.slots.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.members().count()
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.members().any(|c| c.id == id)
    }

    /// Assign `creature` to slot `index`, replacing (or clearing with `None`)
    /// whatever was there. Returns the previous occupant.
    pub fn set_slot(
        &mut self,
        index: usize,
        creature: Option<CreatureSummary>,
    ) -> Result<Option<CreatureSummary>, DomainError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| DomainError::slot_out_of_range(index))?;
        Ok(std::mem::replace(slot, creature))
    }
}

impl From<Vec<Option<CreatureSummary>>> for Team {
    fn from(loaded: Vec<Option<CreatureSummary>>) -> Self {
        Self::from_slots(loaded)
    }
}

impl From<Team> for Vec<Option<CreatureSummary>> {
    fn from(team: Team) -> Self {
        team.slots.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: u32, name: &str) -> CreatureSummary {
        CreatureSummary::new(
            CreatureId::new(id).expect("valid id"),
            name,
            format!("https://img/{id}.png"),
        )
    }

    #[test]
    fn test_new_team_has_six_empty_slots() {
        let team = Team::new();
        assert_eq!(team.slots().len(), TEAM_SIZE);
        assert_eq!(team.occupied_count(), 0);
    }

    #[test]
    fn test_short_input_is_padded() {
        let team = Team::from_slots(vec![
            Some(creature(1, "bulbasaur")),
            None,
            Some(creature(4, "charmander")),
            Some(creature(7, "squirtle")),
        ]);

        assert_eq!(team.slots().len(), TEAM_SIZE);
        assert_eq!(team.slot(3).map(|c| c.id.get()), Some(7));
        assert!(team.slot(4).is_none());
        assert!(team.slot(5).is_none());
    }

    #[test]
    fn test_long_input_is_truncated() {
        let team = Team::from_slots((1..=8).map(|id| Some(creature(id, "mon"))));

        assert_eq!(team.slots().len(), TEAM_SIZE);
        assert_eq!(team.slot(5).map(|c| c.id.get()), Some(6));
        assert!(!team.contains(CreatureId::new(7).expect("valid id")));
    }

    #[test]
    fn test_set_slot_replaces_and_returns_previous() {
        let mut team = Team::new();
        assert_eq!(team.set_slot(0, Some(creature(25, "pikachu"))), Ok(None));

        let previous = team.set_slot(0, Some(creature(133, "eevee")));
        assert_eq!(previous.map(|p| p.map(|c| c.id.get())), Ok(Some(25)));
        assert_eq!(team.slot(0).map(|c| c.name.as_str()), Some("eevee"));
    }

    #[test]
    fn test_set_slot_clears_with_none() {
        let mut team = Team::from_slots(vec![Some(creature(25, "pikachu"))]);
        team.set_slot(0, None).expect("slot in range");
        assert_eq!(team.occupied_count(), 0);
    }

    #[test]
    fn test_set_slot_out_of_range() {
        let mut team = Team::new();
        assert_eq!(
            team.set_slot(6, Some(creature(1, "bulbasaur"))),
            Err(DomainError::SlotOutOfRange { index: 6, size: 6 })
        );
        assert_eq!(team, Team::new());
    }

    #[test]
    fn test_serializes_as_six_entry_array() {
        let team = Team::from_slots(vec![Some(creature(25, "pikachu"))]);
        let json = serde_json::to_value(&team).expect("serialize");

        let entries = json.as_array().expect("array");
        assert_eq!(entries.len(), TEAM_SIZE);
        assert_eq!(entries[0]["id"], 25);
        assert!(entries[1..].iter().all(serde_json::Value::is_null));
    }

    #[test]
    fn test_deserialize_pads_short_array() {
        let team: Team =
            serde_json::from_str(r#"[{"id":1,"name":"bulbasaur","sprite":"s"},null]"#)
                .expect("deserialize");
        assert_eq!(team.slots().len(), TEAM_SIZE);
        assert_eq!(team.occupied_count(), 1);
    }
}
