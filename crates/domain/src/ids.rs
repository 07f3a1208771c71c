use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        $(#[$meta])*
        pub struct $name($repr);

        impl $name {
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(
    /// Catalogue number of a creature, starting at 1
    #[serde(try_from = "u32", into = "u32")]
    CreatureId(u32)
);

define_id!(
    /// Identity of a saved team: its creation time in milliseconds since epoch
    #[serde(transparent)]
    SavedTeamId(u64)
);

impl CreatureId {
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        if raw == 0 {
            return Err(DomainError::InvalidCreatureId(raw));
        }
        Ok(Self(raw))
    }

    /// Id for the entry at `index` (0-based) of a catalogue listing.
    pub fn from_position(index: usize) -> Self {
        let raw = u32::try_from(index)
            .map(|i| i.saturating_add(1))
            .unwrap_or(u32::MAX);
        Self(raw)
    }
}

impl TryFrom<u32> for CreatureId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl SavedTeamId {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// The smallest id strictly greater than this one.
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for SavedTeamId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id_rejects_zero() {
        assert_eq!(CreatureId::new(0), Err(DomainError::InvalidCreatureId(0)));
        assert_eq!(CreatureId::new(25).map(CreatureId::get), Ok(25));
    }

    #[test]
    fn test_creature_id_from_position_is_one_based() {
        assert_eq!(CreatureId::from_position(0).get(), 1);
        assert_eq!(CreatureId::from_position(150).get(), 151);
    }

    #[test]
    fn test_creature_id_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<CreatureId>("0").is_err());
        let id: CreatureId = serde_json::from_str("7").expect("valid id");
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_saved_team_id_serializes_as_number() {
        let id = SavedTeamId::from_millis(1_700_000_000_123);
        assert_eq!(
            serde_json::to_string(&id).expect("serialize"),
            "1700000000123"
        );
        assert_eq!(id.successor().get(), 1_700_000_000_124);
    }
}
