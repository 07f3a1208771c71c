//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A team slot index outside `[0, size)`
    #[error("Team slot {index} is out of range (team has {size} slots)")]
    SlotOutOfRange { index: usize, size: usize },

    /// Creature ids are 1-based catalogue numbers
    #[error("Invalid creature id: {0} (ids start at 1)")]
    InvalidCreatureId(u32),
}

impl DomainError {
    /// Creates a slot range error for a team of [`crate::TEAM_SIZE`] slots.
    pub fn slot_out_of_range(index: usize) -> Self {
        Self::SlotOutOfRange {
            index,
            size: crate::TEAM_SIZE,
        }
    }
}
