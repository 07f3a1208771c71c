//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate keeps its fields private and validates on construction, so
//! a deserialized value upholds the same invariants as one built in code.

pub mod favorites;
pub mod team;

pub use favorites::{FavoriteToggle, Favorites};
pub use team::{Team, TEAM_SIZE};
