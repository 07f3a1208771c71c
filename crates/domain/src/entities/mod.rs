//! Entities - objects with identity that outlive their attribute values

mod saved_team;

pub use saved_team::SavedTeam;
