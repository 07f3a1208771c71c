//! PokéTeam domain types.
//!
//! Pure data model for the team builder: catalogue records, the fixed-size
//! active team, saved teams and the favorites collection. No I/O lives here;
//! persistence and fetching are the player crate's concern.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{FavoriteToggle, Favorites, Team, TEAM_SIZE};
pub use entities::SavedTeam;
pub use error::DomainError;
pub use ids::{CreatureId, SavedTeamId};
pub use value_objects::{CreatureDetail, CreatureSummary, Stat, STAT_BAR_MAX};
