//! View state for the presentation layer

pub mod catalogue_state;
pub mod detail_state;
pub mod team_state;

pub use catalogue_state::CatalogueState;
pub use detail_state::{DetailPhase, DetailTicket, DetailTracker};
pub use team_state::{use_team_state, TeamState};
