//! Value objects - Immutable objects defined by their attributes

mod creature;

pub use creature::{CreatureDetail, CreatureSummary, Stat, STAT_BAR_MAX};
