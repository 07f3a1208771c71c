//! Creature records shaped from the catalogue API

use serde::{Deserialize, Serialize};

use crate::CreatureId;

/// Stat value that fills a display bar completely
pub const STAT_BAR_MAX: f64 = 150.0;

/// Minimal creature identity used by lists, team slots and favorites.
///
/// Persisted with the field names `id`, `name` and `sprite`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub id: CreatureId,
    pub name: String,
    #[serde(rename = "sprite")]
    pub sprite_url: String,
}

impl CreatureSummary {
    pub fn new(id: CreatureId, name: impl Into<String>, sprite_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sprite_url: sprite_url.into(),
        }
    }
}

/// A single base stat (hp, attack, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Stat {
    /// Width of the stat bar as a percentage in `[0, 100]`.
    pub fn bar_percent(&self) -> f64 {
        (f64::from(self.value) / STAT_BAR_MAX * 100.0).clamp(0.0, 100.0)
    }
}

/// Full detail for one creature, fetched when it is inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDetail {
    pub name: String,
    pub sprite_url: String,
    pub height_meters: f64,
    pub weight_kg: f64,
    /// Type names in slot order (e.g. `["fire", "flying"]`)
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
}

impl CreatureDetail {
    /// Types joined for display, e.g. `"fire, flying"`.
    pub fn types_label(&self) -> String {
        self.types.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(value: u32) -> Stat {
        Stat {
            name: "attack".to_string(),
            value,
        }
    }

    #[test]
    fn test_bar_percent_scales_against_max() {
        assert_eq!(stat(75).bar_percent(), 50.0);
        assert_eq!(stat(0).bar_percent(), 0.0);
    }

    #[test]
    fn test_bar_percent_clamps_above_max() {
        assert_eq!(stat(255).bar_percent(), 100.0);
    }

    #[test]
    fn test_summary_uses_sprite_field_name() {
        let id = CreatureId::new(25).expect("valid id");
        let summary = CreatureSummary::new(id, "pikachu", "https://img/25.png");

        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["id"], 25);
        assert_eq!(json["sprite"], "https://img/25.png");
        assert!(json.get("sprite_url").is_none());
    }

    #[test]
    fn test_types_label() {
        let detail = CreatureDetail {
            name: "charizard".to_string(),
            sprite_url: String::new(),
            height_meters: 1.7,
            weight_kg: 90.5,
            types: vec!["fire".to_string(), "flying".to_string()],
            stats: Vec::new(),
        };
        assert_eq!(detail.types_label(), "fire, flying");
    }
}
