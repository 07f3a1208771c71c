//! PokeAPI wire format
//!
//! Only the fields the player reads are modelled; serde ignores the rest.
//! Heights arrive in decimeters and weights in hectograms.

use serde::{Deserialize, Serialize};

use poketeam_domain::{CreatureDetail, Stat};

/// `{ name, url }` reference used throughout the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub results: Vec<NamedResource>,
}

/// `GET /pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetailResponse {
    pub name: String,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub sprites: PokemonSprites,
    pub types: Vec<PokemonTypeSlot>,
    pub stats: Vec<PokemonStatSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

impl PokemonDetailResponse {
    /// Official artwork URL, if the API has one for this creature.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
    }

    /// Shape into a display record; `fallback_sprite` is used when there is
    /// no official artwork.
    pub fn into_detail(self, fallback_sprite: String) -> CreatureDetail {
        let sprite_url = self
            .artwork_url()
            .map(str::to_string)
            .unwrap_or(fallback_sprite);

        CreatureDetail {
            name: self.name,
            sprite_url,
            height_meters: f64::from(self.height) / 10.0,
            weight_kg: f64::from(self.weight) / 10.0,
            types: self.types.into_iter().map(|t| t.kind.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}
