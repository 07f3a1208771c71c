//! PokeAPI payload fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// A `GET /pokemon?limit=N` body listing `names` in order.
pub fn pokemon_list(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            })
        })
        .collect();

    json!({
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=151&limit=151",
        "previous": null,
        "results": results,
    })
}

/// A trimmed `GET /pokemon/6` body (charizard).
pub fn charizard_detail() -> Value {
    json!({
        "id": 6,
        "name": "charizard",
        "height": 17,
        "weight": 905,
        "sprites": {
            "front_default": "https://img/6.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://img/official-artwork/6.png",
                    "front_shiny": "https://img/official-artwork/shiny/6.png"
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
            { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
        ],
        "stats": [
            { "base_stat": 78, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 84, "effort": 0, "stat": { "name": "attack" } },
            { "base_stat": 78, "effort": 0, "stat": { "name": "defense" } },
            { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack" } },
            { "base_stat": 85, "effort": 0, "stat": { "name": "special-defense" } },
            { "base_stat": 100, "effort": 0, "stat": { "name": "speed" } }
        ]
    })
}
