//! Data transfer objects for the external creature API

pub mod pokeapi;

pub use pokeapi::{
    NamedResource, PokemonDetailResponse, PokemonListResponse, PokemonSprites, PokemonStatSlot,
    PokemonTypeSlot,
};
