//! Favorites view

use dioxus::prelude::*;
use poketeam_domain::CreatureSummary;

use crate::presentation::state::use_team_state;

#[component]
pub fn FavoritesView() -> Element {
    let team_state = use_team_state();
    let favorites = team_state.favorites();

    rsx! {
        div {
            class: "favorites",
            h1 { "Favorite Pokémon" }

            if favorites.is_empty() {
                p { class: "empty-message", "No favorites added yet." }
            } else {
                div {
                    class: "creature-grid",
                    for creature in favorites.iter().cloned() {
                        FavoriteCard { key: "{creature.id}", creature }
                    }
                }
            }
        }
    }
}

#[component]
fn FavoriteCard(creature: CreatureSummary) -> Element {
    let mut team_state = use_team_state();
    let removed = creature.clone();

    rsx! {
        div {
            class: "creature-card favorite",
            img {
                src: "{creature.sprite_url}",
                alt: "{creature.name}",
            }
            p { class: "creature-name", "{creature.name}" }
            button {
                class: "remove-button",
                onclick: move |_| {
                    team_state.toggle_favorite(removed.clone());
                },
                "Remove"
            }
        }
    }
}
