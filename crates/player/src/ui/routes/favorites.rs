//! Favorites route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn FavoritesRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("Favorite Pokémon | PokéTeam");
    });

    rsx! {
        crate::presentation::views::FavoritesView {}
    }
}
