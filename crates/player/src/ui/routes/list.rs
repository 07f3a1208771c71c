//! List route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn ListRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("Pokémon List | PokéTeam");
    });

    rsx! {
        crate::presentation::views::ListView {}
    }
}
