//! Home route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn HomeRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("My Team | PokéTeam");
    });

    rsx! {
        crate::presentation::views::HomeView {}
    }
}
