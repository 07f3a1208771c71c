//! Fallback for unknown paths

use crate::use_platform;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Not Found | PokéTeam");
    });

    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::HomeRoute {}, "Back to my team" }
        }
    }
}
