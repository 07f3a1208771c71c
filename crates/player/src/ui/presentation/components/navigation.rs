//! Top navigation bar, rendered as the layout around every page

use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-logo", "PokéTeam" }
            div {
                class: "navbar-links",
                Link { to: Route::HomeRoute {}, active_class: "active", "Home" }
                Link { to: Route::ListRoute {}, active_class: "active", "List" }
                Link { to: Route::FavoritesRoute {}, active_class: "active", "Favorites" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
