//! Routes and their page-level handlers

mod favorites;
mod home;
mod list;
mod not_found;

use dioxus::prelude::*;

use crate::presentation::components::NavBar;

pub use favorites::FavoritesRoute;
pub use home::HomeRoute;
pub use list::ListRoute;
pub use not_found::NotFoundRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        HomeRoute {},
        #[route("/list")]
        ListRoute {},
        #[route("/favorites")]
        FavoritesRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}
