use dioxus::prelude::*;

use crate::state::Platform;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_platform();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(|| presentation::state::TeamState::new(&platform));

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }

        Router::<routes::Route> {}
    }
}
