//! Detail popup for a team member

use dioxus::prelude::*;
use poketeam_domain::CreatureDetail;

/// Props for DetailPopup
#[derive(Props, Clone, PartialEq)]
pub struct DetailPopupProps {
    pub detail: CreatureDetail,
    /// Called by the close button and by clicks on the overlay
    pub on_close: EventHandler<()>,
}

#[component]
pub fn DetailPopup(props: DetailPopupProps) -> Element {
    let detail = &props.detail;
    let types = detail.types_label();

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "popup",
                onclick: |e| e.stop_propagation(),

                button {
                    class: "close-button",
                    onclick: move |_| props.on_close.call(()),
                    "×"
                }
                img {
                    class: "artwork",
                    src: "{detail.sprite_url}",
                    alt: "{detail.name}",
                }
                h2 { class: "creature-name", "{detail.name}" }
                p { strong { "Type: " } "{types}" }
                p { strong { "Height: " } "{detail.height_meters} m" }
                p { strong { "Weight: " } "{detail.weight_kg} kg" }

                div {
                    class: "stats",
                    for stat in detail.stats.iter() {
                        div {
                            key: "{stat.name}",
                            class: "stat-row",
                            span { class: "stat-name", "{stat.name}" }
                            div {
                                class: "stat-bar",
                                div {
                                    class: "stat-fill",
                                    style: format!("width: {}%", stat.bar_percent()),
                                }
                            }
                            span { class: "stat-value", "{stat.value}" }
                        }
                    }
                }
            }
        }
    }
}
