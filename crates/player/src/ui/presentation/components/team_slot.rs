//! One slot of the active team on the home view

use dioxus::prelude::*;
use poketeam_domain::{CreatureId, CreatureSummary};

/// Props for TeamSlot
#[derive(Props, Clone, PartialEq)]
pub struct TeamSlotProps {
    pub index: usize,
    pub creature: Option<CreatureSummary>,
    pub on_open_detail: EventHandler<CreatureId>,
    pub on_remove: EventHandler<usize>,
}

#[component]
pub fn TeamSlot(props: TeamSlotProps) -> Element {
    let index = props.index;

    match props.creature {
        Some(creature) => {
            let id = creature.id;
            rsx! {
                div {
                    class: "team-slot",
                    img {
                        class: "clickable",
                        src: "{creature.sprite_url}",
                        alt: "{creature.name}",
                        onclick: move |_| props.on_open_detail.call(id),
                    }
                    p { class: "creature-name", "{creature.name}" }
                    button {
                        class: "remove-button",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            props.on_remove.call(index);
                        },
                        "Remove"
                    }
                }
            }
        }
        None => rsx! {
            div {
                class: "team-slot empty",
                p { "Empty" }
            }
        },
    }
}
