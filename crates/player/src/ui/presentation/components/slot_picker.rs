//! Modal asking which team slot receives a creature

use dioxus::prelude::*;
use poketeam_domain::{CreatureSummary, TEAM_SIZE};

/// Props for SlotPicker
#[derive(Props, Clone, PartialEq)]
pub struct SlotPickerProps {
    pub creature: CreatureSummary,
    /// Called with the 0-based slot index
    pub on_pick: EventHandler<usize>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn SlotPicker(props: SlotPickerProps) -> Element {
    rsx! {
        div {
            class: "overlay",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "popup",
                onclick: |e| e.stop_propagation(),
                h3 { "Where do you want to put {props.creature.name}?" }
                div {
                    class: "slot-buttons",
                    for index in 0..TEAM_SIZE {
                        button {
                            key: "{index}",
                            onclick: move |_| props.on_pick.call(index),
                            {format!("Slot {}", index + 1)}
                        }
                    }
                }
                button {
                    class: "close-button",
                    onclick: move |_| props.on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
