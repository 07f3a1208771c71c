//! Catalogue card with a favorite toggle

use dioxus::prelude::*;
use poketeam_domain::CreatureSummary;

/// Props for CreatureCard
#[derive(Props, Clone, PartialEq)]
pub struct CreatureCardProps {
    pub creature: CreatureSummary,
    pub is_favorite: bool,
    /// Clicking the card body
    pub on_select: EventHandler<CreatureSummary>,
    /// The favorite button; does not trigger `on_select`
    pub on_toggle_favorite: EventHandler<CreatureSummary>,
}

#[component]
pub fn CreatureCard(props: CreatureCardProps) -> Element {
    let selected = props.creature.clone();
    let favorited = props.creature.clone();
    let card_class = if props.is_favorite {
        "creature-card favorite"
    } else {
        "creature-card"
    };
    let (star, favorite_title) = if props.is_favorite {
        ("★", "Remove from favorites")
    } else {
        ("☆", "Add to favorites")
    };

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| props.on_select.call(selected.clone()),
            img {
                src: "{props.creature.sprite_url}",
                alt: "{props.creature.name}",
            }
            p { class: "creature-name", "{props.creature.name}" }
            button {
                class: "favorite-button",
                title: favorite_title,
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    props.on_toggle_favorite.call(favorited.clone());
                },
                "{star}"
            }
        }
    }
}
