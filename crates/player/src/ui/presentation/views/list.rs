//! List view - the catalogue, favorites toggles and the slot picker

use dioxus::prelude::*;
use poketeam_domain::CreatureSummary;

use crate::presentation::components::{CreatureCard, SlotPicker};
use crate::presentation::services::use_catalogue_service;
use crate::presentation::state::{use_team_state, CatalogueState};

#[component]
pub fn ListView() -> Element {
    let mut team_state = use_team_state();
    let catalogue_service = use_catalogue_service();
    let mut catalogue = use_signal(CatalogueState::new);
    let mut selected: Signal<Option<CreatureSummary>> = use_signal(|| None);

    // Fetch once per mount
    use_effect(move || {
        let service = catalogue_service.clone();
        spawn(async move {
            tracing::debug!("Fetching catalogue");
            let result = service.fetch_catalogue().await;
            catalogue.write().finish(result);
        });
    });

    let state = catalogue.read().clone();
    let picking = selected.read().clone();

    rsx! {
        div {
            class: "list",
            h1 { "Pokémon List" }

            if state.is_loading() {
                p { class: "loading", "Loading Pokémon..." }
            } else {
                div {
                    class: "creature-grid",
                    for (creature, is_favorite) in state
                        .entries()
                        .iter()
                        .map(|c| (c.clone(), team_state.is_favorite(c.id)))
                    {
                        CreatureCard {
                            key: "{creature.id}",
                            creature,
                            is_favorite,
                            on_select: move |c: CreatureSummary| selected.set(Some(c)),
                            on_toggle_favorite: move |c: CreatureSummary| {
                                team_state.toggle_favorite(c);
                            },
                        }
                    }
                }
            }

            if let Some(creature) = picking {
                SlotPicker {
                    creature: creature.clone(),
                    on_pick: move |index: usize| {
                        team_state.set_team_slot(Some(creature.clone()), index);
                        selected.set(None);
                    },
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
