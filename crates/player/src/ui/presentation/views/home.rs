//! Home view - the active team, its detail popup and saved teams

use dioxus::prelude::*;
use poketeam_domain::CreatureId;

use crate::presentation::components::{DetailPopup, SavedTeamsPanel, TeamSlot};
use crate::presentation::services::use_detail_service;
use crate::presentation::state::{use_team_state, DetailTracker};

#[component]
pub fn HomeView() -> Element {
    let mut team_state = use_team_state();
    let detail_service = use_detail_service();
    let mut tracker = use_signal(DetailTracker::new);

    let team = team_state.team();
    let open_detail = tracker.read().detail().cloned();

    let on_open_detail = move |id: CreatureId| {
        let ticket = tracker.write().request(id);
        let service = detail_service.clone();
        spawn(async move {
            let result = service.fetch_detail(id).await;
            tracker.write().resolve(ticket, result);
        });
    };

    rsx! {
        div {
            class: "home",
            h1 { "My Team" }

            div {
                class: "team-grid",
                for (index, slot) in team.slots().iter().cloned().enumerate() {
                    TeamSlot {
                        key: "{index}",
                        index,
                        creature: slot,
                        on_open_detail: on_open_detail.clone(),
                        on_remove: move |index: usize| team_state.set_team_slot(None, index),
                    }
                }
            }

            SavedTeamsPanel {}

            if let Some(detail) = open_detail {
                DetailPopup {
                    detail,
                    on_close: move |_| tracker.write().close(),
                }
            }
        }
    }
}
