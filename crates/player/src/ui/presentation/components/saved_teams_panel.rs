//! Saved teams panel on the home view

use dioxus::prelude::*;
use poketeam_domain::SavedTeamId;

use crate::presentation::state::use_team_state;

#[component]
pub fn SavedTeamsPanel() -> Element {
    let mut team_state = use_team_state();
    let mut new_name = use_signal(String::new);

    let saved_teams = team_state.saved_teams();

    let mut save = move || {
        let name = new_name.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        let id = team_state.add_saved_team(name);
        tracing::debug!("Saved team {}", id);
        new_name.set(String::new());
    };

    rsx! {
        section {
            class: "saved-teams",
            h2 { "Saved Teams" }
            div {
                class: "saved-teams-form",
                input {
                    r#type: "text",
                    placeholder: "Team name",
                    value: "{new_name}",
                    oninput: move |e| new_name.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            save();
                        }
                    },
                }
                button {
                    onclick: move |_| save(),
                    "Save team"
                }
            }
            ul {
                for (id, name) in saved_teams.iter().map(|t| (t.id(), t.name().to_string())) {
                    SavedTeamRow { key: "{id}", id, name }
                }
            }
        }
    }
}

#[component]
fn SavedTeamRow(id: SavedTeamId, name: String) -> Element {
    let mut team_state = use_team_state();

    rsx! {
        li {
            span { "{name}" }
            button {
                class: "remove-button",
                onclick: move |_| {
                    team_state.remove_saved_team(id);
                },
                "Delete"
            }
        }
    }
}
