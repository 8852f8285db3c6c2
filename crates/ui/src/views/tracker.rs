use dioxus::prelude::*;
use medisia_core::model::AdherenceChoice;

use crate::vm::{TrackerRowVm, map_tracker_rows};

use super::actions::record;
use super::components::NavButtons;
use super::state::use_wizard;

#[component]
pub fn TrackerView() -> Element {
    let signals = use_wizard();
    let rows = map_tracker_rows(signals.wizard.read().session());

    rsx! {
        div { class: "page",
            h2 { "🩺 Medicine Tracker" }
            p { "Mark whether you've taken your medicines today:" }

            if rows.is_empty() {
                p { class: "notice notice--warning",
                    "No medicines added yet! Please go back and add them."
                }
            } else {
                div { class: "tracker",
                    for row in rows {
                        TrackerRow { key: "{row.group}", row: row.clone() }
                    }
                }
            }

            NavButtons {}
        }
    }
}

#[component]
fn TrackerRow(row: TrackerRowVm) -> Element {
    let signals = use_wizard();
    let choices = [AdherenceChoice::Taken, AdherenceChoice::NotTaken];

    rsx! {
        fieldset { class: row.class(),
            legend {
                "Have you taken "
                strong { "{row.name}" }
                "?"
            }
            for choice in choices {
                ChoiceRadio {
                    key: "{choice.label()}",
                    medicine: row.name.clone(),
                    group: row.group.clone(),
                    choice,
                    checked: row.is_displayed(choice),
                    on_pick: move |(name, choice): (String, AdherenceChoice)| {
                        record(signals, &name, choice);
                    },
                }
            }
        }
    }
}

#[component]
fn ChoiceRadio(
    medicine: String,
    group: String,
    choice: AdherenceChoice,
    checked: bool,
    on_pick: EventHandler<(String, AdherenceChoice)>,
) -> Element {
    let icon = match choice {
        AdherenceChoice::Taken => "✅",
        AdherenceChoice::NotTaken => "❌",
    };
    rsx! {
        label { class: "tracker-choice",
            input {
                r#type: "radio",
                name: "{group}",
                checked,
                // A click on the already checked default still records it.
                onclick: move |_| on_pick.call((medicine.clone(), choice)),
            }
            "{choice.label()} {icon}"
        }
    }
}
