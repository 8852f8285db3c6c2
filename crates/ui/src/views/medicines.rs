use dioxus::prelude::*;

use crate::vm::Notice;

use super::actions::submit_medicine;
use super::components::{BulletList, NavButtons};
use super::state::use_wizard;

#[component]
pub fn AddMedicinesView() -> Element {
    let mut signals = use_wizard();
    let mut draft = signals.medicine_draft;

    let wizard = signals.wizard.read();
    let name = wizard.session().name().to_owned();
    let medicines: Vec<String> = wizard
        .session()
        .medicines()
        .iter()
        .map(|m| m.as_str().to_owned())
        .collect();
    drop(wizard);

    rsx! {
        div { class: "page",
            h2 { "💊 Hi {name}, add your medicines below:" }

            label { class: "field",
                span { class: "field-label", "Medicine name:" }
                input {
                    id: "medicine-input",
                    r#type: "text",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            submit_medicine(signals);
                        }
                    },
                    autofocus: true,
                }
            }

            div { class: "medicine-actions",
                button {
                    class: "action-button",
                    r#type: "button",
                    onclick: move |_| submit_medicine(signals),
                    "➕ Add Medicine"
                }
                button {
                    class: "action-button action-button--quiet",
                    r#type: "button",
                    onclick: move |_| {
                        signals.show(Notice::info("You can type and add more medicines above 💊"));
                    },
                    "➕ Add More Medicines"
                }
            }

            if !medicines.is_empty() {
                h3 { "💖 Your Medicine List:" }
                BulletList { items: medicines.clone() }
            }

            NavButtons {}
        }
    }
}
