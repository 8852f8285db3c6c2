use dioxus::prelude::*;

use super::actions::submit_name;
use super::state::use_wizard;

#[component]
pub fn WelcomeView() -> Element {
    let signals = use_wizard();
    let mut draft = signals.name_draft;

    rsx! {
        div { class: "page page--centered",
            h1 { "🌸 Welcome to Medisia 🌸" }
            p { class: "tagline", "Your daily dose of health, care, and calmness 💖" }

            label { class: "field",
                span { class: "field-label", "Enter your name:" }
                input {
                    id: "name-input",
                    r#type: "text",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            submit_name(signals);
                        }
                    },
                    autofocus: true,
                }
            }

            div { class: "nav-buttons nav-buttons--single",
                button {
                    class: "nav-button nav-button--next",
                    r#type: "button",
                    onclick: move |_| submit_name(signals),
                    "Next ➡️"
                }
            }
        }
    }
}
