use dioxus::prelude::*;

use crate::context::AppContext;

use super::actions::restart;
use super::state::use_wizard;

#[component]
pub fn ThankYouView() -> Element {
    let signals = use_wizard();
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page page--centered",
            h1 { "🌷 Thank You for Using Medisia 🌷" }
            h3 { "Stay healthy, happy, and hydrated 💧💖" }
            p { "See you tomorrow!" }

            div { class: "nav-buttons nav-buttons--single",
                button {
                    class: "nav-button nav-button--restart",
                    r#type: "button",
                    onclick: move |_| restart(signals, &ctx),
                    "🔄 Restart"
                }
            }
        }
    }
}
