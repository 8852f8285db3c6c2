use dioxus::prelude::*;

use crate::context::AppContext;

use super::components::NavButtons;

#[component]
pub fn QuotesView() -> Element {
    let ctx = use_context::<AppContext>();
    // Drawn again on every render; no need to keep the previous pick.
    let quotes = ctx.content().pick_quotes();

    rsx! {
        div { class: "page",
            h2 { "💫 Motivational Quotes 💫" }
            div { class: "quotes",
                for quote in quotes {
                    blockquote { class: "quote", "{quote}" }
                }
            }
            NavButtons {}
        }
    }
}
