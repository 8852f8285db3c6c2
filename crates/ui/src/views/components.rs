use dioxus::prelude::*;

use super::actions::{go_back, go_next};
use super::state::use_wizard;

#[component]
pub(super) fn NavButtons() -> Element {
    let signals = use_wizard();
    rsx! {
        div { class: "nav-buttons",
            button {
                class: "nav-button nav-button--back",
                r#type: "button",
                onclick: move |_| go_back(signals),
                "⬅️ Back"
            }
            button {
                class: "nav-button nav-button--next",
                r#type: "button",
                onclick: move |_| go_next(signals),
                "Next ➡️"
            }
        }
    }
}

#[component]
pub(super) fn NoticeBanner() -> Element {
    let signals = use_wizard();
    let notice = signals.notice.read().clone();
    rsx! {
        if let Some(notice) = notice {
            div { class: notice.class(), role: "status", "{notice.message}" }
        }
    }
}

#[component]
pub(super) fn BulletList(items: Vec<String>) -> Element {
    rsx! {
        ul { class: "bullet-list",
            for item in items {
                li { "{item}" }
            }
        }
    }
}
