use dioxus::prelude::*;

use crate::context::AppContext;

use super::components::{BulletList, NavButtons};

#[component]
pub fn WellnessView() -> Element {
    let ctx = use_context::<AppContext>();
    let tips: Vec<String> = ctx
        .content()
        .wellness_tips()
        .iter()
        .map(|tip| (*tip).to_owned())
        .collect();

    rsx! {
        div { class: "page",
            h2 { "🌿 Wellness Reminder 🌿" }
            h3 { "Here are your wellness reminders:" }
            BulletList { items: tips }
            NavButtons {}
        }
    }
}
