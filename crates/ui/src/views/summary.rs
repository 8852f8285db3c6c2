use dioxus::prelude::*;

use crate::vm::{SummaryVm, map_summary};

use super::components::{BulletList, NavButtons};
use super::state::use_wizard;

#[component]
pub fn SummaryView() -> Element {
    let signals = use_wizard();
    let summary = map_summary(&signals.wizard.read().summarize());

    rsx! {
        div { class: "page",
            h2 { "📋 Summary of Your Day" }
            p { class: "summary-day", "{summary.day_label}" }

            if summary.has_medicines {
                SummaryDetails { summary: summary.clone() }
            } else {
                p { "No medicines added today." }
            }

            NavButtons {}
        }
    }
}

#[component]
fn SummaryDetails(summary: SummaryVm) -> Element {
    rsx! {
        section { class: "summary-section summary-section--taken",
            h3 { "✅ Medicines Taken:" }
            if let Some(placeholder) = summary.taken_placeholder() {
                p { "{placeholder}" }
            } else {
                BulletList { items: summary.taken.clone() }
            }
        }

        section { class: "summary-section summary-section--not-taken",
            h3 { "❌ Medicines Not Taken:" }
            if let Some(placeholder) = summary.not_taken_placeholder() {
                p { "{placeholder}" }
            } else if summary.not_taken.is_empty() {
                p { "None marked as not taken." }
            } else {
                BulletList { items: summary.not_taken.clone() }
            }
        }

        if !summary.unanswered.is_empty() {
            section { class: "summary-section summary-section--unanswered",
                h3 { "❔ Not Answered:" }
                BulletList { items: summary.unanswered.clone() }
            }
        }
    }
}
