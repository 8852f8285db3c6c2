use dioxus::prelude::*;
use medisia_core::model::Page;

use super::components::NoticeBanner;
use super::state::use_wizard;
use super::{
    AddMedicinesView, QuotesView, SummaryView, ThankYouView, TrackerView, WelcomeView,
    WellnessView,
};

/// Renders whichever page the session is on.
#[component]
pub fn WizardView() -> Element {
    let signals = use_wizard();
    let page = signals.wizard.read().page();

    rsx! {
        div { class: "wizard wizard--{page.slug()}",
            NoticeBanner {}
            match page {
                Page::Welcome => rsx! { WelcomeView {} },
                Page::AddMedicines => rsx! { AddMedicinesView {} },
                Page::Tracker => rsx! { TrackerView {} },
                Page::Wellness => rsx! { WellnessView {} },
                Page::Quotes => rsx! { QuotesView {} },
                Page::Summary => rsx! { SummaryView {} },
                Page::ThankYou => rsx! { ThankYouView {} },
            }
        }
    }
}
