use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{WizardView, jump_to, use_wizard};
use crate::vm::{ProgressStepVm, StepState, map_progress_steps};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WizardView)] Wizard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Medisia 💖" }
                ProgressSteps {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ProgressSteps() -> Element {
    let signals = use_wizard();
    let page = signals.wizard.read().page();
    let steps = map_progress_steps(page);

    rsx! {
        nav { class: "progress",
            ol {
                for step in steps {
                    ProgressStep { key: "{step.index}", step: step.clone() }
                }
            }
        }
    }
}

#[component]
fn ProgressStep(step: ProgressStepVm) -> Element {
    let signals = use_wizard();
    let index = step.index;
    let number = index + 1;

    rsx! {
        li { class: step.class(),
            button {
                r#type: "button",
                title: step.title,
                disabled: step.state == StepState::Current,
                onclick: move |_| jump_to(signals, index),
                span { class: "progress-number", "{number}" }
                span { class: "progress-title", "{step.title}" }
            }
        }
    }
}
