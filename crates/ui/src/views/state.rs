use std::time::Duration;

use dioxus::prelude::*;
use services::WizardService;

use crate::vm::Notice;

const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Handles to the walk-through state shared by every page.
///
/// The drafts hold text typed into the page inputs but not yet submitted.
#[derive(Clone, Copy, PartialEq)]
pub struct WizardSignals {
    pub wizard: Signal<WizardService>,
    pub notice: Signal<Option<Notice>>,
    pub name_draft: Signal<String>,
    pub medicine_draft: Signal<String>,
}

impl WizardSignals {
    pub fn show(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    pub fn clear_notice(&mut self) {
        self.notice.set(None);
    }

    /// Show a notice that clears itself unless replaced in the meantime.
    pub fn flash(&mut self, notice: Notice) {
        self.notice.set(Some(notice.clone()));
        let mut slot = self.notice;
        spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            if slot.read().as_ref() == Some(&notice) {
                slot.set(None);
            }
        });
    }
}

/// Install the walk-through state for the subtree. Call once at the root.
pub fn use_wizard_provider(init: impl FnOnce() -> WizardService) -> WizardSignals {
    let wizard = use_signal(init);
    let notice = use_signal(|| None::<Notice>);
    let name_draft = use_signal(|| wizard.peek().session().name().to_owned());
    let medicine_draft = use_signal(String::new);
    use_context_provider(|| WizardSignals {
        wizard,
        notice,
        name_draft,
        medicine_draft,
    })
}

#[must_use]
pub fn use_wizard() -> WizardSignals {
    use_context::<WizardSignals>()
}
