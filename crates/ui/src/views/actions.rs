use dioxus::prelude::*;
use medisia_core::WizardError;
use medisia_core::model::{AdherenceChoice, Page};

use crate::context::AppContext;
use crate::vm::Notice;

use super::state::WizardSignals;

fn settle<T>(mut signals: WizardSignals, result: Result<T, WizardError>) {
    match result {
        Ok(_) => signals.clear_notice(),
        Err(err) => signals.show(Notice::from(&err)),
    }
}

/// Save the typed name and move on to the medicine list.
pub(crate) fn submit_name(mut signals: WizardSignals) {
    let draft = signals.name_draft.read().clone();
    let result = {
        let mut wizard = signals.wizard.write();
        wizard.set_name(&draft);
        wizard.advance()
    };
    settle(signals, result);
}

pub(crate) fn go_next(mut signals: WizardSignals) {
    let result = signals.wizard.write().advance();
    settle(signals, result);
}

pub(crate) fn go_back(mut signals: WizardSignals) {
    signals.clear_notice();
    signals.wizard.write().retreat();
}

/// Jump to a page from the progress bar.
///
/// Leaving the welcome page this way saves the typed name first, so the
/// empty-name check sees what is in the field.
pub(crate) fn jump_to(mut signals: WizardSignals, index: usize) {
    let draft = signals.name_draft.read().clone();
    let result = {
        let mut wizard = signals.wizard.write();
        if wizard.page() == Page::Welcome {
            wizard.set_name(&draft);
        }
        wizard.go_to(index)
    };
    settle(signals, result);
}

/// Add the typed medicine. The field is cleared only when the add succeeds.
pub(crate) fn submit_medicine(mut signals: WizardSignals) {
    let raw = signals.medicine_draft.read().clone();
    let result = signals.wizard.write().add_medicine(&raw);
    match result {
        Ok(name) => {
            signals.medicine_draft.set(String::new());
            signals.flash(Notice::success(format!("✅ {name} added successfully!")));
        }
        Err(err) => signals.show(Notice::from(&err)),
    }
}

pub(crate) fn record(mut signals: WizardSignals, name: &str, choice: AdherenceChoice) {
    let result = signals.wizard.write().set_adherence(name, choice);
    if let Err(err) = result {
        signals.show(Notice::from(&err));
    }
}

/// Start a new walk-through, keeping the configured name prefill.
pub(crate) fn restart(mut signals: WizardSignals, ctx: &AppContext) {
    signals.clear_notice();
    let name = {
        let mut wizard = signals.wizard.write();
        ctx.restart_wizard(&mut wizard);
        wizard.session().name().to_owned()
    };
    signals.name_draft.set(name);
    signals.medicine_draft.set(String::new());
}
