use dioxus::prelude::*;
use medisia_core::model::{Adherence, AdherenceChoice, Page, Session};
use medisia_core::time::fixed_now;

use crate::context::WizardConfig;
use crate::vm::{NoticeKind, map_tracker_rows};

use super::actions::{go_back, go_next, jump_to, record, restart, submit_medicine, submit_name};
use super::state::WizardSignals;
use super::test_harness::{ViewHarness, session_on, setup_view_harness, setup_view_harness_with};

fn started(session: Session) -> ViewHarness {
    let mut harness = setup_view_harness(session);
    harness.rebuild();
    harness
}

fn page(harness: &ViewHarness) -> Page {
    harness.inspect(|signals| signals.wizard.read().page())
}

fn notice_kind(harness: &ViewHarness) -> Option<NoticeKind> {
    harness.inspect(|signals| signals.notice.read().as_ref().map(|n| n.kind))
}

fn type_name(mut signals: WizardSignals, text: &str) {
    signals.name_draft.set(text.to_string());
}

fn type_medicine(mut signals: WizardSignals, text: &str) {
    signals.medicine_draft.set(text.to_string());
}

#[tokio::test(flavor = "current_thread")]
async fn empty_name_shows_warning_and_stays_on_welcome() {
    let mut harness = started(Session::new(fixed_now()));

    harness.act(|signals, _| {
        type_name(signals, "   ");
        submit_name(signals);
    });

    assert_eq!(page(&harness), Page::Welcome);
    assert_eq!(notice_kind(&harness), Some(NoticeKind::Warning));
    let html = harness.render();
    assert!(html.contains("Please enter your name"), "missing warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn typed_name_is_saved_trimmed_on_next() {
    let mut harness = started(Session::new(fixed_now()));

    harness.act(|signals, _| {
        type_name(signals, "  Mia ");
        submit_name(signals);
    });

    assert_eq!(page(&harness), Page::AddMedicines);
    assert_eq!(notice_kind(&harness), None);
    assert_eq!(
        harness.inspect(|signals| signals.wizard.read().session().name().to_owned()),
        "Mia"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_jump_from_welcome_checks_the_typed_name() {
    let mut harness = started(session_on(0, &[]));

    harness.act(|signals, _| {
        type_name(signals, "");
        jump_to(signals, 3);
    });
    assert_eq!(page(&harness), Page::Welcome);
    assert_eq!(notice_kind(&harness), Some(NoticeKind::Warning));

    harness.act(|signals, _| {
        type_name(signals, "Ana");
        jump_to(signals, 2);
    });
    assert_eq!(page(&harness), Page::Tracker);
    assert_eq!(notice_kind(&harness), None);
    assert_eq!(
        harness.inspect(|signals| signals.wizard.read().session().name().to_owned()),
        "Ana"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn duplicate_medicine_shows_warning_and_keeps_draft() {
    let mut harness = started(session_on(1, &[("Aspirin", None)]));

    harness.act(|signals, _| {
        type_medicine(signals, "Aspirin");
        submit_medicine(signals);
    });

    assert_eq!(notice_kind(&harness), Some(NoticeKind::Warning));
    harness.inspect(|signals| {
        assert_eq!(signals.wizard.read().session().medicines().len(), 1);
        assert_eq!(*signals.medicine_draft.read(), "Aspirin");
    });
    let html = harness.render();
    assert!(html.contains("already added"), "missing warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn added_medicine_clears_draft_and_flashes_success() {
    let mut harness = started(session_on(1, &[]));

    harness.act(|signals, _| {
        type_medicine(signals, "  Vitamin D ");
        submit_medicine(signals);
    });

    assert_eq!(notice_kind(&harness), Some(NoticeKind::Success));
    harness.inspect(|signals| {
        assert!(signals.medicine_draft.read().is_empty());
        let wizard = signals.wizard.read();
        let names: Vec<&str> = wizard.session().medicines().iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["Vitamin D"]);
    });
    let html = harness.render();
    assert!(html.contains("Vitamin D added successfully!"), "missing success in {html}");
    assert!(html.contains("<li>Vitamin D</li>"), "missing list entry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn picking_the_displayed_default_records_not_taken() {
    let mut harness = started(session_on(2, &[("A", None)]));

    let row = harness.inspect(|signals| {
        let wizard = signals.wizard.read();
        map_tracker_rows(wizard.session()).remove(0)
    });
    assert!(!row.answered);
    assert_eq!(row.displayed, AdherenceChoice::NotTaken);

    harness.act(|signals, _| record(signals, &row.name, row.displayed));

    harness.inspect(|signals| {
        let wizard = signals.wizard.read();
        assert_eq!(wizard.session().adherence_of("A"), Some(Adherence::NotTaken));
        assert!(wizard.summarize().unset().is_empty());
    });
}

#[tokio::test(flavor = "current_thread")]
async fn next_and_back_move_one_page() {
    let mut harness = started(session_on(1, &[]));

    harness.act(|signals, _| go_next(signals));
    assert_eq!(page(&harness), Page::Tracker);

    harness.act(|signals, _| {
        go_back(signals);
        go_back(signals);
        go_back(signals);
    });
    assert_eq!(page(&harness), Page::Welcome);
    let html = harness.render();
    assert!(html.contains("wizard--welcome"), "missing welcome page in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restart_clears_session_and_drafts() {
    let mut harness = started(session_on(6, &[("A", Some(AdherenceChoice::Taken))]));

    harness.act(|signals, ctx| {
        type_medicine(signals, "left over");
        restart(signals, ctx);
    });

    harness.inspect(|signals| {
        let wizard = signals.wizard.read();
        assert_eq!(wizard.page(), Page::Welcome);
        assert_eq!(wizard.session().name(), "");
        assert!(wizard.session().medicines().is_empty());
        assert!(signals.name_draft.read().is_empty());
        assert!(signals.medicine_draft.read().is_empty());
    });
    let html = harness.render();
    assert!(html.contains("Welcome to Medisia"), "missing welcome in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restart_fills_in_configured_name_again() {
    let config = WizardConfig {
        initial_name: Some("Mia".to_string()),
    };
    let mut harness = setup_view_harness_with(session_on(6, &[("A", None)]), config);
    harness.rebuild();

    harness.act(|signals, ctx| restart(signals, ctx));

    harness.inspect(|signals| {
        assert_eq!(signals.wizard.read().session().name(), "Mia");
        assert_eq!(*signals.name_draft.read(), "Mia");
    });
    let html = harness.render();
    assert!(html.contains("Mia"), "missing prefill in {html}");
}
