use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use medisia_core::Clock;
use medisia_core::model::{AdherenceChoice, Session};
use medisia_core::time::{fixed_clock, fixed_now};
use services::{ContentService, WizardService};

use crate::context::{AppContext, UiApp, WizardConfig, build_app_context};
use crate::routes::Route;
use crate::views::{WizardSignals, use_wizard_provider};

struct TestApp {
    clock: Clock,
    config: WizardConfig,
    content: Arc<ContentService>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn config(&self) -> WizardConfig {
        self.config.clone()
    }

    fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    signals: Rc<RefCell<Option<WizardSignals>>>,
    ctx: Rc<RefCell<Option<AppContext>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    session: Session,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let session = props.session.clone();
    let clock = ctx.clock();
    let signals = use_wizard_provider(move || WizardService::from_session(clock, session));
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.signals.borrow_mut() = Some(signals);
        *props.handles.ctx.borrow_mut() = Some(ctx.clone());
    }
    rsx! { Router::<Route> {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    /// Run `f` against the live state the way an event handler would, then
    /// let the dom catch up.
    ///
    /// # Panics
    ///
    /// Panics if called before [`ViewHarness::rebuild`].
    pub fn act<T>(&mut self, f: impl FnOnce(WizardSignals, &AppContext) -> T) -> T {
        let signals = (*self.handles.signals.borrow()).expect("signals registered");
        let ctx = self.handles.ctx.borrow().clone().expect("context registered");
        let out = self.dom.in_scope(ScopeId::ROOT, || f(signals, &ctx));
        drive_dom(&mut self.dom);
        out
    }

    /// Read the live state without firing anything.
    pub fn inspect<T>(&self, f: impl FnOnce(WizardSignals) -> T) -> T {
        let signals = (*self.handles.signals.borrow()).expect("signals registered");
        self.dom.in_scope(ScopeId::ROOT, || f(signals))
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Builds a session named "Mia" with the given medicines, then jumps to `page`.
///
/// # Panics
///
/// Panics if a medicine is rejected or the page index is invalid.
pub fn session_on(page: usize, medicines: &[(&str, Option<AdherenceChoice>)]) -> Session {
    let mut session = Session::new(fixed_now());
    session.set_name("Mia");
    for (name, choice) in medicines {
        session.add_medicine(name).expect("add medicine");
        if let Some(choice) = choice {
            session.set_adherence(name, *choice).expect("set adherence");
        }
    }
    session.go_to(page).expect("go to page");
    session
}

pub fn setup_view_harness(session: Session) -> ViewHarness {
    setup_view_harness_with(session, WizardConfig::default())
}

pub fn setup_view_harness_with(session: Session, config: WizardConfig) -> ViewHarness {
    let app = Arc::new(TestApp {
        clock: fixed_clock(),
        config,
        content: Arc::new(ContentService::new()),
    });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            session,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

/// Render a session straight to HTML.
pub fn render_session(session: Session) -> String {
    let mut harness = setup_view_harness(session);
    harness.rebuild();
    harness.render()
}
