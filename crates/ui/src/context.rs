use std::sync::Arc;

use medisia_core::Clock;
use services::{ContentService, WizardService};

/// Startup knobs resolved by the binary from flags and environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Prefilled value for the name field on the welcome page.
    pub initial_name: Option<String>,
}

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn config(&self) -> WizardConfig;

    fn content(&self) -> Arc<ContentService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    config: WizardConfig,
    content: Arc<ContentService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            config: app.config(),
            content: app.content(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }

    /// A fresh walk-through with the configured name already filled in.
    #[must_use]
    pub fn start_wizard(&self) -> WizardService {
        let mut wizard = WizardService::new(self.clock);
        self.prefill(&mut wizard);
        wizard
    }

    /// Reset an existing walk-through; the configured name is filled in again.
    pub fn restart_wizard(&self, wizard: &mut WizardService) {
        wizard.reset();
        self.prefill(wizard);
    }

    fn prefill(&self, wizard: &mut WizardService) {
        if let Some(name) = self.config.initial_name.as_deref() {
            wizard.set_name(name);
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
