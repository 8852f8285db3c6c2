mod actions;
mod components;
mod medicines;
mod quotes;
mod state;
mod summary;
mod thank_you;
mod tracker;
mod welcome;
mod wellness;
mod wizard;

pub(crate) use actions::jump_to;
pub use medicines::AddMedicinesView;
pub use quotes::QuotesView;
pub use state::{WizardSignals, use_wizard, use_wizard_provider};
pub use summary::SummaryView;
pub use thank_you::ThankYouView;
pub use tracker::TrackerView;
pub use welcome::WelcomeView;
pub use wellness::WellnessView;
pub use wizard::WizardView;

#[cfg(test)]
mod action_smoke;
#[cfg(test)]
mod test_harness;
