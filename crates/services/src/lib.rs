#![forbid(unsafe_code)]

pub mod content_service;
pub mod wizard_service;

pub use medisia_core::{Clock, WizardError};

pub use content_service::{ContentService, DEFAULT_QUOTE_COUNT, pick_distinct};
pub use wizard_service::WizardService;
