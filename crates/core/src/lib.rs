//! Domain model for the Medisia daily medication walk-through.
//!
//! Everything in this crate is pure: no I/O, no globals. The UI owns a
//! [`model::Session`] and drives it through the operations defined here.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;

pub use error::WizardError;
pub use time::Clock;
