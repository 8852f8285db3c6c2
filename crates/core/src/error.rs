use thiserror::Error;

use crate::model::MedicineNameError;

/// Validation signals returned by the walk-through operations.
///
/// None of these are fatal: the session is left unchanged and the UI shows a
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("please enter your name before continuing")]
    EmptyName,

    #[error("please enter a valid medicine name")]
    EmptyMedicine,

    #[error("medicine already added: {name}")]
    DuplicateMedicine { name: String },

    #[error("unknown medicine: {name}")]
    UnknownMedicine { name: String },

    #[error("already on the last page")]
    AtLastPage,

    #[error("page index out of range: {index}")]
    PageOutOfRange { index: usize },
}

impl From<MedicineNameError> for WizardError {
    fn from(err: MedicineNameError) -> Self {
        match err {
            MedicineNameError::Empty => Self::EmptyMedicine,
        }
    }
}
