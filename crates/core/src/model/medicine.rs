use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MedicineNameError {
    #[error("medicine name must not be empty")]
    Empty,
}

/// A trimmed, non-empty medicine name.
///
/// Comparison is exact and case-sensitive: "aspirin" and "Aspirin" are two
/// different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MedicineName(String);

impl MedicineName {
    /// # Errors
    ///
    /// Returns `MedicineNameError::Empty` if the input is blank after trimming.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, MedicineNameError> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MedicineNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MedicineName {
    type Error = MedicineNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MedicineName> for String {
    fn from(name: MedicineName) -> Self {
        name.0
    }
}

impl AsRef<str> for MedicineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MedicineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
