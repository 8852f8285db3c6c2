use serde::{Deserialize, Serialize};

/// Whether a medicine was taken today.
///
/// `Unset` means the question was never answered, which is not the same as
/// answering "No".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adherence {
    Taken,
    NotTaken,
    #[default]
    Unset,
}

impl Adherence {
    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// The recorded answer, if any.
    #[must_use]
    pub fn choice(self) -> Option<AdherenceChoice> {
        match self {
            Self::Taken => Some(AdherenceChoice::Taken),
            Self::NotTaken => Some(AdherenceChoice::NotTaken),
            Self::Unset => None,
        }
    }
}

/// An explicit answer on the tracker page. There is no way to go back to
/// `Unset` other than restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceChoice {
    Taken,
    NotTaken,
}

impl AdherenceChoice {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Taken => "Yes",
            Self::NotTaken => "No",
        }
    }
}

impl From<AdherenceChoice> for Adherence {
    fn from(choice: AdherenceChoice) -> Self {
        match choice {
            AdherenceChoice::Taken => Self::Taken,
            AdherenceChoice::NotTaken => Self::NotTaken,
        }
    }
}
