use medisia_core::WizardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

/// A one-line message shown above the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Warning => "notice notice--warning",
        }
    }
}

impl From<&WizardError> for Notice {
    fn from(err: &WizardError) -> Self {
        match err {
            WizardError::EmptyName => Self::warning("Please enter your name before continuing 💬"),
            WizardError::EmptyMedicine => Self::warning("Please enter a valid medicine name!"),
            WizardError::DuplicateMedicine { .. } => {
                Self::warning("⚠️ This medicine is already added.")
            }
            WizardError::AtLastPage => Self::info("You're already on the last page."),
            _ => Self::warning("Something went wrong. Please try again."),
        }
    }
}
