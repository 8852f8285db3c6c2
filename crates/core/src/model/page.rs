use serde::{Deserialize, Serialize};

/// The seven fixed steps of the walk-through, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Welcome,
    AddMedicines,
    Tracker,
    Wellness,
    Quotes,
    Summary,
    ThankYou,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Welcome,
        Page::AddMedicines,
        Page::Tracker,
        Page::Wellness,
        Page::Quotes,
        Page::Summary,
        Page::ThankYou,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of the page.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a page by position. Out-of-range indices return `None`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following page, or `None` on the last one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding page, or `None` on the first one.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Page::Welcome)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Page::ThankYou)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome",
            Page::AddMedicines => "Add Medicines",
            Page::Tracker => "Medicine Tracker",
            Page::Wellness => "Wellness Reminder",
            Page::Quotes => "Motivational Quotes",
            Page::Summary => "Summary of Your Day",
            Page::ThankYou => "Thank You",
        }
    }

    /// Stable kebab-case key, used for CSS hooks.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Welcome => "welcome",
            Page::AddMedicines => "add-medicines",
            Page::Tracker => "tracker",
            Page::Wellness => "wellness",
            Page::Quotes => "quotes",
            Page::Summary => "summary",
            Page::ThankYou => "thank-you",
        }
    }
}
