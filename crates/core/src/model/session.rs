use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::WizardError;
use crate::model::{Adherence, AdherenceChoice, DailySummary, MedicineName, Page, SessionId};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's walk-through: the current page plus everything entered so far.
///
/// Failed operations never modify the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    page: Page,
    name: String,
    medicines: Vec<MedicineName>,
    adherence: HashMap<MedicineName, Adherence>,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a fresh walk-through on the welcome page.
    ///
    /// `started_at` should come from the caller's clock.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            page: Page::Welcome,
            name: String::new(),
            medicines: Vec::new(),
            adherence: HashMap::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page.index()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn medicines(&self) -> &[MedicineName] {
        &self.medicines
    }

    #[must_use]
    pub fn adherence(&self) -> &HashMap<MedicineName, Adherence> {
        &self.adherence
    }

    /// Adherence recorded for `name`, or `None` if the medicine was never added.
    #[must_use]
    pub fn adherence_of(&self, name: &str) -> Option<Adherence> {
        self.medicines
            .iter()
            .find(|m| m.as_str() == name)
            .and_then(|m| self.adherence.get(m).copied())
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// True once the thank-you page is reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.page.is_last()
    }

    /// Store the user's name, trimmed. Emptiness is only checked by [`Self::advance`].
    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_owned();
    }

    /// Move one page forward.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::EmptyName` when leaving the welcome page without a name.
    /// Returns `WizardError::AtLastPage` on the thank-you page.
    pub fn advance(&mut self) -> Result<Page, WizardError> {
        if self.page.is_first() && self.name.is_empty() {
            return Err(WizardError::EmptyName);
        }
        let next = self.page.next().ok_or(WizardError::AtLastPage)?;
        self.page = next;
        Ok(next)
    }

    /// Move one page back. Stays on the welcome page instead of underflowing.
    pub fn retreat(&mut self) -> Page {
        if let Some(previous) = self.page.previous() {
            self.page = previous;
        }
        self.page
    }

    /// Jump straight to a page by index.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::PageOutOfRange` for indices past the last page.
    /// Returns `WizardError::EmptyName` when jumping past the welcome page without a name.
    pub fn go_to(&mut self, index: usize) -> Result<Page, WizardError> {
        let target = Page::from_index(index).ok_or(WizardError::PageOutOfRange { index })?;
        if !target.is_first() && self.name.is_empty() {
            return Err(WizardError::EmptyName);
        }
        self.page = target;
        Ok(target)
    }

    /// Append a medicine to the list with no adherence answer yet.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::EmptyMedicine` for blank input.
    /// Returns `WizardError::DuplicateMedicine` if the trimmed name is already listed.
    pub fn add_medicine(&mut self, raw: &str) -> Result<MedicineName, WizardError> {
        let name = MedicineName::parse(raw)?;
        if self.adherence.contains_key(&name) {
            return Err(WizardError::DuplicateMedicine {
                name: name.as_str().to_owned(),
            });
        }
        self.medicines.push(name.clone());
        self.adherence.insert(name.clone(), Adherence::Unset);
        Ok(name)
    }

    /// Record whether a listed medicine was taken.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownMedicine` if `name` was never added. The
    /// pages only offer listed medicines, so this indicates a caller bug.
    pub fn set_adherence(&mut self, name: &str, choice: AdherenceChoice) -> Result<(), WizardError> {
        let slot = self
            .adherence
            .iter_mut()
            .find_map(|(key, value)| (key.as_str() == name).then_some(value))
            .ok_or_else(|| WizardError::UnknownMedicine {
                name: name.to_owned(),
            })?;
        *slot = choice.into();
        Ok(())
    }

    /// Discard everything and start over on the welcome page.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        *self = Self::new(started_at);
    }

    /// Split the medicine list by adherence, keeping insertion order.
    #[must_use]
    pub fn summarize(&self) -> DailySummary {
        DailySummary::partition(
            self.started_at.date_naive(),
            self.medicines.iter().map(|m| {
                let adherence = self.adherence.get(m).copied().unwrap_or_default();
                (m, adherence)
            }),
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
