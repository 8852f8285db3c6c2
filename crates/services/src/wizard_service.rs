use tracing::{error, info, warn};

use medisia_core::model::{AdherenceChoice, DailySummary, MedicineName, Page, Session};
use medisia_core::{Clock, WizardError};

/// Owns the walk-through for one user and logs every transition.
///
/// All state lives in the wrapped [`Session`]; this layer adds the clock and
/// structured logging so the core stays free of I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardService {
    clock: Clock,
    session: Session,
}

impl WizardService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let session = Session::new(clock.now());
        info!(session_id = %session.id(), "session started");
        Self { clock, session }
    }

    /// Resume from an existing session, e.g. one prepared by a test.
    #[must_use]
    pub fn from_session(clock: Clock, session: Session) -> Self {
        Self { clock, session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.session.page()
    }

    pub fn set_name(&mut self, name: &str) {
        self.session.set_name(name);
    }

    /// # Errors
    ///
    /// See [`Session::advance`].
    pub fn advance(&mut self) -> Result<Page, WizardError> {
        let from = self.session.page();
        self.session
            .advance()
            .inspect(|to| self.log_transition(from, *to))
            .inspect_err(|err| self.log_rejected("advance", err))
    }

    pub fn retreat(&mut self) -> Page {
        let from = self.session.page();
        let to = self.session.retreat();
        if from != to {
            self.log_transition(from, to);
        }
        to
    }

    /// # Errors
    ///
    /// See [`Session::go_to`].
    pub fn go_to(&mut self, index: usize) -> Result<Page, WizardError> {
        let from = self.session.page();
        self.session
            .go_to(index)
            .inspect(|to| self.log_transition(from, *to))
            .inspect_err(|err| self.log_rejected("go_to", err))
    }

    /// # Errors
    ///
    /// See [`Session::add_medicine`].
    pub fn add_medicine(&mut self, raw: &str) -> Result<MedicineName, WizardError> {
        let result = self.session.add_medicine(raw);
        match &result {
            Ok(name) => info!(
                session_id = %self.session.id(),
                medicine = %name,
                count = self.session.medicines().len(),
                "medicine added"
            ),
            Err(err) => self.log_rejected("add_medicine", err),
        }
        result
    }

    /// # Errors
    ///
    /// Returns `WizardError::UnknownMedicine` if the medicine is not listed.
    pub fn set_adherence(&mut self, name: &str, choice: AdherenceChoice) -> Result<(), WizardError> {
        self.session
            .set_adherence(name, choice)
            .inspect(|_| {
                info!(
                    session_id = %self.session.id(),
                    medicine = name,
                    choice = ?choice,
                    "adherence recorded"
                );
            })
            .inspect_err(|err| {
                error!(
                    session_id = %self.session.id(),
                    medicine = name,
                    %err,
                    "adherence update for a medicine that is not listed"
                );
            })
    }

    /// Start over with a new session stamped by the clock.
    pub fn reset(&mut self) {
        let previous = self.session.id();
        self.session.reset(self.clock.now());
        info!(
            previous_session_id = %previous,
            session_id = %self.session.id(),
            "session reset"
        );
    }

    #[must_use]
    pub fn summarize(&self) -> DailySummary {
        self.session.summarize()
    }

    fn log_transition(&self, from: Page, to: Page) {
        info!(
            session_id = %self.session.id(),
            from = from.slug(),
            to = to.slug(),
            "page changed"
        );
    }

    fn log_rejected(&self, op: &'static str, err: &WizardError) {
        warn!(
            session_id = %self.session.id(),
            page = self.session.page().slug(),
            op,
            %err,
            "operation rejected"
        );
    }
}
