use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Adherence, MedicineName};

/// End-of-day view of the medicine list, split by adherence.
///
/// Each bucket keeps the order in which medicines were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    day: NaiveDate,
    taken: Vec<MedicineName>,
    not_taken: Vec<MedicineName>,
    unset: Vec<MedicineName>,
}

impl DailySummary {
    /// Partition `(medicine, adherence)` pairs into the three buckets.
    pub fn partition<'a>(
        day: NaiveDate,
        entries: impl IntoIterator<Item = (&'a MedicineName, Adherence)>,
    ) -> Self {
        let mut taken = Vec::new();
        let mut not_taken = Vec::new();
        let mut unset = Vec::new();

        for (name, adherence) in entries {
            let bucket = match adherence {
                Adherence::Taken => &mut taken,
                Adherence::NotTaken => &mut not_taken,
                Adherence::Unset => &mut unset,
            };
            bucket.push(name.clone());
        }

        Self {
            day,
            taken,
            not_taken,
            unset,
        }
    }

    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    #[must_use]
    pub fn taken(&self) -> &[MedicineName] {
        &self.taken
    }

    #[must_use]
    pub fn not_taken(&self) -> &[MedicineName] {
        &self.not_taken
    }

    /// Medicines that were never answered on the tracker page.
    #[must_use]
    pub fn unset(&self) -> &[MedicineName] {
        &self.unset
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.taken.len() + self.not_taken.len() + self.unset.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// True when there is at least one medicine and every one was taken.
    #[must_use]
    pub fn all_taken(&self) -> bool {
        !self.is_empty() && self.taken.len() == self.total()
    }
}
