use medisia_core::model::{DailySummary, MedicineName};

use crate::vm::time_fmt::format_day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub day_label: String,
    pub has_medicines: bool,
    pub all_taken: bool,
    pub taken: Vec<String>,
    pub not_taken: Vec<String>,
    pub unanswered: Vec<String>,
}

impl SummaryVm {
    /// Shown under "Medicines Taken" when the list is empty.
    #[must_use]
    pub fn taken_placeholder(&self) -> Option<&'static str> {
        self.taken.is_empty().then_some("None yet!")
    }

    /// Shown under "Medicines Not Taken" when the list is empty.
    #[must_use]
    pub fn not_taken_placeholder(&self) -> Option<&'static str> {
        self.all_taken.then_some("You've taken all your medicines! 🌟")
    }
}

fn names(list: &[MedicineName]) -> Vec<String> {
    list.iter().map(|m| m.as_str().to_owned()).collect()
}

#[must_use]
pub fn map_summary(summary: &DailySummary) -> SummaryVm {
    SummaryVm {
        day_label: format_day(summary.day()),
        has_medicines: !summary.is_empty(),
        all_taken: summary.all_taken(),
        taken: names(summary.taken()),
        not_taken: names(summary.not_taken()),
        unanswered: names(summary.unset()),
    }
}
