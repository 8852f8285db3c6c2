use medisia_core::model::{AdherenceChoice, Session};

/// One radio group on the tracker page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerRowVm {
    pub name: String,
    /// Radio group name, unique per row.
    pub group: String,
    /// False until the user picks Yes or No for this row.
    pub answered: bool,
    /// What the radio shows. Unanswered rows show "No" without recording it.
    pub displayed: AdherenceChoice,
}

impl TrackerRowVm {
    #[must_use]
    pub fn is_displayed(&self, choice: AdherenceChoice) -> bool {
        self.displayed == choice
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.answered {
            "tracker-row"
        } else {
            "tracker-row tracker-row--unanswered"
        }
    }
}

#[must_use]
pub fn map_tracker_rows(session: &Session) -> Vec<TrackerRowVm> {
    session
        .medicines()
        .iter()
        .enumerate()
        .map(|(i, medicine)| {
            let recorded = session.adherence_of(medicine.as_str()).unwrap_or_default();
            TrackerRowVm {
                name: medicine.as_str().to_owned(),
                group: format!("adherence-{i}"),
                answered: recorded.is_answered(),
                displayed: recorded.choice().unwrap_or(AdherenceChoice::NotTaken),
            }
        })
        .collect()
}
