use medisia_core::model::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStepVm {
    pub index: usize,
    pub title: &'static str,
    pub state: StepState,
}

impl ProgressStepVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            StepState::Done => "progress-step progress-step--done",
            StepState::Current => "progress-step progress-step--current",
            StepState::Upcoming => "progress-step",
        }
    }
}

#[must_use]
pub fn map_progress_steps(current: Page) -> Vec<ProgressStepVm> {
    Page::ALL
        .iter()
        .map(|page| ProgressStepVm {
            index: page.index(),
            title: page.title(),
            state: match page.cmp(&current) {
                std::cmp::Ordering::Less => StepState::Done,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
        .collect()
}
