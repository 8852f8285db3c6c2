mod notice_vm;
mod progress_vm;
mod summary_vm;
mod time_fmt;
mod tracker_vm;

pub use notice_vm::{Notice, NoticeKind};
pub use progress_vm::{ProgressStepVm, StepState, map_progress_steps};
pub use summary_vm::{SummaryVm, map_summary};
pub use time_fmt::format_day;
pub use tracker_vm::{TrackerRowVm, map_tracker_rows};
