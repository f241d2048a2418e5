//! Form logic shared by the TUI and the CLI commands:
//! - the relatives list and its submit rules
//! - the user-details step
//! - user-facing notices

mod notice;
mod relatives;
mod user_details;

pub use notice::{LogNotifier, Notice, Notifier};
pub use relatives::{
    ChangeListener, RelativeListManager, RelativesSnapshot, SubmitOutcome, Summary,
};
pub use user_details::{UserDetailsError, UserDetailsForm, UserDetailsInput};
