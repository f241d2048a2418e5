use crate::core::{Notice, RelativesSnapshot};

/// Events fed back into the app loop by the form logic
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The relatives list or summary flag changed
    Changed(RelativesSnapshot),

    /// A notice the user must dismiss
    Notice(Notice),
}
