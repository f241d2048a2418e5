//! Blocking user-facing notifications

use std::fmt;

/// A notification the user must acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submit attempted before the user-details step was saved
    SaveUserDetailsFirst,
    /// Submit attempted while at least one relative is invalid
    CheckFieldsForErrors,
    /// Local storage rejected a read or write
    StorageFailure(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::SaveUserDetailsFirst => "User Details Missing",
            Notice::CheckFieldsForErrors => "Invalid Relatives",
            Notice::StorageFailure(_) => "Storage Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::SaveUserDetailsFirst => {
                "Please go to users page and save user details before saving relative details"
                    .to_string()
            }
            Notice::CheckFieldsForErrors => "Please check all fields for error".to_string(),
            Notice::StorageFailure(reason) => format!("Could not save form data: {reason}"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Delivers notices to whoever presents them
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice),
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Notifier that only logs; used where no UI is attached
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(notice = %notice, "User notice");
    }
}
