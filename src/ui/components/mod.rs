mod alert_dialog;
mod dialog;
mod relative_list;
mod summary_dialog;
mod text_input;

pub use alert_dialog::{AlertDialog, AlertDialogState};
pub use dialog::{DialogFrame, InstructionBar};
pub use relative_list::RelativeList;
pub use summary_dialog::SummaryDialog;
pub use text_input::TextInputState;
