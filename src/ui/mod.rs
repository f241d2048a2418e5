pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod form_state;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::AppEvent;
pub use form_state::{FormField, RelativeFormState};
