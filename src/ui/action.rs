//! Actions that can be triggered by keys
//!
//! Each action represents a single, atomic operation in the form UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All form UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ========== Global ==========
    Quit,
    /// Close the visible alert or summary
    Dismiss,
    ScrollUp,
    ScrollDown,

    // ========== Relatives ==========
    AddRelative,
    DeleteRelative,
    Submit,
    /// Re-dispatch the typed fields and show required-field errors
    CheckRecord,
    SelectNext,
    SelectPrev,

    // ========== Fields ==========
    NextField,
    PrevField,
    NextOption,
    PrevOption,
    InsertChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
}

/// Where a key press lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// A text field of the expanded record
    TextField,
    /// The relation selector of the expanded record
    RelationField,
    /// An alert or the summary is on top
    Dialog,
}

impl Action {
    /// Map a key press to an action for the given context
    pub fn from_key(key: KeyEvent, context: KeyContext) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('a') if context != KeyContext::Dialog => Some(Action::AddRelative),
                KeyCode::Char('d') if context != KeyContext::Dialog => {
                    Some(Action::DeleteRelative)
                }
                KeyCode::Char('s') if context != KeyContext::Dialog => Some(Action::Submit),
                _ => None,
            };
        }

        if context == KeyContext::Dialog {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::Dismiss),
                KeyCode::Up => Some(Action::ScrollUp),
                KeyCode::Down => Some(Action::ScrollDown),
                _ => None,
            };
        }

        let common = match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::CheckRecord),
            _ => None,
        };
        if common.is_some() {
            return common;
        }

        match context {
            KeyContext::TextField => match key.code {
                KeyCode::Left => Some(Action::MoveCursorLeft),
                KeyCode::Right => Some(Action::MoveCursorRight),
                KeyCode::Home => Some(Action::MoveCursorStart),
                KeyCode::End => Some(Action::MoveCursorEnd),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Delete => Some(Action::Delete),
                KeyCode::Char(c) => Some(Action::InsertChar(c)),
                _ => None,
            },
            KeyContext::RelationField => match key.code {
                KeyCode::Left => Some(Action::PrevOption),
                KeyCode::Right | KeyCode::Char(' ') => Some(Action::NextOption),
                _ => None,
            },
            KeyContext::Dialog => None,
        }
    }
}
