//! Selection and field-editing state for the relatives form

use uuid::Uuid;

use crate::core::RelativesSnapshot;
use crate::data::{Relation, RelativeRecord};
use crate::ui::components::TextInputState;

/// Field of the expanded record that receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Relation,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::FirstName => FormField::LastName,
            FormField::LastName => FormField::Relation,
            FormField::Relation => FormField::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::FirstName => FormField::Relation,
            FormField::LastName => FormField::FirstName,
            FormField::Relation => FormField::LastName,
        }
    }
}

/// Which record is expanded and the in-progress field values for it
#[derive(Debug, Clone)]
pub struct RelativeFormState {
    selected: usize,
    selected_id: Option<Uuid>,
    pub focus: FormField,
    pub first_name: TextInputState,
    pub last_name: TextInputState,
    pub relation: Relation,
    /// Set once the user asked to check the record
    pub show_errors: bool,
}

impl RelativeFormState {
    pub fn new(snapshot: &RelativesSnapshot) -> Self {
        let mut state = Self {
            selected: 0,
            selected_id: None,
            focus: FormField::FirstName,
            first_name: TextInputState::new(),
            last_name: TextInputState::new(),
            relation: Relation::Father,
            show_errors: false,
        };
        state.sync(snapshot);
        state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected_id
    }

    /// Follow the selected record through list changes.
    ///
    /// Field values are only reloaded when the selection moves to another
    /// record, so in-progress input is kept across edits.
    pub fn sync(&mut self, snapshot: &RelativesSnapshot) {
        if snapshot.relatives.is_empty() {
            return;
        }

        if let Some(pos) = self
            .selected_id
            .and_then(|id| snapshot.relatives.iter().position(|r| r.id == id))
        {
            self.selected = pos;
            return;
        }

        let index = self.selected.min(snapshot.relatives.len() - 1);
        self.select(index, snapshot);
    }

    /// Expand the record at `index` and load its fields
    pub fn select(&mut self, index: usize, snapshot: &RelativesSnapshot) {
        let Some(record) = snapshot.relatives.get(index) else {
            return;
        };
        self.selected = index;
        self.load(record);
    }

    pub fn select_id(&mut self, id: Uuid, snapshot: &RelativesSnapshot) {
        if let Some(index) = snapshot.relatives.iter().position(|r| r.id == id) {
            self.select(index, snapshot);
        }
    }

    pub fn select_next(&mut self, snapshot: &RelativesSnapshot) {
        if self.selected + 1 < snapshot.relatives.len() {
            self.select(self.selected + 1, snapshot);
        }
    }

    pub fn select_prev(&mut self, snapshot: &RelativesSnapshot) {
        if self.selected > 0 {
            self.select(self.selected - 1, snapshot);
        }
    }

    fn load(&mut self, record: &RelativeRecord) {
        self.selected_id = Some(record.id);
        self.first_name.set(&record.first_name);
        self.last_name.set(&record.last_name);
        self.relation = record.relation;
        self.focus = FormField::FirstName;
        self.show_errors = false;
    }

    /// The text input that has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            FormField::FirstName => Some(&mut self.first_name),
            FormField::LastName => Some(&mut self.last_name),
            FormField::Relation => None,
        }
    }

    /// The record as currently typed, ready to dispatch as an edit
    pub fn draft(&self) -> Option<RelativeRecord> {
        let id = self.selected_id?;
        Some(RelativeRecord {
            id,
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            relation: self.relation,
            is_valid: false,
        })
    }
}
