//! The relatives list: record lifecycle, validity and persistence on submit.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{Config, StorageKeys};
use crate::core::notice::{Notice, Notifier};
use crate::data::{read_json, write_json, KeyValueStore, Relation, RelativeRecord, UserDetails};

/// State handed to listeners after every command that changes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativesSnapshot {
    pub relatives: Vec<RelativeRecord>,
    pub summary_open: bool,
}

/// Read-only view shown after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub user: Option<UserDetails>,
    pub relatives: Vec<RelativeRecord>,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Relatives written to storage, summary opened
    Saved,
    /// No user details in storage
    MissingUserDetails,
    /// At least one record is not valid
    InvalidRecords,
    /// Storage rejected the read or write
    StorageFailed,
}

pub type ChangeListener = Box<dyn FnMut(&RelativesSnapshot) + Send>;

/// Owns the ordered list of relatives and applies form commands to it.
///
/// The list is never empty. Commands that do not apply (unknown id, deleting
/// the last record) are silent no-ops; submit failures surface as notices.
pub struct RelativeListManager {
    relatives: Vec<RelativeRecord>,
    summary_open: bool,
    store: Arc<dyn KeyValueStore>,
    notifier: Box<dyn Notifier + Send>,
    listeners: Vec<ChangeListener>,
    keys: StorageKeys,
    added_relation: Relation,
}

impl RelativeListManager {
    /// Load saved relatives from the store, or start with one empty record
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        notifier: Box<dyn Notifier + Send>,
        config: &Config,
    ) -> Self {
        let keys = config.storage.clone();
        let saved = match read_json::<Vec<RelativeRecord>>(store.as_ref(), &keys.relatives_key) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(key = %keys.relatives_key, error = %e, "Ignoring saved relatives");
                None
            }
        };

        let relatives = match saved {
            Some(relatives) if !relatives.is_empty() => {
                tracing::debug!(count = relatives.len(), "Loaded saved relatives");
                relatives
            }
            _ => vec![RelativeRecord::new(config.form.initial_relation)],
        };

        Self {
            relatives,
            summary_open: false,
            store,
            notifier,
            listeners: Vec::new(),
            keys,
            added_relation: config.form.added_relation,
        }
    }

    /// Register a listener for state changes
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn relatives(&self) -> &[RelativeRecord] {
        &self.relatives
    }

    pub fn get(&self, id: Uuid) -> Option<&RelativeRecord> {
        self.relatives.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.relatives.len()
    }

    /// Never true for a loaded manager
    pub fn is_empty(&self) -> bool {
        self.relatives.is_empty()
    }

    pub fn is_summary_open(&self) -> bool {
        self.summary_open
    }

    pub fn snapshot(&self) -> RelativesSnapshot {
        RelativesSnapshot {
            relatives: self.relatives.clone(),
            summary_open: self.summary_open,
        }
    }

    /// Append an empty record and return its id
    pub fn add(&mut self) -> Uuid {
        let record = RelativeRecord::new(self.added_relation);
        let id = record.id;
        self.relatives.push(record);
        tracing::debug!(id = %id, count = self.relatives.len(), "Relative added");
        self.emit();
        id
    }

    /// Replace the record with the same id.
    ///
    /// Validity is decided by the *stored* entry: if it already had both names
    /// the replacement is valid, otherwise it is invalid. The incoming
    /// `is_valid` is ignored.
    pub fn edit(&mut self, record: RelativeRecord) {
        let Some(entry) = self.relatives.iter_mut().find(|r| r.id == record.id) else {
            tracing::debug!(id = %record.id, "Edit ignored: unknown relative");
            return;
        };

        let is_valid = entry.has_names();
        *entry = RelativeRecord { is_valid, ..record };
        self.emit();
    }

    /// Edit by id with field values, keeping the id as the correlation key
    pub fn edit_fields(
        &mut self,
        id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        relation: Relation,
    ) {
        self.edit(RelativeRecord {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            relation,
            is_valid: false,
        });
    }

    /// Remove a record unless it is the last one
    pub fn delete(&mut self, id: Uuid) {
        let remaining = self.relatives.iter().filter(|r| r.id != id).count();
        if remaining == self.relatives.len() {
            tracing::debug!(id = %id, "Delete ignored: unknown relative");
            return;
        }
        if remaining == 0 {
            tracing::debug!(id = %id, "Delete ignored: last relative");
            return;
        }

        self.relatives.retain(|r| r.id != id);
        self.emit();
    }

    /// Persist the list if user details exist and every record is valid
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.store.get(&self.keys.user_details_key) {
            Ok(Some(raw)) if !raw.is_empty() => {}
            Ok(_) => {
                self.notifier.notify(Notice::SaveUserDetailsFirst);
                return SubmitOutcome::MissingUserDetails;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read user details");
                self.notifier.notify(Notice::StorageFailure(e.to_string()));
                return SubmitOutcome::StorageFailed;
            }
        }

        if self.relatives.iter().any(|r| !r.is_valid) {
            self.notifier.notify(Notice::CheckFieldsForErrors);
            return SubmitOutcome::InvalidRecords;
        }

        if let Err(e) = write_json(
            self.store.as_ref(),
            &self.keys.relatives_key,
            &self.relatives,
        ) {
            tracing::error!(error = %e, "Failed to save relatives");
            self.notifier.notify(Notice::StorageFailure(e.to_string()));
            return SubmitOutcome::StorageFailed;
        }

        tracing::info!(count = self.relatives.len(), "Relatives saved");
        self.summary_open = true;
        self.emit();
        SubmitOutcome::Saved
    }

    pub fn close_summary(&mut self) {
        if self.summary_open {
            self.summary_open = false;
            self.emit();
        }
    }

    /// Saved user details alongside the current relatives
    pub fn summary(&self) -> Summary {
        let user = read_json::<UserDetails>(self.store.as_ref(), &self.keys.user_details_key)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Saved user details unreadable");
                None
            });
        Summary {
            user,
            relatives: self.relatives.clone(),
        }
    }

    fn emit(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
