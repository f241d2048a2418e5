//! The user-details step that must be saved before relatives can be submitted.

use thiserror::Error;

use crate::config::StorageKeys;
use crate::data::{read_json, write_json, KeyValueStore, StoreError, UserDetails};

#[derive(Error, Debug)]
pub enum UserDetailsError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Contact details must be a phone number, got: {0}")]
    InvalidContact(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetailsInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_details: String,
}

impl UserDetailsInput {
    /// Check every field and build the record to store
    pub fn validate(&self) -> Result<UserDetails, UserDetailsError> {
        let first_name = required("First name", &self.first_name)?;
        let last_name = required("Last name", &self.last_name)?;
        let email = required("Email", &self.email)?;
        let contact = required("Contact details", &self.contact_details)?;

        if !is_plausible_email(email) {
            return Err(UserDetailsError::InvalidEmail(email.to_string()));
        }

        // Phone numbers are commonly typed with separators
        let digits: String = contact
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        let contact_details = digits
            .parse::<u64>()
            .map_err(|_| UserDetailsError::InvalidContact(contact.to_string()))?;

        Ok(UserDetails {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            contact_details,
        })
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, UserDetailsError> {
    let value = value.trim();
    if value.is_empty() {
        Err(UserDetailsError::MissingField(name))
    } else {
        Ok(value)
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// Reads and writes the user-details record
pub struct UserDetailsForm<'a> {
    store: &'a dyn KeyValueStore,
    keys: &'a StorageKeys,
}

impl<'a> UserDetailsForm<'a> {
    pub fn new(store: &'a dyn KeyValueStore, keys: &'a StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Validate and store the details, replacing any earlier record
    pub fn save(&self, input: &UserDetailsInput) -> Result<UserDetails, UserDetailsError> {
        let details = input.validate()?;
        write_json(self.store, &self.keys.user_details_key, &details)?;
        tracing::info!("User details saved");
        Ok(details)
    }

    pub fn load(&self) -> Result<Option<UserDetails>, UserDetailsError> {
        Ok(read_json(self.store, &self.keys.user_details_key)?)
    }
}
