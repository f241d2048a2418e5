//! Data models for user and relative details

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relation of a relative to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Relation {
    Father,
    Mother,
    Sister,
    Brother,
}

impl Relation {
    /// All options, in display order
    pub const ALL: [Relation; 4] = [
        Relation::Father,
        Relation::Mother,
        Relation::Sister,
        Relation::Brother,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Father => "Father",
            Relation::Mother => "Mother",
            Relation::Sister => "Sister",
            Relation::Brother => "Brother",
        }
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown relation: {s}"))
    }
}

/// One relative entry in the relatives form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelativeRecord {
    /// Correlation key for edit/delete, stable for the record's lifetime
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub relation: Relation,
    /// Derived on every edit; never trusted from the caller
    pub is_valid: bool,
}

impl RelativeRecord {
    /// Create an empty, invalid record with a fresh id
    pub fn new(relation: Relation) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            relation,
            is_valid: false,
        }
    }

    /// Whether both names are present
    pub fn has_names(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }
}

/// Details saved by the user-details step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_details: u64,
}
