//! Data persistence layer for kinform
//!
//! This module provides SQLite-backed local storage and the persisted models.

mod database;
mod local_storage;
mod migrations;
mod models;

pub use database::{Database, DatabaseError};
pub use local_storage::{read_json, write_json, KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use models::{Relation, RelativeRecord, UserDetails};
