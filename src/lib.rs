pub mod config;
pub mod core;
pub mod data;
pub mod ui;
pub mod util;

pub use config::Config;
pub use crate::core::{
    Notice, Notifier, RelativeListManager, RelativesSnapshot, SubmitOutcome, Summary,
    UserDetailsForm, UserDetailsInput,
};
pub use data::{Database, KeyValueStore, MemoryStore, Relation, RelativeRecord, SqliteStore, UserDetails};
pub use ui::App;
