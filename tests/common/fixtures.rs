//! Store fixtures

use std::sync::Arc;

use kinform::{KeyValueStore, MemoryStore};

pub const USER_JSON: &str = r#"{"firstName":"Grace","lastName":"Hopper","email":"grace@navy.mil","contactDetails":5551234}"#;

/// Empty in-memory store
pub fn empty_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// In-memory store with user details already saved
pub fn store_with_user() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store
        .set("userDetails", USER_JSON)
        .expect("memory store write");
    Arc::new(store)
}
