mod settings;

pub use settings::{Config, FormConfig, StorageKeys, EXAMPLE_CONFIG};
