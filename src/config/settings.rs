use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::Relation;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Local storage keys
    pub storage: StorageKeys,
    /// Relatives form defaults
    pub form: FormConfig,
}

/// Keys under which form state is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub user_details_key: String,
    pub relatives_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Relation of the single record a fresh session starts with
    pub initial_relation: Relation,
    /// Relation of records created by "add relative"
    pub added_relation: Relation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageKeys {
                user_details_key: "userDetails".into(),
                relatives_key: "relativesDetails".into(),
            },
            form: FormConfig {
                initial_relation: Relation::Father,
                added_relation: Relation::Brother,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub user_details_key: Option<String>,
    pub relatives_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlFormConfig {
    pub initial_relation: Option<Relation>,
    pub added_relation: Option<Relation>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub form: Option<TomlFormConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, merging with defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
                return Config::default();
            }
        };

        match Self::parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Config::default()
            }
        }
    }

    /// Parse TOML contents on top of the defaults
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();

        if let Some(storage) = toml_config.storage {
            if let Some(key) = storage.user_details_key {
                config.storage.user_details_key = key;
            }
            if let Some(key) = storage.relatives_key {
                config.storage.relatives_key = key;
            }
        }

        if let Some(form) = toml_config.form {
            if let Some(relation) = form.initial_relation {
                config.form.initial_relation = relation;
            }
            if let Some(relation) = form.added_relation {
                config.form.added_relation = relation;
            }
        }

        Ok(config)
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
