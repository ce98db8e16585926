//! Persistent CLI configuration, kept as `cli-config.json` in the user's
//! config directory.

use std::path::PathBuf;

use callrec_core::format::Locale;
use callrec_core::store::{FileStore, KeyValueStore};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const CONFIG_KEY: &str = "cli-config";
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

const fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            store_dir: None,
            locale: None,
        }
    }
}

/// Store holding the CLI config under the platform config directory
pub fn config_store() -> Result<FileStore, CliError> {
    dirs::config_dir()
        .map(|dir| FileStore::new(dir.join("callrec")))
        .ok_or_else(|| CliError::Config("Failed to resolve CLI config directory".to_string()))
}

pub fn config_path(store: &FileStore) -> Result<PathBuf, CliError> {
    Ok(store.path_for(CONFIG_KEY)?)
}

impl CliConfig {
    pub fn load() -> Result<Self, CliError> {
        Self::load_from(&config_store()?)
    }

    /// Read the config from `store`; an absent entry yields the defaults
    pub fn load_from(store: &impl KeyValueStore) -> Result<Self, CliError> {
        let Some(raw) = store.get(CONFIG_KEY)? else {
            return Ok(Self::default());
        };

        let mut config: Self = serde_json::from_str(&raw)
            .map_err(|error| CliError::Config(format!("Unreadable {CONFIG_KEY}.json: {error}")))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to(&self, store: &impl KeyValueStore) -> Result<(), CliError> {
        let mut normalized = self.clone();
        normalized.normalize();
        store.put(CONFIG_KEY, &serde_json::to_string_pretty(&normalized)?)?;
        Ok(())
    }

    fn normalize(&mut self) {
        if self.version == 0 {
            self.version = CURRENT_VERSION;
        }
        if self
            .store_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            self.store_dir = None;
        }
    }
}
