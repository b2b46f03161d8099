use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session store file, relative to the config directory
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.session_file cannot be empty"));
        }

        // Keep the store inside the config dir
        if Path::new(&self.session_file).is_absolute() || self.session_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.session_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
