//! YAML run configuration for the interactive shell.
//!
//! Everything has a default, so a missing or partial file still yields a
//! working configuration; validation catches the invariants serde cannot
//! express.
//!
//! ## Example
//!
//! ```yaml
//! database:
//!   path: "database.txt"
//!   delimiter: ";"
//!
//! display:
//!   dump_table: true
//!   max_rows: 0   # 0 = unlimited
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a run configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Source-file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the delimited source file.
    pub path: String,
    /// Field delimiter; must be exactly one character.
    pub delimiter: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "database.txt".to_string(),
            delimiter: ";".to_string(),
        }
    }
}

/// Startup display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Dump the sorted directory as a table after loading.
    pub dump_table: bool,
    /// Maximum table rows to print; 0 means unlimited.
    pub max_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dump_table: true,
            max_rows: 0,
        }
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
}

impl RunConfig {
    /// Load and validate a YAML configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        let text = fs::read_to_string(path)?;
        let config: RunConfig = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "database.path must not be empty".into(),
            ));
        }
        if self.database.delimiter.chars().count() != 1 {
            return Err(ConfigLoadError::Validation(
                "database.delimiter must be exactly one character".into(),
            ));
        }
        Ok(())
    }

    /// The delimiter as a `char`; falls back to `;` if called on a config
    /// that failed validation.
    pub fn delimiter_char(&self) -> char {
        self.database.delimiter.chars().next().unwrap_or(';')
    }
}
