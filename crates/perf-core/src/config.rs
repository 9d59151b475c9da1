//! Configuration shared by all row operations.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default table the operations run against.
pub const DEFAULT_TABLE: &str = "TestTable";
/// Default column family.
pub const DEFAULT_FAMILY: &str = "info";
/// Default column qualifier.
pub const DEFAULT_QUALIFIER: &str = "data";
/// Default number of buffered rows a batch write may exceed before flushing.
pub const DEFAULT_BATCH_THRESHOLD: usize = 5000;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A field holds a value the operations cannot use
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Table, column and durability settings for the row operations.
///
/// Each operation instance receives its own copy, so tests can point
/// instances at distinct tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowOpConfig {
    /// Target table.
    pub table: String,
    /// Column family every row is written to and read from.
    pub family: String,
    /// Column qualifier every row is written to and read from.
    pub qualifier: String,
    /// When false, writes bypass the store's write-ahead log.
    pub write_to_wal: bool,
    /// A batch write flushes once its buffer holds more rows than this.
    pub batch_threshold: usize,
}

impl Default for RowOpConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            family: DEFAULT_FAMILY.to_string(),
            qualifier: DEFAULT_QUALIFIER.to_string(),
            write_to_wal: true,
            batch_threshold: DEFAULT_BATCH_THRESHOLD,
        }
    }
}

impl RowOpConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RowOpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_column(mut self, family: impl Into<String>, qualifier: impl Into<String>) -> Self {
        self.family = family.into();
        self.qualifier = qualifier.into();
        self
    }

    pub fn with_write_to_wal(mut self, write_to_wal: bool) -> Self {
        self.write_to_wal = write_to_wal;
        self
    }

    pub fn with_batch_threshold(mut self, batch_threshold: usize) -> Self {
        self.batch_threshold = batch_threshold;
        self
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.is_empty() {
            return Err(ConfigError::Invalid("table must not be empty".to_string()));
        }
        if self.family.is_empty() {
            return Err(ConfigError::Invalid("family must not be empty".to_string()));
        }
        if self.qualifier.is_empty() {
            return Err(ConfigError::Invalid(
                "qualifier must not be empty".to_string(),
            ));
        }
        if self.batch_threshold == 0 {
            return Err(ConfigError::Invalid(
                "batch_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn family_bytes(&self) -> Vec<u8> {
        self.family.as_bytes().to_vec()
    }

    pub fn qualifier_bytes(&self) -> Vec<u8> {
        self.qualifier.as_bytes().to_vec()
    }
}
