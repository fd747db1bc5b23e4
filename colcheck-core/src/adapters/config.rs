//! Data source configuration.
//!
//! This module provides the `SourceConfig` struct describing which file to
//! load and, for database files, which table to read.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Result;
use crate::error::ColCheckError;
use crate::models::SourceKind;

/// Configuration for loading a single data source.
///
/// # Example
/// ```rust
/// use colcheck_core::adapters::SourceConfig;
///
/// let config = SourceConfig::new("warehouse.sqlite").with_table("orders");
/// assert!(config.validate().is_ok());
///
/// let missing_table = SourceConfig::new("warehouse.sqlite");
/// assert!(missing_table.validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Path to the delimited text or database file
    pub path: PathBuf,
    /// Table to read; required for database sources, ignored otherwise
    pub table: Option<String>,
    /// Whether to open database files read-only
    pub read_only: bool,
    /// How long SQLite waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl SourceConfig {
    /// Creates a configuration for the given path with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: None,
            read_only: true,
            busy_timeout: Duration::from_secs(30),
        }
    }

    /// Builder method to set the table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Builder method to toggle read-only access for database files.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Builder method to set the SQLite busy timeout.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Returns the source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Classifies the source by its file extension.
    pub fn kind(&self) -> SourceKind {
        SourceKind::from_path(&self.path)
    }

    /// Validates the configuration.
    ///
    /// The table name is only checked for sources that need one; a table
    /// passed alongside a CSV file is ignored.
    ///
    /// # Errors
    /// Returns a configuration error if:
    /// - The path is empty
    /// - A database source has no table name, or a blank one
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ColCheckError::configuration("Data source path cannot be empty"));
        }

        if self.kind().requires_table() {
            match self.table.as_deref() {
                None => {
                    return Err(ColCheckError::configuration(
                        "For SQLite sources, you must specify --table <table_name>",
                    ));
                }
                Some(table) if table.trim().is_empty() => {
                    return Err(ColCheckError::configuration("Table name cannot be empty"));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SourceConfig::new("data.csv");
        assert_eq!(config.path(), Path::new("data.csv"));
        assert!(config.table.is_none());
        assert!(config.read_only);
        assert_eq!(config.busy_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_methods() {
        let config = SourceConfig::new("a.db")
            .with_table("users")
            .with_read_only(false)
            .with_busy_timeout(Duration::from_millis(250));

        assert_eq!(config.table.as_deref(), Some("users"));
        assert!(!config.read_only);
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert_eq!(config.kind(), SourceKind::EmbeddedDatabase);
    }

    #[test]
    fn test_validate_csv_ignores_table() {
        assert!(SourceConfig::new("data.csv").validate().is_ok());
        assert!(SourceConfig::new("data.csv").with_table("").validate().is_ok());
    }

    #[test]
    fn test_validate_database_requires_table() {
        let error = SourceConfig::new("data.sqlite").validate().unwrap_err();
        assert!(matches!(error, ColCheckError::Configuration { .. }));
        assert!(error.to_string().contains("--table"));

        let error = SourceConfig::new("data.db")
            .with_table("   ")
            .validate()
            .unwrap_err();
        assert!(error.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_empty_path() {
        assert!(SourceConfig::new("").validate().is_err());
    }

    #[test]
    fn test_validate_unsupported_kind_passes() {
        // Unsupported extensions are rejected at dispatch, not here
        assert!(SourceConfig::new("data.json").validate().is_ok());
    }
}
