//! SQLite connection handling.
//!
//! A single `SqliteConnection` is opened per run; there is no pool. The
//! database file is never created, and is opened read-only unless the
//! configuration says otherwise.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use super::SqliteSource;
use crate::Result;
use crate::adapters::SourceConfig;
use crate::error::ColCheckError;

impl SqliteSource {
    /// Opens the database file named by the configuration.
    ///
    /// # Errors
    /// Returns a database error if the file does not exist or cannot be
    /// opened as SQLite.
    pub async fn open(config: &SourceConfig) -> Result<Self> {
        let options = connect_options(config);
        let connection = options.connect().await.map_err(|e| {
            ColCheckError::database_failed(
                format!("Failed to open SQLite database {}", config.path.display()),
                e,
            )
        })?;

        tracing::debug!(
            "Opened SQLite database {} (read_only={})",
            config.path.display(),
            config.read_only
        );

        Ok(Self {
            connection,
            path: config.path.clone(),
        })
    }

    /// Wraps an already open connection, e.g. an in-memory database.
    pub fn from_connection(connection: SqliteConnection) -> Self {
        Self {
            connection,
            path: ":memory:".into(),
        }
    }

    /// Closes the connection gracefully.
    ///
    /// A failed close is logged rather than returned: by the time the
    /// connection is closed the table has already been materialised.
    pub async fn close(self) {
        let path = self.path;
        if let Err(e) = self.connection.close().await {
            tracing::warn!(
                "Failed to close SQLite connection to {}: {}",
                path.display(),
                e
            );
        } else {
            tracing::trace!("Closed SQLite connection to {}", path.display());
        }
    }
}

/// Builds connect options from the source configuration.
pub fn connect_options(config: &SourceConfig) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(false)
        .read_only(config.read_only)
        .busy_timeout(config.busy_timeout)
}
