//! SQLite source adapter.
//!
//! # Module Structure
//! - `connection`: Opening and closing the single connection
//! - `query`: Select-all query, column discovery and value decoding
//!
//! The connection is released on every path: [`load_table`] closes it
//! explicitly once the query finished, whether or not the query succeeded,
//! and an early return drops it, which closes it as well.

pub mod connection;
pub mod query;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use sqlx::sqlite::SqliteConnection;

use super::SourceConfig;
use crate::Result;
use crate::models::Table;

pub use connection::connect_options;
pub use query::{quote_identifier, select_all_query};

/// An open SQLite database file.
pub struct SqliteSource {
    connection: SqliteConnection,
    path: PathBuf,
}

impl std::fmt::Debug for SqliteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteSource {
    /// Reads all rows of the named table.
    pub async fn read_table(&mut self, table: &str) -> Result<Table> {
        query::fetch_table(&mut self.connection, table).await
    }
}

/// Opens the database, reads `table` in full and closes the connection.
///
/// # Errors
/// Returns a database error if the file cannot be opened or the table
/// cannot be read (for example, it does not exist).
pub async fn load_table(config: &SourceConfig, table: &str) -> Result<Table> {
    let mut source = SqliteSource::open(config).await?;
    let outcome = source.read_table(table).await;
    source.close().await;
    outcome
}
