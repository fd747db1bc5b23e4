//! Data source adapters.
//!
//! Each [`SourceKind`] has one loader:
//! - `DelimitedText` → [`delimited::load_csv`]
//! - `EmbeddedDatabase` → `sqlite::load_table` (requires the `sqlite` feature)
//! - `Unsupported` → error, without touching the file
//!
//! [`load_source`] validates the configuration, prints a status line naming
//! the source and dispatches to the matching loader.

pub mod config;
pub mod delimited;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use config::SourceConfig;
pub use delimited::{load_csv, read_csv};

use crate::Result;
use crate::error::ColCheckError;
use crate::models::{SourceKind, Table};

/// Loads the configured source into memory.
///
/// # Errors
/// - Configuration error if a database source has no table name
/// - Unsupported-format error for unrecognised extensions
/// - I/O, parse or database errors from the underlying reader
///
/// # Example
/// ```rust,no_run
/// use colcheck_core::adapters::{SourceConfig, load_source};
///
/// # async fn example() -> colcheck_core::Result<()> {
/// let config = SourceConfig::new("inventory.sqlite").with_table("items");
/// let table = load_source(&config).await?;
/// println!("{} columns", table.columns().len());
/// # Ok(())
/// # }
/// ```
pub async fn load_source(config: &SourceConfig) -> Result<Table> {
    let kind = config.kind();
    tracing::debug!("Source {} classified as {}", config.path.display(), kind);

    if let SourceKind::Unsupported { extension } = &kind {
        return Err(unsupported_extension(extension));
    }

    // Fails before the file is opened, so no rows are read without a table
    config.validate()?;

    if let Some(line) = status_line(config) {
        println!("{}", line);
    }

    match kind {
        SourceKind::DelimitedText => load_csv(config.path()),
        SourceKind::EmbeddedDatabase => load_database(config).await,
        SourceKind::Unsupported { extension } => Err(unsupported_extension(&extension)),
    }
}

/// Human-readable line announcing which source is being loaded.
///
/// Returns `None` for unsupported sources, which are never loaded.
pub fn status_line(config: &SourceConfig) -> Option<String> {
    match config.kind() {
        SourceKind::DelimitedText => Some(format!("Loading CSV: {}", config.path.display())),
        SourceKind::EmbeddedDatabase => Some(format!(
            "Loading SQLite: {}, table={}",
            config.path.display(),
            config.table.as_deref().unwrap_or_default()
        )),
        SourceKind::Unsupported { .. } => None,
    }
}

fn unsupported_extension(extension: &str) -> ColCheckError {
    if extension.is_empty() {
        ColCheckError::unsupported_format("")
    } else {
        ColCheckError::unsupported_format(format!(".{}", extension))
    }
}

#[cfg(feature = "sqlite")]
async fn load_database(config: &SourceConfig) -> Result<Table> {
    let table = config.table.as_deref().ok_or_else(|| {
        ColCheckError::configuration("For SQLite sources, you must specify --table <table_name>")
    })?;
    sqlite::load_table(config, table).await
}

#[cfg(not(feature = "sqlite"))]
async fn load_database(_config: &SourceConfig) -> Result<Table> {
    Err(ColCheckError::unsupported_feature(
        "SQLite sources (compile with --features sqlite)",
    ))
}
