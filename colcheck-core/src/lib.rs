//! Core library for colcheck.
//!
//! Loads a delimited text file or one table of a SQLite database into an
//! in-memory [`Table`], then reports the number of distinct non-missing
//! values per column and flags columns that hold a single value.
//!
//! # Architecture
//! - [`adapters`]: one loader per [`SourceKind`], selected by file extension
//! - [`quality`]: distinct-value analysis and text report rendering
//! - [`error`]: error type that keeps underlying reader errors as sources

pub mod adapters;
pub mod error;
pub mod logging;
pub mod models;
pub mod quality;

// Re-export commonly used types
pub use adapters::{SourceConfig, load_source};
pub use error::{ColCheckError, Result};
pub use logging::init_logging;
pub use models::{Column, SourceKind, Table, Value};
pub use quality::{ColumnAnalyzer, ColumnReport};
