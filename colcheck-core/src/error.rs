//! Error types for source loading and analysis.
//!
//! Underlying reader and driver errors are never translated away: they are
//! kept as the `source` of the returned error so the full cause chain can be
//! printed by the binary.

use thiserror::Error;

/// Main error type for colcheck operations.
#[derive(Debug, Error)]
pub enum ColCheckError {
    /// Invalid or incomplete source configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },

    /// The data source extension is not a recognised tabular format
    #[error(
        "Unsupported file type '{extension}'. Supported: .csv, .db, .sqlite, .sqlite3"
    )]
    UnsupportedFormat {
        /// Offending extension with its leading dot, or `<none>`
        extension: String,
    },

    /// The source kind is recognised but its driver was not compiled in
    #[error("Unsupported operation: {feature} not available in this build")]
    UnsupportedFeature {
        /// Name of the missing capability
        feature: String,
    },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        /// Operation that failed
        context: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be parsed
    #[error("Failed to parse delimited text: {context}")]
    Parse {
        /// Operation that failed
        context: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Opening the database or running the query failed
    #[error("Database operation failed: {context}")]
    Database {
        /// Operation that failed
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience type alias for Results with ColCheckError
pub type Result<T> = std::result::Result<T, ColCheckError>;

impl ColCheckError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an unsupported-format error for the given extension.
    ///
    /// An empty extension is reported as `<none>`.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = if extension.is_empty() {
            "<none>".to_string()
        } else {
            extension
        };
        Self::UnsupportedFormat { extension }
    }

    /// Creates an unsupported feature error
    pub fn unsupported_feature(feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature {
            feature: feature.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a parse error without an underlying reader error
    pub fn parse(context: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a parse error wrapping the reader's error
    pub fn parse_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a database error with context
    pub fn database_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Database {
            context: context.into(),
            source: Box::new(error),
        }
    }
}
