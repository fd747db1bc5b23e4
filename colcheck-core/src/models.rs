//! Core data models for loaded tabular data.
//!
//! A [`Table`] is a fully materialised, column-major copy of the source. It
//! is built once per run by an adapter and only read afterwards.

use std::fmt;
use std::path::Path;

/// Extensions recognised as delimited text.
pub const DELIMITED_TEXT_EXTENSIONS: &[&str] = &["csv"];

/// Extensions recognised as embedded SQLite database files.
pub const EMBEDDED_DATABASE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

/// Kind of data source, derived from the file extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Comma-separated text with a header row
    DelimitedText,
    /// Single-file SQLite database
    EmbeddedDatabase,
    /// Anything else
    Unsupported {
        /// Lowercased extension, empty if the path has none
        extension: String,
    },
}

impl SourceKind {
    /// Classifies a path by its extension, case-insensitively.
    ///
    /// # Example
    /// ```rust
    /// use colcheck_core::SourceKind;
    ///
    /// assert_eq!(SourceKind::from_path("data/Users.CSV"), SourceKind::DelimitedText);
    /// assert_eq!(SourceKind::from_path("app.sqlite3"), SourceKind::EmbeddedDatabase);
    /// assert!(matches!(SourceKind::from_path("dump.json"), SourceKind::Unsupported { .. }));
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if DELIMITED_TEXT_EXTENSIONS.contains(&extension.as_str()) {
            Self::DelimitedText
        } else if EMBEDDED_DATABASE_EXTENSIONS.contains(&extension.as_str()) {
            Self::EmbeddedDatabase
        } else {
            Self::Unsupported { extension }
        }
    }

    /// Returns true if loading this kind of source needs a table name.
    pub fn requires_table(&self) -> bool {
        matches!(self, Self::EmbeddedDatabase)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DelimitedText => write!(f, "CSV"),
            Self::EmbeddedDatabase => write!(f, "SQLite"),
            Self::Unsupported { extension } if extension.is_empty() => write!(f, "unknown"),
            Self::Unsupported { extension } => write!(f, ".{}", extension),
        }
    }
}

/// A single nullable scalar cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL` or a missing CSV cell
    Null,
    /// Boolean literal
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision float
    Real(f64),
    /// Text, kept verbatim
    Text(String),
    /// Raw bytes from a SQLite BLOB
    Blob(Vec<u8>),
}

impl Value {
    /// Returns true for values excluded from distinct counting.
    ///
    /// NaN reals count as missing alongside `Null`.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Real(v) => v.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part ("1.0"), Display would print "1"
            Self::Real(v) => write!(f, "{:?}", v),
            Self::Text(s) => f.write_str(s),
            Self::Blob(bytes) => {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                write!(f, "base64:{}", encoded)
            }
        }
    }
}

/// A named column of values in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// One value per row
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a column from a name and its values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Iterates the values that are not missing, in row order.
    pub fn present_values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_missing())
    }
}

/// In-memory table: ordered, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table from columns in their declared order.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows, taken as the longest column.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.values.len())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
