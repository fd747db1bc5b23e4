//! Delimited text (CSV) loading.
//!
//! Reads the whole file into a [`Table`] with comma delimiter, double-quote
//! quoting and a mandatory header row. Missing markers become
//! [`Value::Null`] and each column is given a single scalar type chosen
//! from its non-missing cells.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::Result;
use crate::error::ColCheckError;
use crate::models::{Column, Table, Value};

/// Cell contents treated as missing values. Matched exactly.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_LITERALS: &[&str] = &["true", "True", "TRUE"];
const FALSE_LITERALS: &[&str] = &["false", "False", "FALSE"];

/// Loads a CSV file from disk.
///
/// # Errors
/// Returns an I/O error if the file cannot be opened and a parse error if
/// it has no header or a record has more fields than the header.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .map_err(|e| ColCheckError::io(format!("Failed to open {}", path.display()), e))?;

    let table = read_csv(file)?;
    tracing::debug!(
        "Loaded {} columns and {} rows from {}",
        table.columns().len(),
        table.row_count(),
        path.display()
    );
    Ok(table)
}

/// Parses CSV data from any reader.
///
/// # Example
/// ```rust
/// use colcheck_core::adapters::read_csv;
/// use colcheck_core::Value;
///
/// let table = read_csv("id,status\n1,active\n2,\n".as_bytes()).unwrap();
/// assert_eq!(table.column_names(), vec!["id", "status"]);
/// assert_eq!(table.columns()[1].values[1], Value::Null);
/// ```
pub fn read_csv<R: Read>(input: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| ColCheckError::parse_failed("Failed to read CSV header", e))?
        .clone();

    if headers.is_empty() {
        return Err(ColCheckError::parse("No columns to parse from file"));
    }

    let names = normalize_headers(&headers);
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for result in reader.records() {
        let record =
            result.map_err(|e| ColCheckError::parse_failed("Failed to read CSV record", e))?;

        if record.len() > names.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(ColCheckError::parse(format!(
                "Expected {} fields in line {}, saw {}",
                names.len(),
                line,
                record.len()
            )));
        }

        // Short records are padded with missing cells
        for (index, column) in cells.iter_mut().enumerate() {
            let cell = record
                .get(index)
                .filter(|field| !is_missing_marker(field))
                .map(str::to_string);
            column.push(cell);
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| {
            let values = type_column(raw);
            tracing::trace!("Column '{}' typed from {} cells", name, values.len());
            Column::new(name, values)
        })
        .collect();

    Ok(Table::new(columns))
}

/// Returns true if a raw cell is one of the [`MISSING_MARKERS`].
pub fn is_missing_marker(field: &str) -> bool {
    MISSING_MARKERS.contains(&field)
}

/// Makes header names non-empty and unique.
///
/// Empty names become `Unnamed: <index>`; repeats get `.1`, `.2`, ...
fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    let mut taken: HashSet<String> = HashSet::new();

    for (index, field) in headers.iter().enumerate() {
        let base = if field.is_empty() {
            format!("Unnamed: {}", index)
        } else {
            field.to_string()
        };

        let mut name = base.clone();
        let mut suffix: usize = 1;
        while taken.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix = suffix.saturating_add(1);
        }

        if name != base {
            tracing::debug!("Renamed duplicate column '{}' to '{}'", base, name);
        }
        taken.insert(name.clone());
        names.push(name);
    }

    names
}

/// Scalar type shared by every non-missing cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellType {
    Integer,
    Real,
    Boolean,
    Text,
}

fn parse_integer(field: &str) -> Option<i64> {
    field.trim().parse::<i64>().ok()
}

fn parse_real(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn parse_boolean(field: &str) -> Option<bool> {
    let field = field.trim();
    if TRUE_LITERALS.contains(&field) {
        Some(true)
    } else if FALSE_LITERALS.contains(&field) {
        Some(false)
    } else {
        None
    }
}

/// Surrounding whitespace is ignored when testing for numbers and booleans;
/// text cells keep it.
fn infer_cell_type(cells: &[Option<String>]) -> CellType {
    let mut present = cells.iter().flatten();

    if present.clone().all(|s| parse_integer(s).is_some()) {
        CellType::Integer
    } else if present.clone().all(|s| parse_real(s).is_some()) {
        CellType::Real
    } else if present.all(|s| parse_boolean(s).is_some()) {
        CellType::Boolean
    } else {
        CellType::Text
    }
}

fn type_column(cells: Vec<Option<String>>) -> Vec<Value> {
    let cell_type = infer_cell_type(&cells);

    cells
        .into_iter()
        .map(|cell| {
            let Some(raw) = cell else {
                return Value::Null;
            };
            match cell_type {
                CellType::Integer => parse_integer(&raw).map_or(Value::Null, Value::Integer),
                CellType::Real => parse_real(&raw).map_or(Value::Null, Value::Real),
                CellType::Boolean => parse_boolean(&raw).map_or(Value::Null, Value::Boolean),
                CellType::Text => Value::Text(raw),
            }
        })
        .collect()
}
