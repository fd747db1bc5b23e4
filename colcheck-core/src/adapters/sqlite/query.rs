//! Full-table reads and value decoding for SQLite.

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Column as _, Row};

use crate::Result;
use crate::error::ColCheckError;
use crate::models::{Column, Table, Value};

/// Quotes an identifier for SQLite, doubling embedded double quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Builds the unqualified select-all query for a table.
pub fn select_all_query(table: &str) -> String {
    format!("SELECT * FROM {}", quote_identifier(table))
}

/// Reads every row of `table` into a column-major [`Table`].
///
/// Column order is the order returned by the driver. When the table is
/// empty the names come from `PRAGMA table_info` instead.
pub async fn fetch_table(connection: &mut SqliteConnection, table: &str) -> Result<Table> {
    let query = select_all_query(table);
    tracing::trace!("Executing: {}", query);

    let rows = sqlx::query(&query)
        .fetch_all(&mut *connection)
        .await
        .map_err(|e| {
            ColCheckError::database_failed(format!("Failed to read table '{}'", table), e)
        })?;

    let names: Vec<String> = match rows.first() {
        Some(first) => first
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
        None => table_column_names(connection, table).await?,
    };

    let mut values: Vec<Vec<Value>> = names
        .iter()
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();

    for row in &rows {
        for (index, column) in values.iter_mut().enumerate() {
            column.push(extract_column_value(row, index));
        }
    }

    tracing::debug!(
        "Read {} rows across {} columns from '{}'",
        rows.len(),
        names.len(),
        table
    );

    Ok(Table::new(
        names
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect(),
    ))
}

/// Lists a table's column names in declaration order.
pub async fn table_column_names(
    connection: &mut SqliteConnection,
    table: &str,
) -> Result<Vec<String>> {
    let pragma = format!("PRAGMA table_info('{}')", table.replace('\'', "''"));

    let rows = sqlx::query(&pragma)
        .fetch_all(&mut *connection)
        .await
        .map_err(|e| {
            ColCheckError::database_failed(
                format!("Failed to list columns of table '{}'", table),
                e,
            )
        })?;

    rows.iter()
        .map(|row| {
            row.try_get::<String, _>("name").map_err(|e| {
                ColCheckError::database_failed(
                    format!("Failed to parse column name for table '{}'", table),
                    e,
                )
            })
        })
        .collect()
}

/// Decodes one cell by storage class: text, integer, real, then blob.
pub fn extract_column_value(row: &SqliteRow, index: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return v.map_or(Value::Null, Value::Text);
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return v.map_or(Value::Null, Value::Integer);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return v.map_or(Value::Null, Value::Real);
    }
    if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return v.map_or(Value::Null, Value::Blob);
    }

    tracing::trace!("Undecodable value at column index {}, treating as null", index);
    Value::Null
}
