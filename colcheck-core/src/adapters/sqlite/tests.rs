//! Unit tests for the SQLite adapter.
//!
//! These tests run against in-memory databases and cover:
//! - Identifier quoting and query construction
//! - Column order and empty-table column discovery
//! - Value decoding per storage class

use sqlx::Connection;
use sqlx::sqlite::SqliteConnection;

use super::SqliteSource;
use super::query::{extract_column_value, quote_identifier, select_all_query};
use crate::error::ColCheckError;
use crate::models::Value;

async fn memory_source(statements: &[&str]) -> SqliteSource {
    let mut connection = SqliteConnection::connect("sqlite::memory:").await.unwrap();
    for statement in statements {
        sqlx::query(statement)
            .execute(&mut connection)
            .await
            .unwrap();
    }
    SqliteSource::from_connection(connection)
}

// =============================================================================
// Query Construction Tests
// =============================================================================

#[test]
fn test_quote_identifier() {
    assert_eq!(quote_identifier("users"), "\"users\"");
    assert_eq!(quote_identifier("weird\"name"), "\"weird\"\"name\"");
}

#[test]
fn test_select_all_query() {
    assert_eq!(select_all_query("orders"), "SELECT * FROM \"orders\"");
    assert_eq!(
        select_all_query("order items"),
        "SELECT * FROM \"order items\""
    );
}

// =============================================================================
// Table Reading Tests
// =============================================================================

#[tokio::test]
async fn test_read_table_preserves_column_order() {
    let mut source = memory_source(&[
        "CREATE TABLE t (zeta TEXT, alpha INTEGER, mid REAL)",
        "INSERT INTO t VALUES ('a', 1, 1.5), ('b', 2, 2.5)",
    ])
    .await;

    let table = source.read_table("t").await.unwrap();
    assert_eq!(table.column_names(), vec!["zeta", "alpha", "mid"]);
    assert_eq!(table.row_count(), 2);
    source.close().await;
}

#[tokio::test]
async fn test_read_empty_table_lists_columns() {
    let mut source = memory_source(&["CREATE TABLE empty_t (id INTEGER, label TEXT)"]).await;

    let table = source.read_table("empty_t").await.unwrap();
    assert_eq!(table.column_names(), vec!["id", "label"]);
    assert_eq!(table.row_count(), 0);
    source.close().await;
}

#[tokio::test]
async fn test_read_missing_table_fails() {
    let mut source = memory_source(&[]).await;

    let error = source.read_table("nope").await.unwrap_err();
    assert!(matches!(error, ColCheckError::Database { .. }));
    assert!(error.to_string().contains("'nope'"));
    source.close().await;
}

#[tokio::test]
async fn test_read_table_with_quoted_name() {
    let mut source = memory_source(&[
        "CREATE TABLE \"odd \"\"name\" (v INTEGER)",
        "INSERT INTO \"odd \"\"name\" VALUES (3)",
    ])
    .await;

    let table = source.read_table("odd \"name").await.unwrap();
    assert_eq!(table.columns()[0].values, vec![Value::Integer(3)]);
    source.close().await;
}

// =============================================================================
// Value Decoding Tests
// =============================================================================

#[tokio::test]
async fn test_decode_storage_classes() {
    let mut source = memory_source(&[
        "CREATE TABLE mixed (v)",
        "INSERT INTO mixed VALUES ('text'), (42), (2.5), (x'0102'), (NULL), ('')",
    ])
    .await;

    let table = source.read_table("mixed").await.unwrap();
    assert_eq!(
        table.columns()[0].values,
        vec![
            Value::Text("text".into()),
            Value::Integer(42),
            Value::Real(2.5),
            Value::Blob(vec![1, 2]),
            Value::Null,
            // Empty text is a value in SQLite, not a missing entry
            Value::Text(String::new()),
        ]
    );
    source.close().await;
}

#[tokio::test]
async fn test_extract_column_value_by_index() {
    let mut connection = SqliteConnection::connect("sqlite::memory:").await.unwrap();
    let row = sqlx::query("SELECT 7 AS a, NULL AS b, 'x' AS c")
        .fetch_one(&mut connection)
        .await
        .unwrap();

    assert_eq!(extract_column_value(&row, 0), Value::Integer(7));
    assert_eq!(extract_column_value(&row, 1), Value::Null);
    assert_eq!(extract_column_value(&row, 2), Value::Text("x".into()));
    connection.close().await.unwrap();
}
