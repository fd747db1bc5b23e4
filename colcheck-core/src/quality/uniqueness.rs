//! Distinct-value analysis per column.
//!
//! Missing values are dropped before counting. Integers and integral reals
//! with the same numeric value count as one value.

use std::collections::HashSet;

use crate::models::{Column, Table, Value};

use super::models::ColumnReport;

/// Hashable identity of a non-missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DistinctKey<'a> {
    Boolean(bool),
    Integer(i64),
    /// Bit pattern of a non-integral or out-of-range real
    Real(u64),
    Text(&'a str),
    Blob(&'a [u8]),
}

// i64 range as f64; 2^63 itself is out of range
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Returns the comparison key for a value, or `None` if it is missing.
#[allow(clippy::cast_possible_truncation)]
fn distinct_key(value: &Value) -> Option<DistinctKey<'_>> {
    match value {
        Value::Null => None,
        Value::Boolean(b) => Some(DistinctKey::Boolean(*b)),
        Value::Integer(n) => Some(DistinctKey::Integer(*n)),
        Value::Real(v) if v.is_nan() => None,
        Value::Real(v) if v.fract() == 0.0 && *v >= I64_LOWER && *v < I64_UPPER => {
            // Also folds -0.0 into 0
            Some(DistinctKey::Integer(*v as i64))
        }
        Value::Real(v) => Some(DistinctKey::Real(v.to_bits())),
        Value::Text(s) => Some(DistinctKey::Text(s)),
        Value::Blob(bytes) => Some(DistinctKey::Blob(bytes)),
    }
}

/// Distinct non-missing values of a column, in order of first appearance.
pub fn distinct_values(column: &Column) -> Vec<&Value> {
    let mut seen: HashSet<DistinctKey<'_>> = HashSet::new();
    let mut distinct = Vec::new();

    for value in &column.values {
        if let Some(key) = distinct_key(value)
            && seen.insert(key)
        {
            distinct.push(value);
        }
    }

    distinct
}

/// Builds the report for a single column.
pub fn analyze_column(column: &Column) -> ColumnReport {
    let distinct = distinct_values(column);
    let missing = column.values.len().saturating_sub(column.present_values().count());
    tracing::trace!(
        "Column '{}': {} distinct, {} missing",
        column.name,
        distinct.len(),
        missing
    );
    ColumnReport::new(&column.name, &distinct)
}

/// Builds one report per column, in the table's column order.
pub fn analyze_uniqueness(table: &Table) -> Vec<ColumnReport> {
    table.columns().iter().map(analyze_column).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::Text((*s).to_string())).collect()
    }

    #[test]
    fn test_single_value_column() {
        let column = Column::new("status", text(&["active", "active", "active"]));
        let report = analyze_column(&column);

        assert_eq!(report.unique_count, 1);
        assert_eq!(report.sample_value, Some(Value::Text("active".into())));
        assert!(report.is_single_valued());
    }

    #[test]
    fn test_all_missing_column() {
        let column = Column::new("empty", vec![Value::Null, Value::Null, Value::Real(f64::NAN)]);
        let report = analyze_column(&column);

        assert_eq!(report.unique_count, 0);
        assert!(report.sample_value.is_none());
        assert!(!report.is_single_valued());
    }

    #[test]
    fn test_zero_length_column() {
        let report = analyze_column(&Column::new("nothing", vec![]));
        assert_eq!(report.unique_count, 0);
        assert!(!report.is_single_valued());
    }

    #[test]
    fn test_multiple_values_hide_sample() {
        let column = Column::new("city", text(&["Oslo", "Rome", "Oslo"]));
        let report = analyze_column(&column);

        assert_eq!(report.unique_count, 2);
        assert!(report.sample_value.is_none());
    }

    #[test]
    fn test_nulls_are_not_counted() {
        let column = Column::new(
            "tier",
            vec![Value::Null, Value::Text("gold".into()), Value::Null],
        );
        let report = analyze_column(&column);

        assert_eq!(report.unique_count, 1);
        assert_eq!(report.sample_value, Some(Value::Text("gold".into())));
    }

    #[test]
    fn test_integer_and_integral_real_are_equal() {
        let column = Column::new("n", vec![Value::Integer(1), Value::Real(1.0)]);
        assert_eq!(distinct_values(&column).len(), 1);

        let column = Column::new("n", vec![Value::Integer(1), Value::Real(1.5)]);
        assert_eq!(distinct_values(&column).len(), 2);
    }

    #[test]
    fn test_signed_zero_is_one_value() {
        let column = Column::new("z", vec![Value::Real(0.0), Value::Real(-0.0)]);
        assert_eq!(distinct_values(&column).len(), 1);
    }

    #[test]
    fn test_text_is_case_and_space_sensitive() {
        let column = Column::new("v", text(&["a", "A", "a "]));
        assert_eq!(distinct_values(&column).len(), 3);
    }

    #[test]
    fn test_text_and_number_differ() {
        let column = Column::new("v", vec![Value::Text("1".into()), Value::Integer(1)]);
        assert_eq!(distinct_values(&column).len(), 2);
    }

    #[test]
    fn test_blob_values() {
        let column = Column::new(
            "payload",
            vec![Value::Blob(vec![1]), Value::Blob(vec![1]), Value::Blob(vec![2])],
        );
        assert_eq!(distinct_values(&column).len(), 2);
    }

    #[test]
    fn test_first_appearance_order() {
        let column = Column::new("v", text(&["b", "a", "b", "c"]));
        let distinct: Vec<String> = distinct_values(&column)
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(distinct, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_analyze_uniqueness_keeps_column_order() {
        let table = Table::new(vec![
            Column::new("z", text(&["x"])),
            Column::new("a", text(&["x", "y"])),
            Column::new("m", vec![Value::Null]),
        ]);

        let reports = analyze_uniqueness(&table);
        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(analyze_uniqueness(&Table::default()).is_empty());
    }
}
