//! Column analysis result models.

use crate::models::Value;

/// Distinct-value summary for one column.
///
/// `sample_value` is populated only when the column holds exactly one
/// distinct non-missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReport {
    /// Column name
    pub name: String,
    /// Number of distinct non-missing values
    pub unique_count: usize,
    /// The single value of a constant column
    pub sample_value: Option<Value>,
}

impl ColumnReport {
    /// Creates a report from a column's distinct values.
    pub fn new(name: impl Into<String>, distinct: &[&Value]) -> Self {
        let sample_value = match distinct {
            [only] => Some((*only).clone()),
            _ => None,
        };

        Self {
            name: name.into(),
            unique_count: distinct.len(),
            sample_value,
        }
    }

    /// Returns true if the column holds exactly one distinct value.
    pub fn is_single_valued(&self) -> bool {
        self.unique_count == 1
    }
}
