//! Column analyzer facade.
//!
//! Ties distinct-value analysis to report rendering.

use std::io::Write;

use crate::Result;
use crate::error::ColCheckError;
use crate::models::Table;

use super::models::ColumnReport;
use super::report::write_report;
use super::uniqueness::analyze_uniqueness;

/// Analyzes every column of a table and reports constant columns.
///
/// # Example
///
/// ```rust
/// use colcheck_core::quality::ColumnAnalyzer;
/// use colcheck_core::{Column, Table, Value};
///
/// let table = Table::new(vec![Column::new(
///     "status",
///     vec![Value::Text("active".into()), Value::Text("active".into())],
/// )]);
///
/// let reports = ColumnAnalyzer::new().analyze(&table);
/// assert!(reports[0].is_single_valued());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnAnalyzer;

impl ColumnAnalyzer {
    /// Creates a new column analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Computes one report per column, in declared order.
    ///
    /// The table is only read.
    pub fn analyze(&self, table: &Table) -> Vec<ColumnReport> {
        let reports = analyze_uniqueness(table);

        let constant = reports.iter().filter(|r| r.is_single_valued()).count();
        tracing::debug!(
            "Analyzed {} columns, {} with a single unique value",
            reports.len(),
            constant
        );

        reports
    }

    /// Analyzes the table and writes the text report to `out`.
    pub fn report<W: Write>(&self, table: &Table, out: W) -> Result<()> {
        let reports = self.analyze(table);
        write_report(&reports, out)
            .map_err(|e| ColCheckError::io("Failed to write column report", e))
    }

    /// Analyzes the table and prints the text report to stdout.
    pub fn print(&self, table: &Table) -> Result<()> {
        self.report(table, std::io::stdout().lock())
    }
}
