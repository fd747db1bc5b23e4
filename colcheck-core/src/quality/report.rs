//! Text rendering of column reports.

use std::fmt;
use std::io::{self, Write};

use super::models::ColumnReport;

/// Banner printed once before the per-column blocks.
pub const REPORT_BANNER: &str = "=== COLUMN ANALYSIS ===";

/// Display adapter rendering the banner and one block per report.
///
/// Each block is followed by a blank line. Only single-valued columns
/// disclose a value.
#[derive(Debug, Clone, Copy)]
pub struct ReportDisplay<'a>(pub &'a [ColumnReport]);

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", REPORT_BANNER)?;
        writeln!(f)?;

        for report in self.0 {
            writeln!(f, "Column: {}", report.name)?;
            writeln!(f, " - Unique count: {}", report.unique_count)?;

            match (&report.sample_value, report.is_single_valued()) {
                (Some(value), true) => {
                    writeln!(f, " - Warning: Only one unique value: {}", value)?;
                }
                _ => writeln!(f, " - OK: Multiple unique values")?,
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// Writes the report to `out` and flushes it.
pub fn write_report<W: Write>(reports: &[ColumnReport], mut out: W) -> io::Result<()> {
    write!(out, "{}", ReportDisplay(reports))?;
    out.flush()
}

/// Renders the report into a string.
pub fn render_report(reports: &[ColumnReport]) -> String {
    ReportDisplay(reports).to_string()
}
