//! Column analysis.
//!
//! For every column the analyzer counts distinct non-missing values and
//! flags columns holding exactly one, which usually carry no information.
//!
//! # Example
//! ```rust,ignore
//! use colcheck_core::quality::ColumnAnalyzer;
//!
//! let analyzer = ColumnAnalyzer::new();
//! analyzer.print(&table)?;
//! ```

mod analyzer;
mod models;
mod report;
mod uniqueness;

// Re-export public API
pub use analyzer::ColumnAnalyzer;
pub use models::ColumnReport;
pub use report::{REPORT_BANNER, ReportDisplay, render_report, write_report};
pub use uniqueness::{analyze_column, analyze_uniqueness, distinct_values};
