//! Column uniqueness checker.
//!
//! Loads a CSV file or one table of a SQLite database and reports, for each
//! column, how many distinct non-missing values it holds. Columns with a
//! single value are flagged since they rarely carry information.

use std::path::PathBuf;

use clap::{Args, Parser};
use colcheck_core::{ColCheckError, ColumnAnalyzer, SourceConfig, init_logging, load_source};
use tracing::debug;

const USAGE: &str = "\
Usage:
  colcheck <data_source> [--table table_name]

Examples:
  colcheck data.csv
  colcheck database.sqlite --table mytable";

#[derive(Debug, Parser)]
#[command(name = "colcheck")]
#[command(about = "Report distinct values per column and flag constant columns")]
#[command(version)]
#[command(long_about = "
colcheck - Column uniqueness checker

Loads tabular data and prints, for every column in its declared order, the
number of distinct non-missing values. A column holding exactly one value is
reported with a warning that includes the value.

SUPPORTED SOURCES:
- CSV files (.csv)
- SQLite databases (.db, .sqlite, .sqlite3) with --table

EXAMPLES:
  colcheck data.csv
  colcheck database.sqlite --table mytable
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Path to a CSV file or SQLite database
    #[arg(value_name = "DATA_SOURCE")]
    data_source: Option<PathBuf>,

    /// Table to read from a SQLite database
    #[arg(
        long,
        value_name = "TABLE_NAME",
        num_args = 0..=1,
        help = "Table to read (required for .db, .sqlite and .sqlite3 sources)"
    )]
    table: Option<Option<String>>,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, help = "Suppress all log output except errors")]
    quiet: bool,
}

impl Cli {
    /// Builds the source configuration, or `None` when no arguments were given.
    ///
    /// # Errors
    /// Returns a configuration error if `--table` was passed without a value,
    /// or with a value but no data source.
    fn source_config(&self) -> colcheck_core::Result<Option<SourceConfig>> {
        let table = match &self.table {
            Some(None) => {
                return Err(ColCheckError::configuration(
                    "Missing table name after --table",
                ));
            }
            Some(Some(table)) => Some(table),
            None => None,
        };

        let Some(path) = &self.data_source else {
            return match table {
                Some(_) => Err(ColCheckError::configuration("Missing data source")),
                None => Ok(None),
            };
        };

        let config = SourceConfig::new(path);
        Ok(Some(match table {
            Some(table) => config.with_table(table),
            None => config,
        }))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    run(&cli).await
}

/// Loads the source and prints the column report.
async fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(config) = cli.source_config()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    debug!("Source: {}", config.path().display());
    let table = load_source(&config).await?;

    ColumnAnalyzer::new().print(&table)?;
    Ok(())
}
