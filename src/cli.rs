//! CLI interface definitions for the `ruport` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs.
//!
//! The report format flag reuses [`ReportFormat`] from the output module,
//! so the CLI accepts exactly the formats the registry can resolve. The
//! role flag is a free-form string on purpose: unrecognized role names are
//! a valid input to the visibility policy, not a parse error.
//!
//! # Example
//!
//! ```bash
//! ruport items.json --format html --user Bob --role ADMIN --output report.html
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::output::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `ruport` report generator.
///
/// This struct defines all available command-line options for controlling
/// which items are loaded, who the report is rendered for, and how the
/// result is formatted and emitted.
#[derive(Parser, Debug)]
#[command(name = "ruport", version, about)]
pub struct Args {
    /// Path to the items file (.json or .csv)
    pub input: PathBuf,

    /// Report format to render
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Name of the user the report is rendered for
    #[arg(long, value_name = "NAME")]
    pub user: String,

    /// Role of the user: ADMIN, USER, or any other role name
    #[arg(long, value_name = "ROLE", default_value = "USER")]
    pub role: String,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,
}
