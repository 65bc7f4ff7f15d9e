//! Modular output system for the `ruport` application.
//!
//! This module provides a pluggable output system with different formatters
//! for rendering a report of line items in various text formats. The
//! formatter set is fixed and compiled in; selection happens once, through
//! the [`ReportFormat`] key.
//!
//! # Available Formatters
//!
//! - **CSV**: Machine-readable comma-separated format for data analysis
//! - **HTML**: Human-readable document with a styled item table
//!
//! # Structure
//!
//! Every formatter implements the three [`Formatter`] section hooks; the
//! provided [`Formatter::render`] template assembles header, body, and
//! footer in fixed order and trims the result. Formatters are stateless
//! and receive items that have already been policy-filtered; no formatter
//! re-checks the user's role.

pub mod csv;
pub mod html;

pub use csv::CsvFormatter;
pub use html::HtmlFormatter;

use crate::data::{Item, User};
use clap::ValueEnum;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a format key is outside the fixed CSV/HTML mapping.
///
/// Carries the requested key so callers can report which format was asked
/// for. This is the only error the report pipeline can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format: '{0}'")]
pub struct UnknownFormat(pub String);

/// Enum for selecting the report output format.
///
/// # Variants
/// * `Csv` - comma-separated output, wire key `"CSV"`
/// * `Html` - HTML document output, wire key `"HTML"`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ReportFormat {
    Csv,
    Html,
}

impl ReportFormat {
    /// Returns the canonical wire key of the format.
    ///
    /// # Returns
    /// * `"CSV"` for `ReportFormat::Csv`
    /// * `"HTML"` for `ReportFormat::Html`
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Html => "HTML",
        }
    }

    /// Returns the formatter registered for this format.
    pub fn formatter(&self) -> &'static dyn Formatter {
        match self {
            ReportFormat::Csv => &CsvFormatter,
            ReportFormat::Html => &HtmlFormatter,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    /// Parses a canonical wire key. Matching is exact: anything other than
    /// `"CSV"` or `"HTML"` is an [`UnknownFormat`] error carrying the key.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "CSV" => Ok(ReportFormat::Csv),
            "HTML" => Ok(ReportFormat::Html),
            _ => Err(UnknownFormat(key.to_string())),
        }
    }
}

/// Resolves a format key to its registered formatter.
///
/// # Arguments
/// * `key` - Wire key of the requested format, `"CSV"` or `"HTML"`
///
/// # Returns
/// * `Ok(&'static dyn Formatter)` - the formatter for the key
///
/// # Errors
/// Returns [`UnknownFormat`] for any key outside the fixed mapping.
pub fn resolve(key: &str) -> Result<&'static dyn Formatter, UnknownFormat> {
    Ok(key.parse::<ReportFormat>()?.formatter())
}

/// Rendering strategy for one report output format.
///
/// Concrete formatters supply the three section hooks; the provided
/// [`Formatter::render`] template assembles them. Formatters hold no state
/// and are shared as immutable statics.
pub trait Formatter {
    /// Produces the report preamble, including any column header line.
    fn header(&self, user: &User) -> String;

    /// Produces one rendered entry per item, in the order given.
    ///
    /// `user` is part of the hook signature for every formatter; variants
    /// that render rows without user data simply ignore it.
    fn body(&self, user: &User, items: &[Item]) -> String;

    /// Produces the closing section carrying the report total.
    fn footer(&self, items: &[Item]) -> String;

    /// Renders the complete report: header, then body, then footer, with
    /// leading and trailing whitespace trimmed from the assembled text.
    fn render(&self, user: &User, items: &[Item]) -> String {
        let mut report = String::new();
        report.push_str(&self.header(user));
        report.push_str(&self.body(user, items));
        report.push_str(&self.footer(items));
        report.trim().to_string()
    }
}

/// Sums the values of `items`.
///
/// Every formatter footer reports this total; keeping the calculation here
/// guarantees the formats agree on it.
pub fn total_value(items: &[Item]) -> u64 {
    items.iter().map(|item| item.value).sum()
}
