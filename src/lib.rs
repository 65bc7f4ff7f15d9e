//! Library crate for ruport
//!
//! This exposes the modules needed for testing and library usage.
//!
//! # Features
//!
//! - **Visibility Policy**: Role-based filtering and annotation of report items
//! - **Modular Output System**: Pluggable report formatters selected by a format key
//! - **Data Structures**: Core types like `Item`, `User`, and `Role`
//! - **Report Service**: The single `generate_report` entry point
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Item`, `User`, `Role`)
//! - [`policy`]: Role-based visibility rules applied before rendering
//! - [`output`]: Modular report formatters (CSV, HTML) and their registry
//! - [`report`]: The report service composing policy and rendering
//! - [`cli`]: Command-line interface definitions
//! - [`load`]: Item record loading for the CLI

pub mod cli;
pub mod data;
pub mod load;
pub mod output;
pub mod policy;
pub mod report;

pub use cli::Args;
pub use data::{Item, Role, User};
pub use output::{Formatter, ReportFormat, UnknownFormat};
pub use report::generate_report;
