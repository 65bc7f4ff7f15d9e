//! Main entry point for the `ruport` CLI application.
//!
//! `ruport` renders a role-filtered report of line items as CSV or HTML
//! text. The binary is thin glue around the library pipeline:
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads item records from the JSON or CSV input file
//! - Delegates policy application and rendering to [`generate_report`]
//! - Emits the report on stdout or writes it to `--output`
//!
//! # Output Modes
//! - Report text on stdout (default)
//! - Report written to a file via `--output <file>`
//!
//! # Flags of Interest
//! - `--format csv|html`: Select the report format
//! - `--user NAME` / `--role ROLE`: The user the report is rendered for
//! - `--output FILE`: Write the report to a file

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use ruport::cli::Args;
use ruport::data::{Role, User};
use ruport::load::load_items;
use ruport::report::generate_report;

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse args → load items → generate_report → emit
    let user = User::new(args.user.clone(), Role::from(args.role.clone()));
    let items = load_items(&args.input)?;
    let report = generate_report(args.format.as_str(), &user, &items)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write report to '{}'", path))?;
            println!("Report saved to: {}", path);
        }
        None => println!("{}", report),
    }

    Ok(())
}
