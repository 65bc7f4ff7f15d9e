//! CSV output formatter for rendered reports.
//!
//! This module renders the fixed comma-separated report layout: a literal
//! column header line, one line per item, and a trailing total block.
//!
//! Field values are emitted verbatim. Commas or line breaks inside item
//! names are not escaped or quoted; that is a documented limitation of the
//! format, and consumers that need strict CSV must sanitize item names
//! upstream.

use crate::data::{Item, User};
use crate::output::{total_value, Formatter};

/// Formatter for the `CSV` report format.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn header(&self, _user: &User) -> String {
        "ID,NOME,VALOR,USUARIO\n".to_string()
    }

    fn body(&self, user: &User, items: &[Item]) -> String {
        let mut body = String::new();
        for item in items {
            body.push_str(&format!(
                "{},{},{},{}\n",
                item.id, item.name, item.value, user.name
            ));
        }
        body
    }

    fn footer(&self, items: &[Item]) -> String {
        format!("\nTotal,,\n{},,\n", total_value(items))
    }
}
