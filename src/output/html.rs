//! HTML output formatter for rendered reports.
//!
//! This module renders a report as a self-contained HTML document: a
//! preamble naming the requesting user, a table with one row per item, and
//! a closing total heading. Rows of items marked as priority carry a bold
//! font-weight style attribute.
//!
//! Item fields are emitted verbatim with no HTML escaping, the same
//! documented limitation as the CSV formatter.

use crate::data::{Item, User};
use crate::output::{total_value, Formatter};

/// Formatter for the `HTML` report format.
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn header(&self, user: &User) -> String {
        format!(
            "<html>\n<body>\n<h1>Relatorio de Itens</h1>\n<p>Usuario: {}</p>\n<table>\n<tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
            user.name
        )
    }

    fn body(&self, _user: &User, items: &[Item]) -> String {
        let mut body = String::new();
        for item in items {
            let row = if item.priority.unwrap_or(false) {
                format!(
                    "<tr style=\"font-weight: bold\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    item.id, item.name, item.value
                )
            } else {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    item.id, item.name, item.value
                )
            };
            body.push_str(&row);
        }
        body
    }

    fn footer(&self, items: &[Item]) -> String {
        format!(
            "</table>\n<h2>Total: {}</h2>\n</body>\n</html>\n",
            total_value(items)
        )
    }
}
