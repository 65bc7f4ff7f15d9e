//! Report service composing policy and rendering.
//!
//! [`generate_report`] is the single entry point of the pipeline. It wires
//! the two halves together in a fixed direction: resolve the requested
//! formatter, apply the user's visibility policy, render. The formatter
//! registry knows nothing about the policy, and the policy knows nothing
//! about output formats.

use crate::data::{Item, User};
use crate::output::{self, UnknownFormat};
use crate::policy;

/// Generates the report text for `user` over `items` in the requested
/// format.
///
/// # Arguments
/// * `format` - Wire key of the report format, `"CSV"` or `"HTML"`
/// * `user` - The requesting user; their role decides item visibility
/// * `items` - Item records in presentation order, not yet policy-filtered
///
/// # Returns
/// The rendered report text, trimmed of leading and trailing whitespace.
///
/// # Errors
/// Returns [`UnknownFormat`] when `format` names no registered formatter.
/// Every other input, including an empty item list and a user with an
/// unrecognized role, renders without error.
pub fn generate_report(
    format: &str,
    user: &User,
    items: &[Item],
) -> Result<String, UnknownFormat> {
    let formatter = output::resolve(format)?;
    let visible = policy::apply(user, items);
    Ok(formatter.render(user, &visible))
}
