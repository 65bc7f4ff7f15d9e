//! Item record loading for the `ruport` binary.
//!
//! The report core operates on in-memory [`Item`] lists supplied by its
//! caller; this module is the file-based supplier used by the CLI. It
//! reads item records from JSON or CSV files, dispatching on the file
//! extension.
//!
//! Files are parsed through a loader-local record carrying only the
//! caller-supplied fields (`id`, `name`, `value`). The derived `priority`
//! marker is not part of the input shape: a `priority` field or column in
//! an input file is ignored, never loaded into the items.

use crate::data::Item;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Input shape of one item record.
///
/// Annotations are derived by the visibility policy at render time, so the
/// input shape has no `priority` field and files cannot pre-annotate items.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: u64,
    name: String,
    value: u64,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.id, record.name, record.value)
    }
}

/// Loads item records from `path`.
///
/// # Arguments
/// * `path` - Path to a `.json` or `.csv` file of item records
///
/// # Returns
/// * `Result<Vec<Item>>` - The items in file order, none of them annotated
///
/// # Errors
/// Returns an error when the file cannot be read, when a record does not
/// match the input shape, or when the extension is neither `json` nor
/// `csv`.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!(
            "Unsupported items file '{}': expected a .json or .csv extension",
            path.display()
        ),
    }
}

/// Reads a JSON array of item records.
fn load_json(path: &Path) -> Result<Vec<Item>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file '{}'", path.display()))?;

    let records: Vec<ItemRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid item records in '{}'", path.display()))?;

    Ok(records.into_iter().map(Item::from).collect())
}

/// Reads a headered CSV file of item records.
fn load_csv(path: &Path) -> Result<Vec<Item>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to read items file '{}'", path.display()))?;

    let mut items = Vec::new();
    for record in reader.deserialize() {
        let record: ItemRecord =
            record.with_context(|| format!("Invalid item record in '{}'", path.display()))?;
        items.push(Item::from(record));
    }

    Ok(items)
}
