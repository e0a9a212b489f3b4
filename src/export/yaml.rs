//! YAML export
//!
//! Writes the full storage snapshot as YAML.

use std::io::Write;

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::storage::Storage;

use super::ExportSnapshot;

/// Export the full snapshot as YAML
pub fn export_snapshot_yaml<W: Write>(storage: &Storage, writer: W) -> ExpenseWiseResult<()> {
    let snapshot = ExportSnapshot::collect(storage)?;
    serde_yaml::to_writer(writer, &snapshot)
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))
}
