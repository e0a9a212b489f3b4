//! JSON export
//!
//! Writes the full storage snapshot as pretty-printed JSON.

use std::io::Write;

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::storage::Storage;

use super::ExportSnapshot;

/// Export the full snapshot as JSON
pub fn export_snapshot_json<W: Write>(storage: &Storage, writer: W) -> ExpenseWiseResult<()> {
    let snapshot = ExportSnapshot::collect(storage)?;
    serde_json::to_writer_pretty(writer, &snapshot)
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpenseWisePaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_snapshot_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut output = Vec::new();
        export_snapshot_json(&storage, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["transactions"].is_array());
        assert_eq!(value["currency"], "INR");
        assert_eq!(value["budgets"].as_array().unwrap().len(), 8);
        assert_eq!(value["budget_preferences"]["budgetPercent"], 60);
    }
}
