//! CSV export
//!
//! Writes the transaction list as CSV, one row per transaction.

use std::io::Write;

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::storage::Storage;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseWiseResult<()> {
    let transactions = storage.transactions.all()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Type", "Amount"])
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;

    for txn in &transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.category.clone(),
                txn.kind.to_string(),
                format!("{}", txn.amount),
            ])
            .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;

    Ok(())
}
