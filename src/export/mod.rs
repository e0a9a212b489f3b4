//! Data export
//!
//! Writes the stored data out for use elsewhere: the full four-entry
//! snapshot as JSON or YAML, or the transaction list as CSV.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::export_snapshot_json;
pub use self::yaml::export_snapshot_yaml;

use serde::Serialize;

use crate::error::ExpenseWiseResult;
use crate::models::{BudgetCategory, BudgetPreferences, Transaction};
use crate::storage::Storage;

/// The four storage entries bundled into one exportable document
#[derive(Debug, Clone, Serialize)]
pub struct ExportSnapshot {
    pub transactions: Vec<Transaction>,
    pub currency: String,
    pub budgets: Vec<BudgetCategory>,
    pub budget_preferences: BudgetPreferences,
}

impl ExportSnapshot {
    /// Collect the current state of every storage entry
    pub fn collect(storage: &Storage) -> ExpenseWiseResult<Self> {
        Ok(Self {
            transactions: storage.transactions.all()?,
            currency: storage.currency.get()?,
            budgets: storage.budgets.all()?,
            budget_preferences: storage.preferences.get()?,
        })
    }
}
