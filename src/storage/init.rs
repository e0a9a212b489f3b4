//! Storage initialization
//!
//! Writes the default value for every storage entry that does not exist
//! yet, so a fresh data directory is fully populated.

use crate::config::paths::ExpenseWisePaths;
use crate::error::ExpenseWiseError;
use crate::models::{default_budgets, BudgetPreferences, Transaction, DEFAULT_CURRENCY};

use super::file_io::write_json_atomic;

/// Create the data directory and seed missing entries with their defaults.
/// Existing files are left untouched.
pub fn initialize_storage(paths: &ExpenseWisePaths) -> Result<(), ExpenseWiseError> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        let empty: Vec<Transaction> = Vec::new();
        write_json_atomic(paths.transactions_file(), &empty)?;
    }

    if !paths.budgets_file().exists() {
        write_json_atomic(paths.budgets_file(), &default_budgets())?;
    }

    if !paths.budget_preferences_file().exists() {
        write_json_atomic(paths.budget_preferences_file(), &BudgetPreferences::default())?;
    }

    if !paths.currency_file().exists() {
        write_json_atomic(paths.currency_file(), &DEFAULT_CURRENCY.to_string())?;
    }

    Ok(())
}
