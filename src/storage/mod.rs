//! Storage layer for ExpenseWise
//!
//! Four independent JSON files under the data directory, one per storage
//! entry, with atomic writes. Loads never fail: missing or malformed data
//! yields the documented default for that entry. Writes are fire-and-forget;
//! a failed write is logged and otherwise ignored.

pub mod budgets;
pub mod file_io;
pub mod init;
pub mod preferences;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json_or_else, write_json_atomic};
pub use init::initialize_storage;
pub use preferences::{CurrencyRepository, PreferencesRepository};
pub use transactions::TransactionRepository;

use log::warn;

use crate::config::paths::ExpenseWisePaths;
use crate::error::ExpenseWiseError;

/// Main storage coordinator that owns all application state
///
/// Constructed once at process start; services borrow it to read snapshots
/// and apply mutations.
pub struct Storage {
    paths: ExpenseWisePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub preferences: PreferencesRepository,
    pub currency: CurrencyRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpenseWisePaths) -> Result<Self, ExpenseWiseError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            preferences: PreferencesRepository::new(paths.budget_preferences_file()),
            currency: CurrencyRepository::new(paths.currency_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpenseWisePaths {
        &self.paths
    }

    /// Load all entries from disk. Applies the Bills floor to the budgets
    /// snapshot as part of the load.
    pub fn load_all(&self) -> Result<(), ExpenseWiseError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.preferences.load()?;
        self.currency.load()?;
        Ok(())
    }

    /// Persist transactions, swallowing write failures
    pub fn persist_transactions(&self) {
        if let Err(e) = self.transactions.save() {
            warn!("failed to persist transactions: {}", e);
        }
    }

    /// Persist budgets, swallowing write failures
    pub fn persist_budgets(&self) {
        if let Err(e) = self.budgets.save() {
            warn!("failed to persist budgets: {}", e);
        }
    }

    /// Persist budget preferences, swallowing write failures
    pub fn persist_preferences(&self) {
        if let Err(e) = self.preferences.save() {
            warn!("failed to persist budget preferences: {}", e);
        }
    }

    /// Persist the currency selection, swallowing write failures
    pub fn persist_currency(&self) {
        if let Err(e) = self.currency.save() {
            warn!("failed to persist currency: {}", e);
        }
    }
}
