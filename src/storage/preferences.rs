//! Preference repositories for JSON storage
//!
//! Two small single-value stores: the budget/savings split and the active
//! display currency code. Each lives in its own file so the four storage
//! entries stay independent.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseWiseError;
use crate::models::{BudgetPreferences, DEFAULT_CURRENCY};

use super::file_io::{read_json_or_else, write_json_atomic};

/// Repository for the budget/savings split
pub struct PreferencesRepository {
    path: PathBuf,
    data: RwLock<BudgetPreferences>,
}

impl PreferencesRepository {
    /// Create a new preferences repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetPreferences::default()),
        }
    }

    /// Load preferences from disk, falling back to the 60/40 default
    pub fn load(&self) -> Result<(), ExpenseWiseError> {
        let loaded = read_json_or_else(&self.path, BudgetPreferences::default);

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<(), ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the current split
    pub fn get(&self) -> Result<BudgetPreferences, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*data)
    }

    /// Set the current split
    pub fn set(&self, prefs: BudgetPreferences) -> Result<(), ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = prefs;
        Ok(())
    }
}

/// Repository for the active display currency code
pub struct CurrencyRepository {
    path: PathBuf,
    data: RwLock<String>,
}

impl CurrencyRepository {
    /// Create a new currency repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(DEFAULT_CURRENCY.to_string()),
        }
    }

    /// Load the currency code from disk, falling back to INR
    pub fn load(&self) -> Result<(), ExpenseWiseError> {
        let loaded: String = read_json_or_else(&self.path, || DEFAULT_CURRENCY.to_string());

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    /// Save the currency code to disk
    pub fn save(&self) -> Result<(), ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the stored currency code
    pub fn get(&self) -> Result<String, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Set the stored currency code
    pub fn set(&self, code: impl Into<String>) -> Result<(), ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = code.into();
        Ok(())
    }
}
