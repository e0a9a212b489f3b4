//! Budget repository for JSON storage
//!
//! Persists the per-category limits as a bare JSON array. The Bills floor is
//! applied once on load, mirroring the original state initializer, and the
//! floored values are written back best-effort when they differ from what
//! was stored.

use std::path::PathBuf;
use std::sync::RwLock;

use log::warn;

use crate::allocator;
use crate::error::ExpenseWiseError;
use crate::models::{default_budgets, BudgetCategory};

use super::file_io::{read_json_or_else, write_json_atomic};

/// Repository for budget line persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<BudgetCategory>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk, falling back to the preset categories, and
    /// apply the Bills floor to the loaded snapshot
    pub fn load(&self) -> Result<(), ExpenseWiseError> {
        let saved: Vec<BudgetCategory> = read_json_or_else(&self.path, default_budgets);
        let floored = allocator::initialize_with_floor(&saved);
        let changed = floored != saved;

        {
            let mut data = self.data.write().map_err(|e| {
                ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *data = floored;
        }

        // The floor application is itself a state change; persist it so the
        // next load starts from compliant limits. Best-effort, like every
        // other write.
        if changed {
            if let Err(e) = self.save() {
                warn!("failed to persist floored budgets: {}", e);
            }
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all budget lines in stored order
    pub fn all(&self) -> Result<Vec<BudgetCategory>, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get one budget line by category name (case-sensitive, as stored)
    pub fn get(&self, category: &str) -> Result<Option<BudgetCategory>, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|b| b.category == category).cloned())
    }

    /// Overwrite one category's limit without touching the others.
    /// Returns false when the category has no budget line.
    pub fn set_limit(&self, category: &str, limit: f64) -> Result<bool, ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|b| b.category == category) {
            Some(line) => {
                line.limit = limit;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the whole budget snapshot (used by the allocator rescale)
    pub fn replace_all(&self, budgets: Vec<BudgetCategory>) -> Result<(), ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = budgets;
        Ok(())
    }
}
