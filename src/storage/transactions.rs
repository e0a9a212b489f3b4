//! Transaction repository for JSON storage
//!
//! Keeps the full transaction list in memory, newest first, and persists it
//! as a bare JSON array to transactions.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseWiseError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_else, write_json_atomic};

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk; missing or malformed data yields an
    /// empty list
    pub fn load(&self) -> Result<(), ExpenseWiseError> {
        let loaded: Vec<Transaction> = read_json_or_else(&self.path, Vec::new);

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Add a transaction at the front of the list (newest first)
    pub fn add(&self, txn: Transaction) -> Result<(), ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(0, txn);
        Ok(())
    }

    /// Replace a transaction by id, keeping its position.
    /// Returns false when no transaction has the id.
    pub fn replace(&self, txn: Transaction) -> Result<bool, ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a transaction by id. Returns false when no transaction has
    /// the id.
    pub fn delete(&self, id: TransactionId) -> Result<bool, ExpenseWiseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() < before)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Find a transaction by a full id or a unique id prefix
    ///
    /// Returns a validation error when the prefix matches more than one
    /// transaction.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<Transaction>, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.iter().filter(|t| t.id.matches_prefix(prefix));
        let first = matches.next().cloned();
        if first.is_some() && matches.next().is_some() {
            return Err(ExpenseWiseError::Validation(format!(
                "Transaction id '{}' is ambiguous; give more characters",
                prefix
            )));
        }
        Ok(first)
    }

    /// Get all transactions in stored order (newest first)
    pub fn all(&self) -> Result<Vec<Transaction>, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, ExpenseWiseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(description: &str, amount: f64) -> Transaction {
        Transaction::new(
            description,
            amount,
            TransactionType::Expense,
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add(sample("first", 100.0)).unwrap();
        repo.add(sample("second", 200.0)).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all[0].description, "second");
        assert_eq!(all[1].description, "first");
    }

    #[test]
    fn test_replace_by_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = sample("before", 100.0);
        let id = txn.id;
        repo.add(txn).unwrap();

        let mut edited = sample("after", 250.0);
        edited.id = id;
        assert!(repo.replace(edited).unwrap());

        let stored = repo.get(id).unwrap().unwrap();
        assert_eq!(stored.description, "after");
        assert_eq!(stored.amount, 250.0);

        // Replacing an unknown id reports false
        assert!(!repo.replace(sample("ghost", 1.0)).unwrap());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = sample("to delete", 100.0);
        let id = txn.id;
        repo.add(txn).unwrap();

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = sample("lunch", 100.0);
        let id = txn.id;
        repo.add(txn).unwrap();

        let found = repo.find_by_prefix(&id.short()).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(repo.find_by_prefix("zzzzzzzz").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add(sample("persisted", 123.0)).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.all().unwrap()[0].description, "persisted");
    }

    #[test]
    fn test_stored_shape_is_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.add(sample("shape", 1.0)).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        assert!(raw.trim_start().starts_with('['));
    }
}
