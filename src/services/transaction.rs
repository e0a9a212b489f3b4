//! Transaction service
//!
//! Business logic for creating, replacing, deleting, and querying
//! transactions. Every mutation validates, applies to the in-memory
//! snapshot, and then persists best-effort.

use chrono::NaiveDate;

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Filters applied to a transaction listing; all are optional and combine
/// with AND
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match against the description
    pub search: Option<String>,
    /// Restrict to one transaction type
    pub kind: Option<TransactionType>,
    /// Restrict to one category
    pub category: Option<String>,
}

impl TransactionFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = &self.search {
            if !txn
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        true
    }
}

/// Aggregate figures over all transactions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionStats {
    pub count: usize,
    pub total_income: f64,
    pub total_expense: f64,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new transaction
    pub fn add(
        &self,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> ExpenseWiseResult<Transaction> {
        let txn = Transaction::new(description, amount, kind, category, date);
        txn.validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        self.storage.transactions.add(txn.clone())?;
        self.storage.persist_transactions();
        Ok(txn)
    }

    /// Replace an existing transaction wholesale, keyed on its id
    pub fn update(&self, txn: Transaction) -> ExpenseWiseResult<Transaction> {
        txn.validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        if !self.storage.transactions.replace(txn.clone())? {
            return Err(ExpenseWiseError::transaction_not_found(txn.id.to_string()));
        }

        self.storage.persist_transactions();
        Ok(txn)
    }

    /// Delete a transaction by id
    pub fn delete(&self, id: TransactionId) -> ExpenseWiseResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(ExpenseWiseError::transaction_not_found(id.to_string()));
        }

        self.storage.persist_transactions();
        Ok(())
    }

    /// Resolve a full id or unique id prefix to a transaction
    pub fn find(&self, reference: &str) -> ExpenseWiseResult<Transaction> {
        self.storage
            .transactions
            .find_by_prefix(reference)?
            .ok_or_else(|| ExpenseWiseError::transaction_not_found(reference))
    }

    /// List transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> ExpenseWiseResult<Vec<Transaction>> {
        let all = self.storage.transactions.all()?;
        Ok(all.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Distinct categories used by existing transactions, sorted
    pub fn used_categories(&self) -> ExpenseWiseResult<Vec<String>> {
        let all = self.storage.transactions.all()?;
        let mut categories: Vec<String> = all.into_iter().map(|t| t.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Aggregate stats over all transactions
    pub fn stats(&self) -> ExpenseWiseResult<TransactionStats> {
        let all = self.storage.transactions.all()?;
        let total_income = all.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
        let total_expense = all
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Ok(TransactionStats {
            count: all.len(),
            total_income,
            total_expense,
        })
    }
}
