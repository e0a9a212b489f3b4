//! Expense breakdown report
//!
//! Total spending per category across all expense transactions, largest
//! first.

use std::collections::HashMap;

use crate::error::ExpenseWiseResult;
use crate::storage::Storage;

/// Total spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub total: f64,
}

/// Aggregate all expense transactions by category, sorted by total
/// descending (ties alphabetical). Categories with no spending are omitted.
pub fn expense_breakdown(storage: &Storage) -> ExpenseWiseResult<Vec<CategorySpend>> {
    let transactions = storage.transactions.all()?;

    let mut totals: HashMap<String, f64> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }

    let mut breakdown: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(category, total)| CategorySpend { category, total })
        .collect();
    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    Ok(breakdown)
}
