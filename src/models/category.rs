//! Category enumerations and budget lines
//!
//! Transactions draw their category from a fixed list that depends on the
//! transaction type. Budgets keep one line per expense category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::TransactionType;

/// The protected category whose limit the allocator keeps at or above 30%
/// of the total budget pool.
pub const BILLS_CATEGORY: &str = "Bills";

static EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

static INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Other",
];

/// The fixed category list for expense transactions
pub fn expense_categories() -> &'static [&'static str] {
    &EXPENSE_CATEGORIES
}

/// The fixed category list for income transactions
pub fn income_categories() -> &'static [&'static str] {
    &INCOME_CATEGORIES
}

/// The fixed category list for a transaction type
pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Check whether a category name is the protected Bills category.
/// Matching is case-insensitive.
pub fn is_bills(category: &str) -> bool {
    category.eq_ignore_ascii_case(BILLS_CATEGORY)
}

/// A single budget line: an expense category paired with its monthly limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name
    pub category: String,

    /// Monthly spending limit (non-negative, unit-less)
    pub limit: f64,
}

impl BudgetCategory {
    /// Create a new budget line
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Validate the budget line
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if !self.limit.is_finite() || self.limit < 0.0 {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}

/// The preset budget lines used when no budgets have been saved yet
pub fn default_budgets() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("Food", 5000.0),
        BudgetCategory::new("Transport", 3000.0),
        BudgetCategory::new("Shopping", 4000.0),
        BudgetCategory::new("Bills", 6000.0),
        BudgetCategory::new("Entertainment", 2000.0),
        BudgetCategory::new("Health", 3000.0),
        BudgetCategory::new("Education", 5000.0),
        BudgetCategory::new("Other", 2000.0),
    ]
}

/// Validation errors for budget lines
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit(f64),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::NegativeLimit(limit) => {
                write!(f, "Budget limit must be a non-negative number, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
