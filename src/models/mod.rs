//! Core data models for ExpenseWise
//!
//! Defines the entities persisted to storage (transactions, budget
//! categories, preferences) and the fixed enumerations they draw from
//! (category lists, currency options).

pub mod category;
pub mod currency;
pub mod ids;
pub mod preferences;
pub mod transaction;

pub use category::{
    categories_for, default_budgets, expense_categories, income_categories, is_bills,
    BudgetCategory, BudgetValidationError, BILLS_CATEGORY,
};
pub use currency::{CurrencyOption, CURRENCIES, DEFAULT_CURRENCY};
pub use ids::TransactionId;
pub use preferences::{BudgetPreferences, PreferencesValidationError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
