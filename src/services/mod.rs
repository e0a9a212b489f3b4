//! Business logic layer
//!
//! Services borrow the storage coordinator and expose the mutation and
//! query methods the CLI drives. Every mutation is synchronous: validate,
//! apply to the snapshot, persist best-effort.

pub mod budget;
pub mod preferences;
pub mod transaction;

pub use budget::{BudgetOverview, BudgetService, CategoryBudgetStatus};
pub use preferences::PreferencesService;
pub use transaction::{TransactionFilter, TransactionService, TransactionStats};
