//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Range and format
//! constraints that the original UI enforced (slider bounds, date pickers,
//! fixed selects) live here, not in the services.

pub mod budget;
pub mod currency;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
