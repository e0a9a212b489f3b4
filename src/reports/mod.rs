//! Analytics reports
//!
//! Read-only aggregations over the transaction history: the dashboard
//! summary, monthly income/expense flows, and the expense breakdown by
//! category. Reports take the reference date as a parameter so they stay
//! deterministic under test.

pub mod monthly;
pub mod spending;
pub mod summary;

pub use monthly::{monthly_flows, MonthlyFlow};
pub use spending::{expense_breakdown, CategorySpend};
pub use summary::{DashboardSummary, dashboard_summary};
