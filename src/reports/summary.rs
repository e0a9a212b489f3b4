//! Dashboard summary
//!
//! All-time totals plus the current month's income and expenses.

use chrono::NaiveDate;

use crate::error::ExpenseWiseResult;
use crate::storage::Storage;

use super::monthly::month_bounds;

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expense: f64,
    /// All-time income minus all-time expenses; can be negative
    pub balance: f64,
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub transaction_count: usize,
}

/// Build the dashboard summary. `today` anchors the current-month window.
pub fn dashboard_summary(storage: &Storage, today: NaiveDate) -> ExpenseWiseResult<DashboardSummary> {
    let transactions = storage.transactions.all()?;
    let (month_start, month_end) = month_bounds(today);

    let mut summary = DashboardSummary {
        total_income: 0.0,
        total_expense: 0.0,
        balance: 0.0,
        monthly_income: 0.0,
        monthly_expense: 0.0,
        transaction_count: transactions.len(),
    };

    for txn in &transactions {
        let in_month = txn.date >= month_start && txn.date <= month_end;
        if txn.is_income() {
            summary.total_income += txn.amount;
            if in_month {
                summary.monthly_income += txn.amount;
            }
        } else {
            summary.total_expense += txn.amount;
            if in_month {
                summary.monthly_expense += txn.amount;
            }
        }
    }

    summary.balance = summary.total_income - summary.total_expense;
    Ok(summary)
}
