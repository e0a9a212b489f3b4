//! Report display formatting

use crate::models::CurrencyOption;
use crate::reports::{CategorySpend, DashboardSummary, MonthlyFlow};

/// Render the dashboard summary block
pub fn render_dashboard(summary: &DashboardSummary, currency: &CurrencyOption) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Balance:    {}\n",
        currency.format_amount(summary.balance)
    ));
    output.push_str(&format!(
        "Total Income:     {}\n",
        currency.format_amount(summary.total_income)
    ));
    output.push_str(&format!(
        "Total Expenses:   {}\n",
        currency.format_amount(summary.total_expense)
    ));
    output.push_str(&format!(
        "Monthly Income:   {}\n",
        currency.format_amount(summary.monthly_income)
    ));
    output.push_str(&format!(
        "Monthly Expenses: {}\n",
        currency.format_amount(summary.monthly_expense)
    ));
    output.push_str(&format!("Transactions:     {}\n", summary.transaction_count));
    output
}

/// Render the monthly flow table, oldest month first
pub fn render_monthly(flows: &[MonthlyFlow], currency: &CurrencyOption) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>14} {:>14} {:>14}\n",
        "Month", "Income", "Expenses", "Savings"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for flow in flows {
        output.push_str(&format!(
            "{:>3} {:<6} {:>14} {:>14} {:>14}\n",
            flow.label,
            flow.year,
            currency.format_amount(flow.income),
            currency.format_amount(flow.expenses),
            currency.format_amount(flow.savings()),
        ));
    }

    output
}

/// Render the expense breakdown with each category's share of the total
pub fn render_breakdown(breakdown: &[CategorySpend], currency: &CurrencyOption) -> String {
    if breakdown.is_empty() {
        return "No expense data yet.\n".to_string();
    }

    let total: f64 = breakdown.iter().map(|c| c.total).sum();

    let mut output = String::new();
    output.push_str(&format!("{:15} {:>14} {:>7}\n", "Category", "Spent", "Share"));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for spend in breakdown {
        let share = if total > 0.0 {
            spend.total / total * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:15} {:>14} {:>6.1}%\n",
            spend.category,
            currency.format_amount(spend.total),
            share,
        ));
    }

    output.push_str(&"-".repeat(38));
    output.push('\n');
    output.push_str(&format!("{:15} {:>14}\n", "TOTAL", currency.format_amount(total)));
    output
}
