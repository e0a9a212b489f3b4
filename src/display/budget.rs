//! Budget overview display formatting

use crate::models::CurrencyOption;
use crate::services::BudgetOverview;

const BAR_WIDTH: usize = 20;

/// Render a text progress bar for a usage percentage (0-100)
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Marker for categories running hot
fn status_marker(percent: f64) -> &'static str {
    if percent >= 90.0 {
        "⚠"
    } else if percent >= 70.0 {
        "~"
    } else {
        ""
    }
}

/// Render the full budget overview: totals, then one line per category
pub fn render_budget_overview(overview: &BudgetOverview, currency: &CurrencyOption) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Budget: {}   Total Spent: {}   Remaining: {}\n",
        currency.format_amount(overview.total_budget),
        currency.format_amount(overview.total_spent),
        currency.format_amount(overview.remaining),
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for status in &overview.categories {
        output.push_str(&format!(
            "{:15} {:>12} / {:<12} {} {:>3.0}% {}\n",
            status.category,
            currency.format_amount(status.spent),
            currency.format_amount(status.limit),
            progress_bar(status.percent_used),
            status.percent_used,
            status_marker(status.percent_used),
        ));
    }

    output
}
