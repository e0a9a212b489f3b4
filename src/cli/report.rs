//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::ExpenseWiseResult;
use crate::reports;
use crate::services::PreferencesService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Headline figures: balance, totals, current month
    Dashboard,

    /// Income vs. expenses per month
    Monthly {
        /// How many trailing months to include
        #[arg(short, long, default_value = "6")]
        months: u32,
    },

    /// Expense breakdown by category
    Categories,
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> ExpenseWiseResult<()> {
    let currency = PreferencesService::new(storage).currency()?;
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Dashboard => {
            let summary = reports::dashboard_summary(storage, today)?;
            print!("{}", display::render_dashboard(&summary, currency));
        }

        ReportCommands::Monthly { months } => {
            let flows = reports::monthly_flows(storage, today, months)?;
            print!("{}", display::render_monthly(&flows, currency));
        }

        ReportCommands::Categories => {
            let breakdown = reports::expense_breakdown(storage)?;
            print!("{}", display::render_breakdown(&breakdown, currency));
        }
    }

    Ok(())
}
