//! Budget CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::services::{BudgetService, PreferencesService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget overview (limits vs. spending)
    Show,

    /// Overwrite one category's monthly limit
    ///
    /// This is a manual override: no redistribution happens and the Bills
    /// floor is not re-enforced until the next split change.
    Set {
        /// Category name
        category: String,
        /// New monthly limit (non-negative)
        limit: f64,
    },

    /// Change the budget/savings split and rescale all limits
    Split {
        /// Budget percentage (10-90 in steps of 5); savings gets the rest
        percent: u8,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> ExpenseWiseResult<()> {
    let service = BudgetService::new(storage);
    let preferences = PreferencesService::new(storage);
    let currency = preferences.currency()?;

    match cmd {
        BudgetCommands::Show => {
            let prefs = preferences.budget_preferences()?;
            println!("Budget split: {}", prefs);
            println!();

            let overview = service.overview()?;
            print!("{}", display::render_budget_overview(&overview, currency));
        }

        BudgetCommands::Set { category, limit } => {
            let line = service.set_category_limit(&category, limit)?;
            println!(
                "Set '{}' limit to {}",
                line.category,
                currency.format_amount(line.limit)
            );
        }

        BudgetCommands::Split { percent } => {
            // The original slider runs 10-90 in steps of 5; the allocator
            // itself accepts anything, so the bounds live here.
            if !(10..=90).contains(&percent) {
                return Err(ExpenseWiseError::Validation(format!(
                    "Budget percentage must be between 10 and 90, got {}",
                    percent
                )));
            }
            if percent % 5 != 0 {
                return Err(ExpenseWiseError::Validation(format!(
                    "Budget percentage must be a multiple of 5, got {}",
                    percent
                )));
            }

            let budgets = service.apply_budget_split(percent)?;
            let prefs = preferences.budget_preferences()?;
            let total: f64 = budgets.iter().map(|b| b.limit).sum();

            println!("Budget split updated: {}", prefs);
            println!(
                "Rescaled {} category limits; new total budget: {}",
                budgets.len(),
                currency.format_amount(total)
            );
        }
    }

    Ok(())
}
