//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::TransactionType;
use crate::services::{PreferencesService, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (positive; the type carries the direction)
        amount: f64,
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: TransactionType,
        /// Category (fixed list per type; see 'expensewise config')
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only descriptions containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only this transaction type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one transaction in full
    Show {
        /// Transaction id (or unique prefix)
        id: String,
    },

    /// Edit a transaction (unspecified fields keep their value)
    Edit {
        /// Transaction id (or unique prefix)
        id: String,
        #[arg(short = 'D', long)]
        description: Option<String>,
        #[arg(short, long)]
        amount: Option<f64>,
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id (or unique prefix)
        id: String,
    },

    /// List the categories used by existing transactions
    Categories,
}

fn parse_date(input: &str) -> ExpenseWiseResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ExpenseWiseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", input)))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    cmd: TransactionCommands,
) -> ExpenseWiseResult<()> {
    let service = TransactionService::new(storage);
    let currency = PreferencesService::new(storage).currency()?;

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };

            let txn = service.add(description, amount, kind, category, date)?;
            println!(
                "Added {} transaction {} ({} in {})",
                txn.kind,
                txn.id.short(),
                currency.format_amount(txn.amount),
                txn.category
            );
        }

        TransactionCommands::List {
            search,
            kind,
            category,
        } => {
            let filter = TransactionFilter {
                search,
                kind,
                category,
            };
            let transactions = service.list(&filter)?;
            print!("{}", display::render_transactions(&transactions, currency));

            let stats = service.stats()?;
            println!(
                "{} transaction(s) total | Income: {} | Expenses: {}",
                stats.count,
                currency.format_amount(stats.total_income),
                currency.format_amount(stats.total_expense)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", display::render_transaction_details(&txn, currency));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let mut txn = service.find(&id)?;

            if let Some(description) = description {
                txn.description = description;
            }
            if let Some(amount) = amount {
                txn.amount = amount;
            }
            if let Some(kind) = kind {
                txn.kind = kind;
            }
            if let Some(category) = category {
                txn.category = category;
            }
            if let Some(raw) = date {
                txn.date = parse_date(&raw)?;
            }

            let txn = service.update(txn)?;
            println!("Updated transaction {}", txn.id.short());
        }

        TransactionCommands::Delete { id } => {
            let txn = service.find(&id)?;
            service.delete(txn.id)?;
            println!("Deleted transaction {} ('{}')", txn.id.short(), txn.description);
        }

        TransactionCommands::Categories => {
            let categories = service.used_categories()?;
            if categories.is_empty() {
                println!("No transactions yet.");
            } else {
                for category in categories {
                    println!("  {}", category);
                }
            }
        }
    }

    Ok(())
}
