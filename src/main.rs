use anyhow::Result;
use clap::{Parser, Subcommand};

use expensewise::cli::{
    handle_budget_command, handle_currency_command, handle_export_command, handle_report_command,
    handle_transaction_command, BudgetCommands, CurrencyCommands, ExportCommands, ReportCommands,
    TransactionCommands,
};
use expensewise::config::paths::ExpenseWisePaths;
use expensewise::models::{expense_categories, income_categories};
use expensewise::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expensewise",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "ExpenseWise tracks your income and expenses, keeps per-category \
                  budgets in step with your budget/savings split, and reports on \
                  where the money went. Everything is stored locally as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Analytics reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Export data as CSV, JSON, or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory with defaults
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = ExpenseWisePaths::new()?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tx(cmd)) => handle_transaction_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&storage, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing ExpenseWise at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Expense categories: {}", expense_categories().join(", "));
            println!("Income categories:  {}", income_categories().join(", "));
            println!();
            println!("Run 'expensewise budget show' to see the default budgets.");
        }
        Some(Commands::Config) => {
            println!("ExpenseWise Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();

            let currency = storage.currency.get()?;
            let prefs = storage.preferences.get()?;
            println!("Settings:");
            println!("  Currency:     {}", currency);
            println!("  Budget split: {}", prefs);
            println!();
            println!("Expense categories: {}", expense_categories().join(", "));
            println!("Income categories:  {}", income_categories().join(", "));
        }
        None => {
            println!("ExpenseWise - Terminal-based personal finance tracker");
            println!();
            println!("Run 'expensewise --help' for usage information.");
            println!("Run 'expensewise tx add' to log your first transaction.");
        }
    }

    Ok(())
}
