//! Currency CLI commands

use clap::Subcommand;

use crate::error::ExpenseWiseResult;
use crate::models::CURRENCIES;
use crate::services::PreferencesService;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the active display currency
    Show,

    /// List all selectable currencies
    List,

    /// Select the display currency
    ///
    /// Affects formatting only; stored amounts do not change.
    Set {
        /// Currency code (e.g. INR, USD)
        code: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(storage: &Storage, cmd: CurrencyCommands) -> ExpenseWiseResult<()> {
    let service = PreferencesService::new(storage);

    match cmd {
        CurrencyCommands::Show => {
            let currency = service.currency()?;
            println!("Active currency: {}", currency);
        }

        CurrencyCommands::List => {
            let active = service.currency()?;
            for option in &CURRENCIES {
                let marker = if option.code == active.code {
                    " <- active"
                } else {
                    ""
                };
                println!("  {}{}", option, marker);
            }
        }

        CurrencyCommands::Set { code } => {
            let currency = service.set_currency(&code)?;
            println!("Display currency set to {}", currency);
        }
    }

    Ok(())
}
