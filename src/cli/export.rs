//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::export;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions as CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full data snapshot as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full data snapshot as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn with_writer<F>(output: Option<PathBuf>, f: F) -> ExpenseWiseResult<()>
where
    F: FnOnce(&mut dyn Write) -> ExpenseWiseResult<()>,
{
    match output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                ExpenseWiseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            f(&mut file)?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> ExpenseWiseResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            with_writer(output, |w| export::export_transactions_csv(storage, w))
        }
        ExportCommands::Json { output } => {
            with_writer(output, |w| export::export_snapshot_json(storage, w))
        }
        ExportCommands::Yaml { output } => {
            with_writer(output, |w| export::export_snapshot_yaml(storage, w))
        }
    }
}
