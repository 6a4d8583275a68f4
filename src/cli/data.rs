//! CLI commands for import and export
//!
//! Export writes `moneta-YYYY-MM-DD.json` into a directory or prints it;
//! import replaces the ledger with a previously exported document.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::MonetaResult;
use crate::export::{
    export_expenses, import_expenses, Delivery, DirectoryFileCreator, ImportOutcome,
    PathFilePicker, PlatformBridge,
};
use crate::storage::SlotStore;
use crate::store::LedgerStore;

/// Import/export subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export all expenses as JSON
    Export {
        /// Directory to write the export into (default: settings or current dir)
        #[arg(short, long, conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,
        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Replace all expenses with the contents of an export file
    Import {
        /// Path to a JSON export
        file: PathBuf,
    },
}

/// Handle import/export commands
pub fn handle_data_command<S: SlotStore>(
    store: &LedgerStore<S>,
    settings: &Settings,
    cmd: DataCommands,
) -> MonetaResult<()> {
    match cmd {
        DataCommands::Export { output_dir, stdout } => {
            let dir = output_dir
                .or_else(|| settings.export_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let creator = DirectoryFileCreator::new(dir);

            let bridge = if stdout {
                PlatformBridge::new()
            } else {
                PlatformBridge::new().with_file_creator(creator.clone())
            };

            match export_expenses(store, &bridge)? {
                Delivery::Created { filename } => {
                    let count = store.expenses()?.len();
                    println!(
                        "Exported {} expense(s) to: {}",
                        count,
                        creator.target(&filename).display()
                    );
                }
                Delivery::Fallback(document) => {
                    println!("{}", document.contents);
                }
            }
            Ok(())
        }

        DataCommands::Import { file } => {
            let bridge = PlatformBridge::new().with_file_picker(PathFilePicker::new(Some(file)));

            match import_expenses(store, &bridge)? {
                ImportOutcome::Imported(count) => {
                    println!("Imported {} expense(s); previous expenses were replaced.", count)
                }
                ImportOutcome::Cancelled => println!("Import cancelled."),
                ImportOutcome::Unavailable => println!("No file to import."),
            }
            Ok(())
        }
    }
}
