use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use moneta::cli::{handle_data_command, handle_expense_command, DataCommands, ExpenseCommands};
use moneta::config::{MonetaPaths, Settings};
use moneta::storage::{ExpenseRepository, FileSlotStore};
use moneta::store::LedgerStore;
use moneta::MonetaError;

#[derive(Parser)]
#[command(
    name = "moneta",
    version,
    about = "Personal expense ledger",
    long_about = "Moneta records what you spend, shows monthly totals and moves \
                  the whole ledger in and out as portable JSON."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Data(DataCommands),

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(paths: &MonetaPaths, settings: &Settings) -> Result<LedgerStore<FileSlotStore>> {
    let slots = FileSlotStore::new(paths.data_dir());
    let store = LedgerStore::open(ExpenseRepository::new(slots))?;

    if let Some(warning) = store.snapshot()?.warning {
        eprintln!("Warning: {}", warning);
        store.dismiss_warning()?;
    }
    if settings.show_amounts {
        store.toggle_amounts()?;
    }

    Ok(store)
}

fn print_config(paths: &MonetaPaths, settings: &Settings) {
    println!("Moneta Configuration");
    println!("====================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Show amounts:    {}", settings.show_amounts);
    match &settings.export_dir {
        Some(dir) => println!("  Export dir:      {}", dir.display()),
        None => println!("  Export dir:      (current directory)"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = MonetaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Paths resolved");

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_data_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => print_config(&paths, &settings),
        None => {
            println!("Moneta - personal expense ledger");
            println!();
            println!("Run 'moneta --help' for usage information.");
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        if let Some(MonetaError::ImportValidation(records)) = err.downcast_ref::<MonetaError>() {
            for record in records {
                eprintln!("  {}", record);
            }
        }
        std::process::exit(1);
    }
}
