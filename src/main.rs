use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, BudgetCommands,
    ExpenseCommands,
};
use expense_tracker::config::paths::{TrackerPaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Expense Tracker",
    long_about = "Record expenses, summarize spending by month or category, \
                  set monthly budgets and export everything to CSV."
)]
struct Cli {
    /// Directory holding settings and data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Budget(BudgetCommands),

    /// Export expenses to a CSV file
    Export {
        /// Filename for the exported CSV
        #[arg(long)]
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Commands that may write the settings file on first run
    fn persists_settings(&self) -> bool {
        match self {
            Commands::Expense(cmd) => cmd.is_mutation(),
            Commands::Budget(cmd) => cmd.is_mutation(),
            Commands::Export { .. } => false,
            Commands::Config => true,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - record expenses and track monthly budgets");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };

    // Read-only commands leave a fresh data directory untouched
    if command.persists_settings() && !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let storage = Storage::new(paths.clone());
    storage.load_all()?;

    match command {
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Export { file } => handle_export_command(&storage, &file)?,
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
            println!("  Id assignment:    {:?}", settings.id_assignment);
        }
    }

    Ok(())
}
