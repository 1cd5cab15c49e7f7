use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use expense_tracker::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_import_command, handle_report_command,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::display::format_summary;
use expense_tracker::logging::setup_logging;
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "Record what you spend, group it by category and see how this \
                  month compares to your budget, all from the command line."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(expense_tracker::cli::ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(expense_tracker::cli::CategoryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(expense_tracker::cli::BudgetCommands),

    /// Show the dashboard: totals, budget progress and recent expenses
    Summary,

    /// Spending reports
    #[command(subcommand)]
    Report(expense_tracker::cli::ReportCommands),

    /// Export data as CSV, JSON or YAML
    Export(expense_tracker::cli::ExportArgs),

    /// Restore data from a JSON or YAML export
    Import {
        /// Path to the export file
        file: PathBuf,
        /// Replace the current data (otherwise only preview)
        #[arg(long)]
        replace: bool,
    },

    /// Show current configuration and paths, or change display settings
    Config {
        /// Currency symbol printed before amounts
        #[arg(long)]
        currency_symbol: Option<String>,
        /// Date format (strftime, e.g. "%d/%m/%Y")
        #[arg(long)]
        date_format: Option<String>,
        /// Number of recent expenses on the summary
        #[arg(long)]
        recent_count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base = %paths.base_dir().display(), "Resolved data directory");

    let mut store = ExpenseStore::open(FileStore::new(paths.data_dir()));

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Summary) | None => {
            print!(
                "{}",
                format_summary(
                    store.total_expenses(),
                    &store.budget_status(),
                    store.recent_expenses(settings.recent_count),
                    &settings.currency_symbol,
                    &settings.date_format,
                )
            );
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&store, args)?;
        }
        Some(Commands::Import { file, replace }) => {
            handle_import_command(&mut store, &file, replace)?;
        }
        Some(Commands::Config {
            currency_symbol,
            date_format,
            recent_count,
        }) => {
            if currency_symbol.is_some() || date_format.is_some() || recent_count.is_some() {
                if let Some(symbol) = currency_symbol {
                    settings.currency_symbol = symbol;
                }
                if let Some(format) = date_format {
                    settings.date_format = format;
                }
                if let Some(count) = recent_count {
                    settings.recent_count = count;
                }
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
        }
    }

    Ok(())
}
