//! CLI commands for reports
//!
//! Category breakdown and daily spending, printed as terminal tables.

use clap::Subcommand;

use super::parse_month;
use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::reports::{daily::DEFAULT_DAYS, DailySpending, SpendingReport};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

const BAR_WIDTH: usize = 40;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category
    Spending {
        /// Only include expenses from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Spending per day for the most recent days with expenses
    Daily {
        /// Number of days to show
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: usize,
    },
}

/// Handle report commands
pub fn handle_report_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Spending { month, top } => {
            let expenses: Vec<&Expense> = match &month {
                Some(m) => {
                    let (year, month) = parse_month(m)?;
                    store.expenses_in_month(year, month)
                }
                None => store.expenses().iter().collect(),
            };
            let report = SpendingReport::from_expenses(expenses, store.categories());

            match &month {
                Some(m) => println!("Spending by Category ({})\n", m.trim()),
                None => println!("Spending by Category\n"),
            }

            match top {
                Some(limit) if !report.is_empty() => {
                    for (rank, slice) in report.top_categories(limit).iter().enumerate() {
                        println!(
                            "{:>2}. {:<28} {:>12} {:>6.1}%",
                            rank + 1,
                            slice.category,
                            slice.total.format_with_symbol(symbol),
                            slice.percentage
                        );
                    }
                }
                _ => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Daily { days } => {
            let daily = DailySpending::from_expenses(store.expenses(), days);
            println!("Daily Spending\n");
            print!("{}", daily.format_terminal(symbol, BAR_WIDTH));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_invalid_month_is_rejected() {
        let store = ExpenseStore::open(MemoryStore::new());
        let result = handle_report_command(
            &store,
            &Settings::default(),
            ReportCommands::Spending {
                month: Some("2025-00".into()),
                top: None,
            },
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_reports_on_empty_store() {
        let store = ExpenseStore::open(MemoryStore::new());
        let settings = Settings::default();
        handle_report_command(&store, &settings, ReportCommands::Daily { days: 7 }).unwrap();
        handle_report_command(
            &store,
            &settings,
            ReportCommands::Spending {
                month: None,
                top: Some(3),
            },
        )
        .unwrap();
    }
}
