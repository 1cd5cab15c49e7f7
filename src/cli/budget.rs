//! Budget CLI commands
//!
//! Shows this month's progress against the monthly budget and changes it.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::summary::format_budget_status;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the monthly budget and this month's spending against it
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            print!("{}", format_budget_status(&store.budget_status(), symbol));
        }

        BudgetCommands::Set { amount } => {
            let budget = parse_amount(&amount)?;
            if !budget.is_positive() {
                return Err(ExpenseError::Validation(format!(
                    "Budget must be greater than zero, got {}",
                    budget.format_with_symbol(symbol)
                )));
            }

            store.set_budget(budget)?;
            println!(
                "Monthly budget updated to {}",
                budget.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
