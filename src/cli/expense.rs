//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, editing and deleting
//! expenses.

use chrono::Local;
use clap::Subcommand;
use tracing::info;

use super::{parse_amount, parse_date, parse_month};
use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseUpdate, NewExpense};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// What the money was spent on
        #[arg(short, long)]
        description: Option<String>,
        /// Date of the expense (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Show at most N expenses
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only show expenses from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show expense details
    Show {
        /// Expense ID (or a unique prefix of it)
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (or a unique prefix of it)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (or a unique prefix of it)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let category = resolve_category_name(store, &category);

            let mut input = NewExpense::new(amount, category, date);
            if let Some(description) = description {
                input = input.with_description(description.trim());
            }
            input
                .validate()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let expense = store.add_expense(input)?;
            info!(id = %expense.id, "Recorded expense");
            println!(
                "Expense added: {} for {} ({})",
                expense.amount.format_with_symbol(symbol),
                expense.category,
                expense.id.short()
            );
        }

        ExpenseCommands::List { limit, month } => {
            let mut expenses: Vec<&Expense> = match month {
                Some(m) => {
                    let (year, month) = parse_month(&m)?;
                    store.expenses_in_month(year, month)
                }
                None => store.expenses().iter().collect(),
            };
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!("{}", format_expense_table(&expenses, symbol, date_format));
        }

        ExpenseCommands::Show { id } => {
            let expense = store
                .find_expense(&id)
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;
            print!("{}", format_expense_details(expense, symbol, date_format));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let expense_id = store
                .find_expense(&id)
                .map(|e| e.id.clone())
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;

            let update = ExpenseUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category.map(|c| resolve_category_name(store, &c)),
                description: description.map(|d| d.trim().to_string()),
                date: date.as_deref().map(parse_date).transpose()?,
            };

            if update.is_empty() {
                println!(
                    "No changes specified. Use --amount, --category, --description, or --date."
                );
                return Ok(());
            }
            update
                .validate()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let updated = store
                .update_expense(&expense_id, &update)?
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;
            println!(
                "Expense updated: {} for {} ({})",
                updated.amount.format_with_symbol(symbol),
                updated.category,
                updated.id.short()
            );
        }

        ExpenseCommands::Delete { id } => {
            let expense = store
                .find_expense(&id)
                .cloned()
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;

            store.delete_expense(&expense.id)?;
            println!(
                "Expense deleted: {} for {}",
                expense.amount.format_with_symbol(symbol),
                expense.label()
            );
        }
    }

    Ok(())
}

/// Use the stored spelling when the input names a known category
///
/// Unknown names are kept as typed; expenses do not require a matching
/// category.
fn resolve_category_name<S: KeyValueStore>(store: &ExpenseStore<S>, input: &str) -> String {
    let input = input.trim();
    store
        .find_category(input)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| input.to_string())
}
