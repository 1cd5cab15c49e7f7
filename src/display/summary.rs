//! Dashboard and budget formatting

use crate::models::{Expense, Money};
use crate::services::BudgetStatus;

const BAR_WIDTH: usize = 30;

pub const BUDGET_ALERT: &str = "Budget Alert: You've exceeded your monthly budget!";

/// Format the monthly budget with a progress bar
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly Budget: {}\n",
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:          {} / {}\n",
        status.spent.format_with_symbol(symbol),
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Progress:       [{}] {:.1}%\n",
        progress_bar(status.bar_fill()),
        status.progress
    ));

    if let Some(over) = status.over_by() {
        output.push_str(&format!("\n{}\n", BUDGET_ALERT));
        output.push_str(&format!(
            "You've exceeded your budget by {}\n",
            over.format_with_symbol(symbol)
        ));
    } else {
        output.push_str(&format!(
            "Remaining:      {}\n",
            status.remaining.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format the dashboard: totals, budget and the most recent expenses
pub fn format_summary(
    total: Money,
    status: &BudgetStatus,
    recent: &[Expense],
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Expenses: {}\n",
        total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "This Month:     {}\n",
        status.spent.format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&format_budget_status(status, symbol));

    output.push_str("\nRecent Expenses\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    if recent.is_empty() {
        output.push_str("No expenses yet.\n");
    } else {
        for expense in recent {
            output.push_str(&format!(
                "{}  {:<24} {:>12}\n",
                expense.date.format(date_format),
                truncate(expense.label(), 24),
                expense.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

fn progress_bar(fill: f64) -> String {
    let filled = ((fill / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
