//! Expense display formatting
//!
//! Tables for the expense list and a detail view for a single expense.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[&Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\nStart tracking your expenses to see them here.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short().to_string(),
        date: e.date.format(date_format).to_string(),
        category: e.category.clone(),
        description: truncate(&e.description, 32),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Date:        {}\n", expense.date.format(date_format)));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "  Recorded:    {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::with_id(
            ExpenseId::from_string("0123456789abcdef"),
            NewExpense::new(
                Money::from_cents(2599),
                "Transportation",
                NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            )
            .with_description("Train tickets"),
        )
    }

    #[test]
    fn test_empty_table() {
        assert!(format_expense_table(&[], "$", "%Y-%m-%d").contains("No expenses yet"));
    }

    #[test]
    fn test_table_contents() {
        let expense = sample();
        let output = format_expense_table(&[&expense], "$", "%d/%m/%Y");

        assert!(output.contains("01234567"));
        assert!(!output.contains("0123456789abcdef"));
        assert!(output.contains("04/07/2025"));
        assert!(output.contains("Transportation"));
        assert!(output.contains("Train tickets"));
        assert!(output.contains("$25.99"));
    }

    #[test]
    fn test_long_descriptions_are_truncated() {
        let mut expense = sample();
        expense.description = "x".repeat(40);
        let output = format_expense_table(&[&expense], "$", "%Y-%m-%d");

        assert!(output.contains(&format!("{}…", "x".repeat(31))));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&sample(), "€", "%Y-%m-%d");
        assert!(output.contains("Expense: 0123456789abcdef"));
        assert!(output.contains("Amount:      €25.99"));
        assert!(output.contains("Description: Train tickets"));
    }
}
