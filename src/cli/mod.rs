//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.
//! Input is validated here; the store trusts what it is given.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Parse a user-entered amount such as "12", "12.50" or "$12.50"
pub(crate) fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input)
        .map_err(|e| ExpenseError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date '{}'. Expected format YYYY-MM-DD",
            input
        ))
    })
}

/// Parse a `YYYY-MM` month into (year, month)
pub(crate) fn parse_month(input: &str) -> ExpenseResult<(i32, u32)> {
    let invalid = || {
        ExpenseError::Validation(format!(
            "Invalid month '{}'. Expected format YYYY-MM",
            input
        ))
    };

    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("28/02/2025").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), (2025, 3));
        assert_eq!(parse_month(" 2024-12 ").unwrap(), (2024, 12));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("2025").is_err());
        assert!(parse_month("March").is_err());
    }
}
