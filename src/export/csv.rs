//! CSV Export functionality
//!
//! One row per expense, newest first, spreadsheet-compatible.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const HEADER: [&str; 6] = ["ID", "Date", "Category", "Description", "Amount", "Created At"];

/// Write `expenses` as CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category.clone(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.to_decimal()),
                expense.created_at.to_rfc3339(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};
    use chrono::NaiveDate;

    #[test]
    fn test_export_rows() {
        let expenses = vec![Expense::with_id(
            ExpenseId::from_string("abc"),
            NewExpense::new(
                Money::from_cents(1999),
                "Food & Dining",
                NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            )
            .with_description("Lunch, with \"friends\""),
        )];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Category,Description,Amount,Created At"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("abc,2025-04-02,Food & Dining,\"Lunch, with \"\"friends\"\"\",19.99,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap().trim_end(),
            "ID,Date,Category,Description,Amount,Created At"
        );
    }
}
