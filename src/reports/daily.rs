//! Daily spending report
//!
//! Sums expenses per calendar day and keeps the most recent days that have
//! any spending (the bar chart data).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money};

/// Number of days shown by default
pub const DEFAULT_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Per-day totals in ascending date order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySpending {
    pub days: Vec<DayTotal>,
}

impl DailySpending {
    /// Keep the last `days` distinct dates that have expenses
    pub fn from_expenses<'a, I>(expenses: I, days: usize) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for expense in expenses {
            *by_date.entry(expense.date).or_default() += expense.amount;
        }

        let skip = by_date.len().saturating_sub(days);
        let days = by_date
            .into_iter()
            .skip(skip)
            .map(|(date, total)| DayTotal { date, total })
            .collect();

        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Largest single-day total, used to scale bars
    pub fn peak(&self) -> Money {
        self.days
            .iter()
            .map(|d| d.total)
            .max()
            .unwrap_or_default()
    }

    /// Render as a horizontal bar chart
    pub fn format_terminal(&self, symbol: &str, width: usize) -> String {
        if self.is_empty() {
            return "No expenses to display.\n".to_string();
        }

        let peak = self.peak().cents().max(1);
        let mut output = String::new();
        for day in &self.days {
            let filled = ((day.total.cents().max(0) as f64 / peak as f64) * width as f64).round()
                as usize;
            output.push_str(&format!(
                "{} {:>12} {}\n",
                day.date.format("%b %d"),
                day.total.format_with_symbol(symbol),
                "█".repeat(filled)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn expense(units: i64, day: u32) -> Expense {
        Expense::new(NewExpense::new(
            Money::from_units(units),
            "Other",
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        ))
    }

    #[test]
    fn test_sums_per_day_in_date_order() {
        let expenses = vec![expense(5, 9), expense(3, 2), expense(7, 9)];
        let daily = DailySpending::from_expenses(&expenses, DEFAULT_DAYS);

        assert_eq!(daily.days.len(), 2);
        assert_eq!(daily.days[0].date.to_string(), "2025-03-02");
        assert_eq!(daily.days[0].total, Money::from_units(3));
        assert_eq!(daily.days[1].total, Money::from_units(12));
        assert_eq!(daily.peak(), Money::from_units(12));
    }

    #[test]
    fn test_keeps_last_distinct_days() {
        let expenses: Vec<_> = (1..=10).map(|d| expense(1, d)).collect();
        let daily = DailySpending::from_expenses(&expenses, 7);

        assert_eq!(daily.days.len(), 7);
        assert_eq!(daily.days[0].date.to_string(), "2025-03-04");
        assert_eq!(daily.days[6].date.to_string(), "2025-03-10");
    }

    #[test]
    fn test_format_scales_bars() {
        let expenses = vec![expense(10, 1), expense(5, 2)];
        let output = DailySpending::from_expenses(&expenses, 7).format_terminal("$", 10);
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].starts_with("Mar 01"));
        assert!(lines[0].ends_with(&"█".repeat(10)));
        assert!(lines[1].ends_with(&format!(" {}", "█".repeat(5))));
    }

    #[test]
    fn test_empty() {
        let daily = DailySpending::from_expenses(&Vec::<Expense>::new(), 7);
        assert!(daily.is_empty());
        assert_eq!(daily.peak(), Money::zero());
    }
}
