//! Derived spending figures
//!
//! Pure functions over expense slices. Nothing here is cached; the store
//! calls these on every read.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

/// Sum of all amounts
pub fn total_amount<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Expenses dated in the same calendar month and year as `today`
pub fn expenses_in_month_of(expenses: &[Expense], today: NaiveDate) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|e| e.is_in_month(today.year(), today.month()))
        .collect()
}

/// Percentage of `budget` consumed by `spent`
///
/// Zero when the budget is not positive. Not capped at 100.
pub fn budget_progress(spent: Money, budget: Money) -> f64 {
    if !budget.is_positive() {
        return 0.0;
    }
    // Multiply before dividing so whole-percent results stay exact
    (spent.cents() as f64 * 100.0) / budget.cents() as f64
}

/// True only when progress is strictly above 100 percent
pub fn is_over_budget(progress: f64) -> bool {
    progress > 100.0
}

/// Budget figures for one month, as shown on the budget overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub budget: Money,
    pub spent: Money,
    /// `budget - spent`, negative once overspent
    pub remaining: Money,
    pub progress: f64,
    pub alert: bool,
}

impl BudgetStatus {
    pub fn new(spent: Money, budget: Money) -> Self {
        let progress = budget_progress(spent, budget);
        Self {
            budget,
            spent,
            remaining: budget - spent,
            progress,
            alert: is_over_budget(progress),
        }
    }

    /// How far spending exceeds the budget, when it does
    pub fn over_by(&self) -> Option<Money> {
        if self.alert {
            Some(self.spent - self.budget)
        } else {
            None
        }
    }

    /// Progress clamped to 0..=100, for progress bars
    pub fn bar_fill(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }
}
