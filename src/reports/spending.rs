//! Spending Report
//!
//! Groups expenses by category name. This is the data behind the category
//! pie chart: one slice per distinct category string, in order of first
//! appearance, with a display color.

use crate::models::{Category, Expense, Money};

/// Colors handed out to slices whose category no longer exists
pub const CHART_PALETTE: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#8b5cf6", "#6b7280", "#ec4899",
];

/// Spending for one category name
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of the report total, 0-100
    pub percentage: f64,
    pub color: String,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    pub slices: Vec<CategorySpending>,
    pub total: Money,
    pub expense_count: usize,
}

impl SpendingReport {
    /// Build the breakdown for `expenses`
    ///
    /// Expenses are matched to categories by exact name. A name shared by
    /// several categories takes the first one's color. Palette colors are
    /// only used for names with no matching category.
    pub fn from_expenses<'a, I>(expenses: I, categories: &[Category]) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut slices: Vec<CategorySpending> = Vec::new();
        let mut total = Money::zero();
        let mut expense_count = 0;

        for expense in expenses {
            total += expense.amount;
            expense_count += 1;

            match slices.iter_mut().find(|s| s.category == expense.category) {
                Some(slice) => {
                    slice.total += expense.amount;
                    slice.count += 1;
                }
                None => {
                    let color = categories
                        .iter()
                        .find(|c| c.name == expense.category)
                        .map(|c| c.color.clone())
                        .unwrap_or_else(|| {
                            CHART_PALETTE[slices.len() % CHART_PALETTE.len()].to_string()
                        });
                    slices.push(CategorySpending {
                        category: expense.category.clone(),
                        total: expense.amount,
                        count: 1,
                        percentage: 0.0,
                        color,
                    });
                }
            }
        }

        for slice in &mut slices {
            slice.percentage = if total.is_positive() {
                (slice.total.cents() as f64 / total.cents() as f64) * 100.0
            } else {
                0.0
            };
        }

        Self {
            slices,
            total,
            expense_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slices ordered by total, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategorySpending> {
        let mut sorted: Vec<_> = self.slices.iter().collect();
        sorted.sort_by(|a, b| b.total.cmp(&a.total));
        sorted.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses to display.\nAdd some expenses to see the breakdown.\n"
                .to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<28} {:>12} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", "Color"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<28} {:>12} {:>6} {:>6.1}%  {}\n",
                truncate(&slice.category, 28),
                slice.total.format_with_symbol(symbol),
                slice.count,
                slice.percentage,
                slice.color
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>6}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol),
            self.expense_count
        ));

        output
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
