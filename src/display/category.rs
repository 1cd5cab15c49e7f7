//! Category display formatting

use crate::models::{Category, Expense, Money};

/// Format categories with how much has been spent under each name
pub fn format_category_list(categories: &[Category], expenses: &[Expense], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<7}  {:>10}  {:>12}  {}\n",
        "Category",
        "Color",
        "Budget",
        "Spent",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<7}  {:->10}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        let budget = category
            .budget
            .map(|b| b.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string());
        let spent: Money = expenses
            .iter()
            .filter(|e| e.category == category.name)
            .map(|e| e.amount)
            .sum();

        output.push_str(&format!(
            "{:<width$}  {:<7}  {:>10}  {:>12}  {}\n",
            category.name,
            category.color,
            budget,
            spent.format_with_symbol(symbol),
            category.id.short(),
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:     {}\n", category.id));
    output.push_str(&format!("  Color:  {}\n", category.color));
    if let Some(budget) = category.budget {
        output.push_str(&format!("  Budget: {}\n", budget.format_with_symbol(symbol)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    #[test]
    fn test_format_empty_list() {
        assert!(format_category_list(&[], &[], "$").contains("No categories found"));
    }

    #[test]
    fn test_list_shows_spending_per_name() {
        let categories = Category::defaults();
        let expenses = vec![Expense::new(NewExpense::new(
            Money::from_cents(4550),
            "Entertainment",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ))];

        let output = format_category_list(&categories, &expenses, "$");
        let line = output
            .lines()
            .find(|l| l.starts_with("Entertainment"))
            .unwrap();
        assert!(line.contains("#22c55e"));
        assert!(line.contains("$45.50"));
    }

    #[test]
    fn test_details_include_budget_when_set() {
        let mut category = Category::defaults().remove(0);
        assert!(!format_category_details(&category, "$").contains("Budget"));

        category.budget = Some(Money::from_units(200));
        assert!(format_category_details(&category, "$").contains("Budget: $200.00"));
    }
}
