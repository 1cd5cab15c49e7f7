//! Expense store
//!
//! Holds the canonical expenses, categories and monthly budget, writes each
//! collection through to a [`KeyValueStore`] after every mutation, and
//! derives the summary figures (totals, budget progress, alert) on read.
//!
//! The store does not validate input. Callers check `NewExpense::validate`
//! and friends before handing data over.

use chrono::{Local, NaiveDate};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ExpenseResult;
use crate::models::{
    Category, CategoryId, CategoryUpdate, Expense, ExpenseId, ExpenseUpdate, Money, NewCategory,
    NewExpense,
};
use crate::storage::{load_json, save_json, KeyValueStore, BUDGET_KEY, CATEGORIES_KEY, EXPENSES_KEY};

use super::aggregate::{self, BudgetStatus};

/// Monthly budget used until the user sets one
pub const DEFAULT_BUDGET: Money = Money::from_units(1000);

/// A point-in-time copy of the three persisted collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub budget: Money,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,
}

/// In-memory expense state mirrored to durable storage
pub struct ExpenseStore<S: KeyValueStore> {
    backend: S,
    /// Newest first
    expenses: Vec<Expense>,
    categories: Vec<Category>,
    budget: Money,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Restore state from `backend`
    ///
    /// Each key that is missing keeps its default. A key that cannot be read
    /// or parsed also keeps its default, with a warning. Opening never writes.
    pub fn open(backend: S) -> Self {
        let expenses = load_or_default(&backend, EXPENSES_KEY, Vec::new);
        let categories = load_or_default(&backend, CATEGORIES_KEY, Category::defaults);
        let budget = load_or_default(&backend, BUDGET_KEY, || DEFAULT_BUDGET);

        info!(
            expenses = expenses.len(),
            categories = categories.len(),
            budget = %budget,
            "Opened expense store"
        );

        Self {
            backend,
            expenses,
            categories,
            budget,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    // === Read accessors ===

    /// All expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    /// The first `count` expenses in newest-first order
    pub fn recent_expenses(&self, count: usize) -> &[Expense] {
        &self.expenses[..count.min(self.expenses.len())]
    }

    pub fn get_expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn get_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Find an expense by full id, or by an id prefix that matches exactly one
    pub fn find_expense(&self, identifier: &str) -> Option<&Expense> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }
        if let Some(expense) = self.expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Some(expense);
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Some(expense),
            _ => None,
        }
    }

    /// Find a category by id, then by case-insensitive name
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        self.categories
            .iter()
            .find(|c| c.id.as_str() == identifier)
            .or_else(|| self.categories.iter().find(|c| c.matches_name(identifier)))
    }

    /// Expenses dated in the given calendar month, newest first
    pub fn expenses_in_month(&self, year: i32, month: u32) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.is_in_month(year, month))
            .collect()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            budget: self.budget,
            categories: self.categories.clone(),
            expenses: self.expenses.clone(),
        }
    }

    // === Derived aggregates ===

    /// Sum of every expense amount
    pub fn total_expenses(&self) -> Money {
        aggregate::total_amount(&self.expenses)
    }

    /// Expenses in the current calendar month (local time)
    pub fn this_month_expenses(&self) -> Vec<&Expense> {
        self.this_month_expenses_at(today())
    }

    pub fn this_month_expenses_at(&self, today: NaiveDate) -> Vec<&Expense> {
        aggregate::expenses_in_month_of(&self.expenses, today)
    }

    pub fn this_month_total(&self) -> Money {
        self.this_month_total_at(today())
    }

    pub fn this_month_total_at(&self, today: NaiveDate) -> Money {
        aggregate::total_amount(self.this_month_expenses_at(today))
    }

    /// Percentage of the budget spent this month; 0 when the budget is not positive
    pub fn budget_progress(&self) -> f64 {
        self.budget_progress_at(today())
    }

    pub fn budget_progress_at(&self, today: NaiveDate) -> f64 {
        aggregate::budget_progress(self.this_month_total_at(today), self.budget)
    }

    /// True when this month's spending is above the budget
    pub fn budget_alert(&self) -> bool {
        self.budget_alert_at(today())
    }

    pub fn budget_alert_at(&self, today: NaiveDate) -> bool {
        aggregate::is_over_budget(self.budget_progress_at(today))
    }

    pub fn budget_status(&self) -> BudgetStatus {
        self.budget_status_at(today())
    }

    pub fn budget_status_at(&self, today: NaiveDate) -> BudgetStatus {
        BudgetStatus::new(self.this_month_total_at(today), self.budget)
    }

    // === Expense mutations ===

    /// Record a new expense at the front of the list
    ///
    /// On a failed write the expense stays in memory and the storage error
    /// is returned.
    pub fn add_expense(&mut self, input: NewExpense) -> ExpenseResult<Expense> {
        let id = self.fresh_expense_id();
        let expense = Expense::with_id(id, input);
        debug!(id = %expense.id, amount = %expense.amount, category = %expense.category, "Adding expense");

        self.expenses.insert(0, expense.clone());
        self.persist_expenses()?;
        Ok(expense)
    }

    /// Merge `update` into the expense with `id`
    ///
    /// Returns `Ok(None)` without writing when no expense has that id.
    pub fn update_expense(
        &mut self,
        id: &ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<Option<Expense>> {
        let Some(expense) = self.expenses.iter_mut().find(|e| &e.id == id) else {
            debug!(%id, "Update skipped, expense not found");
            return Ok(None);
        };
        update.apply_to(expense);
        let updated = expense.clone();
        debug!(%id, "Updated expense");

        self.persist_expenses()?;
        Ok(Some(updated))
    }

    /// Remove the expense with `id`; returns whether one was removed
    pub fn delete_expense(&mut self, id: &ExpenseId) -> ExpenseResult<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| &e.id != id);
        if self.expenses.len() == before {
            debug!(%id, "Delete skipped, expense not found");
            return Ok(false);
        }
        debug!(%id, "Deleted expense");

        self.persist_expenses()?;
        Ok(true)
    }

    // === Category mutations ===

    /// Append a new category; names are not required to be unique
    pub fn add_category(&mut self, input: NewCategory) -> ExpenseResult<Category> {
        let id = self.fresh_category_id();
        let category = Category::with_id(id, input);
        debug!(id = %category.id, name = %category.name, "Adding category");

        self.categories.push(category.clone());
        self.persist_categories()?;
        Ok(category)
    }

    /// Merge `update` into the category with `id`
    ///
    /// Expenses keep the category name they were recorded with.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> ExpenseResult<Option<Category>> {
        let Some(category) = self.categories.iter_mut().find(|c| &c.id == id) else {
            debug!(%id, "Update skipped, category not found");
            return Ok(None);
        };
        update.apply_to(category);
        let updated = category.clone();

        self.persist_categories()?;
        Ok(Some(updated))
    }

    /// Remove the category with `id`; expenses referencing its name are untouched
    pub fn delete_category(&mut self, id: &CategoryId) -> ExpenseResult<bool> {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        if self.categories.len() == before {
            return Ok(false);
        }
        debug!(%id, "Deleted category");

        self.persist_categories()?;
        Ok(true)
    }

    // === Budget ===

    /// Replace the monthly budget
    pub fn set_budget(&mut self, budget: Money) -> ExpenseResult<()> {
        debug!(from = %self.budget, to = %budget, "Setting budget");
        self.budget = budget;

        let result = save_json(&mut self.backend, BUDGET_KEY, &self.budget);
        report_write(BUDGET_KEY, result)
    }

    // === Restore ===

    /// Replace all three collections with `snapshot` and persist each one
    ///
    /// Every key is written even if an earlier write fails; the first
    /// failure is returned.
    pub fn restore(&mut self, snapshot: StoreSnapshot) -> ExpenseResult<()> {
        info!(
            expenses = snapshot.expenses.len(),
            categories = snapshot.categories.len(),
            "Restoring store from snapshot"
        );
        self.expenses = snapshot.expenses;
        self.categories = snapshot.categories;
        self.budget = snapshot.budget;

        let expenses = self.persist_expenses();
        let categories = self.persist_categories();
        let budget = report_write(
            BUDGET_KEY,
            save_json(&mut self.backend, BUDGET_KEY, &self.budget),
        );
        expenses.and(categories).and(budget)
    }

    // === Internals ===

    fn fresh_expense_id(&self) -> ExpenseId {
        loop {
            let id = ExpenseId::new();
            if self.get_expense(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_category_id(&self) -> CategoryId {
        loop {
            let id = CategoryId::new();
            if self.get_category(&id).is_none() {
                return id;
            }
        }
    }

    fn persist_expenses(&mut self) -> ExpenseResult<()> {
        let result = save_json(&mut self.backend, EXPENSES_KEY, &self.expenses);
        report_write(EXPENSES_KEY, result)
    }

    fn persist_categories(&mut self) -> ExpenseResult<()> {
        let result = save_json(&mut self.backend, CATEGORIES_KEY, &self.categories);
        report_write(CATEGORIES_KEY, result)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_or_default<T, S, F>(backend: &S, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore,
    F: FnOnce() -> T,
{
    match load_json(backend, key) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(e) => {
            warn!(key, error = %e, "Ignoring stored value, using default");
            default()
        }
    }
}

fn report_write(key: &str, result: ExpenseResult<()>) -> ExpenseResult<()> {
    if let Err(e) = &result {
        warn!(key, error = %e, "Write-through failed; change kept in memory only");
    }
    result
}
