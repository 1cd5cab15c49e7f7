//! Expense model
//!
//! An expense is a single recorded outflow. Its `category` is a name
//! snapshot, not a reference: renaming or deleting a category leaves
//! existing expenses untouched.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, immutable after creation
    pub id: ExpenseId,

    /// Amount spent (positive at creation)
    pub amount: Money,

    /// Category name this expense is grouped under
    pub category: String,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Day the expense occurred
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build a stored expense from user input with a fresh id and timestamp
    pub fn new(input: NewExpense) -> Self {
        Self::with_id(ExpenseId::new(), input)
    }

    /// Build a stored expense with a caller-chosen id
    pub fn with_id(id: ExpenseId, input: NewExpense) -> Self {
        Self {
            id,
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date,
            created_at: Utc::now(),
        }
    }

    /// Whether the expense date lies in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// The description, or the category name when the description is empty
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.amount, self.label())
    }
}

/// User input for a new expense (no id or creation time yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the input before handing it to the store
    ///
    /// The store accepts whatever it is given; callers run this first.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        Ok(())
    }
}

/// A partial set of fields to merge into an existing expense
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }

    /// Merge the present fields into `expense`
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = &self.category {
            expense.category = category.clone();
        }
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }

    /// Same checks as [`NewExpense::validate`], applied to present fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if let Some(amount) = self.amount {
            if !amount.is_positive() {
                return Err(ExpenseValidationError::NonPositiveAmount(amount));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(ExpenseValidationError::MissingCategory);
            }
        }
        Ok(())
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
