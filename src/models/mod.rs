//! Core data models for the expense tracker
//!
//! Expenses, categories, typed identifiers and the `Money` amount type.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{
    Category, CategoryUpdate, CategoryValidationError, NewCategory, DEFAULT_COLOR, MAX_NAME_LEN,
};
pub use expense::{Expense, ExpenseUpdate, ExpenseValidationError, NewExpense};
pub use ids::{CategoryId, ExpenseId};
pub use money::{Money, MoneyParseError};
