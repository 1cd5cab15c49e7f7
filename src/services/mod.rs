//! Service layer for the expense tracker
//!
//! The store owns the canonical state and its persistence; `aggregate`
//! holds the pure calculations behind the summary figures.

pub mod aggregate;
pub mod store;

pub use aggregate::BudgetStatus;
pub use store::{ExpenseStore, StoreSnapshot, DEFAULT_BUDGET};
