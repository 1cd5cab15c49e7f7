//! Expense tracker - record expenses and watch a monthly budget
//!
//! This library holds the expense store and everything around it: the
//! persistence adapter, the summary aggregates, reports, exports and the
//! command handlers used by the `expenses` binary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, ids)
//! - `storage`: Key-value persistence (JSON files or memory)
//! - `services`: The expense store and its aggregates
//! - `reports`: Category breakdown and daily spending
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Command handlers
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_tracker::models::{Money, NewExpense};
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::MemoryStore;
//!
//! let mut store = ExpenseStore::open(MemoryStore::new());
//! let june = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
//! store
//!     .add_expense(NewExpense::new(Money::from_units(250), "Shopping", june(1)))
//!     .unwrap();
//!
//! assert_eq!(store.expenses().len(), 1);
//! assert_eq!(store.budget_progress_at(june(15)), 25.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
