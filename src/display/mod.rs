//! Terminal display formatting
//!
//! Every formatter returns a `String`; the CLI decides where to print it.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::{format_category_details, format_category_list};
pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_budget_status, format_summary, BUDGET_ALERT};
