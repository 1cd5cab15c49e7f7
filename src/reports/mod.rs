//! Reports module for the expense tracker
//!
//! Chart data: spending per category and spending per day.

pub mod daily;
pub mod spending;

pub use daily::{DailySpending, DayTotal};
pub use spending::{CategorySpending, SpendingReport, CHART_PALETTE};
