//! Display formatting for terminal output
//!
//! Builds the strings printed by the CLI: the expense register, a detail
//! view for one expense, and the monthly summary card.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use report::{format_amount, format_summary, mask, separator, truncate};
