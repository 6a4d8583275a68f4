//! Core data models for Moneta
//!
//! This module contains the data structures of the expense ledger: the
//! persisted [`Expense`] record, the user-facing [`ExpenseDraft`] and the
//! value types they are built from.

pub mod amount;
pub mod draft;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use draft::ExpenseDraft;
pub use expense::Expense;
pub use ids::ExpenseId;
