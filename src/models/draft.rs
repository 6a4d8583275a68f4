//! Expense drafts
//!
//! A draft is the unvalidated, text-typed shape a user fills in before it is
//! checked and normalized into an [`Expense`]. Drafts are never persisted.

use super::expense::Expense;
use super::ids::ExpenseId;

/// Unvalidated user input for an expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Present when editing an existing record
    pub id: Option<ExpenseId>,
    pub amount: String,
    pub description: String,
    /// Calendar day as `YYYY-MM-DD`
    pub date: String,
    /// Whitespace-separated tags
    pub categories: String,
}

impl ExpenseDraft {
    /// Create a draft for a new expense
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        categories: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            amount: amount.into(),
            description: description.into(),
            date: date.into(),
            categories: categories.into(),
        }
    }

    /// Pre-fill a draft from an existing record (edit flow)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id),
            amount: expense.amount.value().to_string(),
            description: expense.description.clone(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            categories: expense.categories.join(" "),
        }
    }

    /// Attach an id, keeping it through normalization
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = Some(id);
        self
    }
}
