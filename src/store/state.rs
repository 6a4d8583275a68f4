//! Ledger state
//!
//! The expense collection plus the transient flags the interface needs.

use crate::models::{Expense, ExpenseId};

/// What the user is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Filling in a new expense
    Adding,
    /// Editing the expense with this id
    Editing(ExpenseId),
}

/// Everything the store holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    pub expenses: Vec<Expense>,
    pub mode: Mode,
    /// Whether amounts are shown or masked
    pub show_amounts: bool,
    /// Non-fatal problem found while opening the ledger
    pub warning: Option<String>,
}

impl LedgerState {
    /// Create a state around a loaded collection
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            ..Self::default()
        }
    }

    /// Look up an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ExpenseId) -> bool {
        self.find(id).is_some()
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_default_state() {
        let state = LedgerState::default();
        assert!(state.expenses.is_empty());
        assert!(state.is_idle());
        assert!(!state.show_amounts);
        assert!(state.warning.is_none());
    }

    #[test]
    fn test_find() {
        let state = LedgerState::with_expenses(vec![Expense {
            id: ExpenseId::from_raw(3),
            amount: Amount::new(1.0),
            description: "Tea".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            categories: Vec::new(),
        }]);

        assert_eq!(state.find(ExpenseId::from_raw(3)).unwrap().description, "Tea");
        assert!(state.contains(ExpenseId::from_raw(3)));
        assert!(!state.contains(ExpenseId::from_raw(4)));
    }
}
