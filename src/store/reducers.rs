//! State transitions
//!
//! Each function maps the previous state to the next one without touching
//! storage. Failures leave the previous state as it was.

use chrono::NaiveDate;

use crate::error::{MonetaError, MonetaResult, ValidationError};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::services::{normalize, validate_on};

use super::state::{LedgerState, Mode};

/// Idle -> Adding
pub fn begin_add(state: &LedgerState) -> LedgerState {
    LedgerState {
        mode: Mode::Adding,
        ..state.clone()
    }
}

/// Idle -> Editing(id)
pub fn begin_edit(state: &LedgerState, id: ExpenseId) -> MonetaResult<LedgerState> {
    ensure_exists(state, id)?;
    Ok(LedgerState {
        mode: Mode::Editing(id),
        ..state.clone()
    })
}

/// Abandon the current add or edit
pub fn cancel(state: &LedgerState) -> LedgerState {
    LedgerState {
        mode: Mode::Idle,
        ..state.clone()
    }
}

/// Validate, normalize and insert a new expense
pub fn add(
    state: &LedgerState,
    draft: &ExpenseDraft,
    today: NaiveDate,
) -> MonetaResult<(LedgerState, Expense)> {
    validate_on(draft, today)?;
    let mut expense = normalize(draft)?;

    if state.contains(expense.id) {
        if draft.id.is_some() {
            return Err(ValidationError::DuplicateId(expense.id).into());
        }
        // Imported ids may sit ahead of the clock
        while state.contains(expense.id) {
            expense.id = ExpenseId::generate();
        }
    }

    let mut expenses = state.expenses.clone();
    expenses.push(expense.clone());

    Ok((
        LedgerState {
            expenses,
            mode: Mode::Idle,
            ..state.clone()
        },
        expense,
    ))
}

/// Replace the expense `id` with the normalized draft, keeping its id
pub fn edit(
    state: &LedgerState,
    id: ExpenseId,
    draft: &ExpenseDraft,
    today: NaiveDate,
) -> MonetaResult<(LedgerState, Expense)> {
    ensure_exists(state, id)?;
    validate_on(draft, today)?;
    let expense = normalize(&draft.clone().with_id(id))?;

    let expenses = state
        .expenses
        .iter()
        .map(|e| if e.id == id { expense.clone() } else { e.clone() })
        .collect();

    Ok((
        LedgerState {
            expenses,
            mode: Mode::Idle,
            ..state.clone()
        },
        expense,
    ))
}

/// Remove the expense `id`
pub fn delete(state: &LedgerState, id: ExpenseId) -> MonetaResult<(LedgerState, Expense)> {
    let removed = ensure_exists(state, id)?.clone();
    let expenses = state.expenses.iter().filter(|e| e.id != id).cloned().collect();

    Ok((
        LedgerState {
            expenses,
            mode: Mode::Idle,
            ..state.clone()
        },
        removed,
    ))
}

/// Swap in a whole new collection (import)
pub fn replace_all(state: &LedgerState, expenses: Vec<Expense>) -> LedgerState {
    LedgerState {
        expenses,
        mode: Mode::Idle,
        ..state.clone()
    }
}

/// Show or mask amounts
pub fn toggle_amounts(state: &LedgerState) -> LedgerState {
    LedgerState {
        show_amounts: !state.show_amounts,
        ..state.clone()
    }
}

/// Clear the startup warning once the user has seen it
pub fn dismiss_warning(state: &LedgerState) -> LedgerState {
    LedgerState {
        warning: None,
        ..state.clone()
    }
}

fn ensure_exists(state: &LedgerState, id: ExpenseId) -> MonetaResult<&Expense> {
    state
        .find(id)
        .ok_or_else(|| MonetaError::expense_not_found(id.to_string()))
}
