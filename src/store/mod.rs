//! Ledger store
//!
//! The single owner of the in-memory ledger. Every mutation goes through
//! [`LedgerStore::update`]: the next state is computed from the previous one,
//! persisted if the collection changed, and only then made visible. A failed
//! save leaves both memory and storage at the previous state.

pub mod reducers;
pub mod state;

pub use state::{LedgerState, Mode};

use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::{MonetaError, MonetaResult};
use crate::export::parse_import;
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::services::today;
use crate::storage::{ExpenseRepository, SlotStore};

type Observer = Box<dyn Fn(&LedgerState) + Send + Sync>;

/// In-memory ledger backed by a persistent repository
pub struct LedgerStore<S: SlotStore> {
    repo: ExpenseRepository<S>,
    state: RwLock<LedgerState>,
    observers: RwLock<Vec<Observer>>,
}

impl<S: SlotStore> LedgerStore<S> {
    /// Load the ledger, recovering to an empty one if storage is unreadable
    pub fn open(repo: ExpenseRepository<S>) -> MonetaResult<Self> {
        let outcome = repo.load_or_recover()?;
        debug!(count = outcome.expenses.len(), "Ledger opened");

        let state = LedgerState {
            warning: outcome.warning,
            ..LedgerState::with_expenses(outcome.expenses)
        };

        Ok(Self {
            repo,
            state: RwLock::new(state),
            observers: RwLock::new(Vec::new()),
        })
    }

    pub fn repository(&self) -> &ExpenseRepository<S> {
        &self.repo
    }

    /// A copy of the current state
    pub fn snapshot(&self) -> MonetaResult<LedgerState> {
        let state = self
            .state
            .read()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(state.clone())
    }

    /// The current collection, in insertion order
    pub fn expenses(&self) -> MonetaResult<Vec<Expense>> {
        Ok(self.snapshot()?.expenses)
    }

    /// Look up one expense
    pub fn get(&self, id: ExpenseId) -> MonetaResult<Expense> {
        self.snapshot()?
            .find(id)
            .cloned()
            .ok_or_else(|| MonetaError::expense_not_found(id.to_string()))
    }

    /// Register a callback run after every committed change
    pub fn subscribe(&self, observer: impl Fn(&LedgerState) + Send + Sync + 'static) -> MonetaResult<()> {
        let mut observers = self
            .observers
            .write()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        observers.push(Box::new(observer));
        Ok(())
    }

    /// Apply a state transition
    pub fn update<F>(&self, reducer: F) -> MonetaResult<()>
    where
        F: FnOnce(&LedgerState) -> MonetaResult<LedgerState>,
    {
        self.apply(|state| reducer(state).map(|next| (next, ())))
    }

    /// Start filling in a new expense
    pub fn begin_add(&self) -> MonetaResult<()> {
        self.update(|s| Ok(reducers::begin_add(s)))
    }

    /// Start editing `id`, returning a draft pre-filled from the record
    pub fn begin_edit(&self, id: ExpenseId) -> MonetaResult<ExpenseDraft> {
        self.apply(|s| {
            let next = reducers::begin_edit(s, id)?;
            let draft = next
                .find(id)
                .map(ExpenseDraft::from_expense)
                .unwrap_or_default();
            Ok((next, draft))
        })
    }

    pub fn cancel(&self) -> MonetaResult<()> {
        self.update(|s| Ok(reducers::cancel(s)))
    }

    /// Validate, normalize and persist a new expense
    pub fn add(&self, draft: ExpenseDraft) -> MonetaResult<Expense> {
        let today = today();
        let expense = self.apply(|s| reducers::add(s, &draft, today))?;
        info!(id = %expense.id, "Expense added");
        Ok(expense)
    }

    /// Replace expense `id` with the draft, keeping the id
    pub fn edit(&self, id: ExpenseId, draft: ExpenseDraft) -> MonetaResult<Expense> {
        let today = today();
        let expense = self.apply(|s| reducers::edit(s, id, &draft, today))?;
        info!(id = %id, "Expense updated");
        Ok(expense)
    }

    pub fn delete(&self, id: ExpenseId) -> MonetaResult<Expense> {
        let removed = self.apply(|s| reducers::delete(s, id))?;
        info!(id = %id, "Expense deleted");
        Ok(removed)
    }

    /// Replace the whole ledger with a validated import document
    ///
    /// Nothing changes unless every record passes.
    pub fn import_from(&self, text: &str) -> MonetaResult<usize> {
        let expenses = parse_import(text, today())?;
        let count = expenses.len();
        self.update(move |s| Ok(reducers::replace_all(s, expenses)))?;
        info!(count, "Ledger replaced by import");
        Ok(count)
    }

    /// Flip amount masking; returns the new setting
    pub fn toggle_amounts(&self) -> MonetaResult<bool> {
        self.apply(|s| {
            let next = reducers::toggle_amounts(s);
            let shown = next.show_amounts;
            Ok((next, shown))
        })
    }

    pub fn dismiss_warning(&self) -> MonetaResult<()> {
        self.update(|s| Ok(reducers::dismiss_warning(s)))
    }

    fn apply<T, F>(&self, reducer: F) -> MonetaResult<T>
    where
        F: FnOnce(&LedgerState) -> MonetaResult<(LedgerState, T)>,
    {
        let committed = {
            let mut state = self
                .state
                .write()
                .map_err(|e| MonetaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

            let (next, value) = reducer(&state)?;
            if next.expenses != state.expenses {
                self.repo.save(&next.expenses)?;
            }
            *state = next;
            (state.clone(), value)
        };

        let (snapshot, value) = committed;
        self.notify(&snapshot)?;
        Ok(value)
    }

    fn notify(&self, state: &LedgerState) -> MonetaResult<()> {
        let observers = self
            .observers
            .read()
            .map_err(|e| MonetaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        for observer in observers.iter() {
            observer(state);
        }
        Ok(())
    }
}
