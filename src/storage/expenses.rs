//! Expense repository
//!
//! Reads and writes the whole expense collection to the `"expenses"` slot.
//! Every save replaces the full collection; there is no incremental path.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{MonetaError, MonetaResult};
use crate::models::{Expense, ExpenseId};

use super::{SlotStore, CORRUPT_SLOT, EXPENSES_SLOT};

/// Result of loading with recovery from a corrupted slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub expenses: Vec<Expense>,
    /// Set when the slot could not be parsed and an empty ledger was used
    pub warning: Option<String>,
}

/// Repository for expense persistence
pub struct ExpenseRepository<S> {
    slots: S,
}

impl<S: SlotStore> ExpenseRepository<S> {
    /// Create a repository over a slot store
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Access the underlying slot store
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Load the full collection
    ///
    /// An absent slot is an empty ledger. Malformed content is a
    /// [`MonetaError::Parse`].
    pub fn load(&self) -> MonetaResult<Vec<Expense>> {
        match self.slots.read(EXPENSES_SLOT)? {
            Some(text) => parse_collection(&text),
            None => {
                debug!("No stored expenses found");
                Ok(Vec::new())
            }
        }
    }

    /// Load the full collection, recovering from unreadable content
    ///
    /// Unparseable text is copied to a fresh backup slot and the expenses slot
    /// is reset to an empty collection, so memory and storage agree again.
    /// Records sharing an id keep the first occurrence's id; later ones get
    /// new ids and the repaired collection is saved. The returned warning is
    /// meant for the user.
    pub fn load_or_recover(&self) -> MonetaResult<LoadOutcome> {
        let Some(text) = self.slots.read(EXPENSES_SLOT)? else {
            return Ok(LoadOutcome::default());
        };

        match parse_collection(&text) {
            Ok(mut expenses) => {
                let rekeyed = rekey_duplicate_ids(&mut expenses);
                if rekeyed == 0 {
                    return Ok(LoadOutcome {
                        expenses,
                        warning: None,
                    });
                }

                self.save(&expenses)?;
                let warning = format!(
                    "{} stored expense(s) shared an id with another record and were given new ids.",
                    rekeyed
                );
                warn!("{}", warning);
                Ok(LoadOutcome {
                    expenses,
                    warning: Some(warning),
                })
            }
            Err(e) => {
                let backup = self.free_corrupt_slot()?;
                self.slots.write(&backup, &text)?;
                self.save(&[])?;
                let warning = format!(
                    "Stored expenses could not be read ({}); starting with an empty ledger. \
                     The unreadable data was kept in '{}'.",
                    e, backup
                );
                warn!("{}", warning);
                Ok(LoadOutcome {
                    expenses: Vec::new(),
                    warning: Some(warning),
                })
            }
        }
    }

    /// First unused backup slot: `expenses.corrupt`, then `expenses.corrupt-1`, ...
    fn free_corrupt_slot(&self) -> MonetaResult<String> {
        if self.slots.read(CORRUPT_SLOT)?.is_none() {
            return Ok(CORRUPT_SLOT.to_string());
        }

        let mut n = 1;
        loop {
            let key = format!("{}-{}", CORRUPT_SLOT, n);
            if self.slots.read(&key)?.is_none() {
                return Ok(key);
            }
            n += 1;
        }
    }

    /// Replace the stored collection
    pub fn save(&self, expenses: &[Expense]) -> MonetaResult<()> {
        info!(count = expenses.len(), "Saving expenses to storage");
        let text = serialize_collection(expenses)?;
        self.slots.write(EXPENSES_SLOT, &text)
    }
}

/// Give every record after the first holder of an id a new unique id
///
/// Returns how many records were re-keyed.
fn rekey_duplicate_ids(expenses: &mut [Expense]) -> usize {
    let mut taken: HashSet<ExpenseId> = expenses.iter().map(|e| e.id).collect();
    if taken.len() == expenses.len() {
        return 0;
    }

    let mut seen = HashSet::new();
    let mut rekeyed = 0;
    for expense in expenses.iter_mut() {
        if seen.insert(expense.id) {
            continue;
        }
        let mut id = ExpenseId::generate();
        while taken.contains(&id) {
            id = ExpenseId::generate();
        }
        debug!(old = %expense.id, new = %id, "Re-keying duplicate expense id");
        taken.insert(id);
        seen.insert(id);
        expense.id = id;
        rekeyed += 1;
    }
    rekeyed
}

/// Parse a JSON array of expense records
pub fn parse_collection(text: &str) -> MonetaResult<Vec<Expense>> {
    serde_json::from_str(text)
        .map_err(|e| MonetaError::Parse(format!("Failed to parse expenses: {}", e)))
}

/// Serialize a collection as pretty-printed JSON (2-space indent)
pub fn serialize_collection(expenses: &[Expense]) -> MonetaResult<String> {
    serde_json::to_string_pretty(expenses)
        .map_err(|e| MonetaError::Json(format!("Failed to serialize expenses: {}", e)))
}
