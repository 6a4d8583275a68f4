//! Storage layer for Moneta
//!
//! The ledger lives in a single named slot of a key-value store. The host
//! decides what a slot is: a JSON file with atomic writes, or process memory.

pub mod expenses;
pub mod file_io;
pub mod slots;

pub use expenses::{parse_collection, serialize_collection, ExpenseRepository, LoadOutcome};
pub use file_io::{read_text, write_text_atomic};
pub use slots::{FileSlotStore, MemorySlotStore};

use crate::error::MonetaResult;

/// Slot holding the serialized expense collection
pub const EXPENSES_SLOT: &str = "expenses";

/// Slot receiving unreadable content found in [`EXPENSES_SLOT`]
pub const CORRUPT_SLOT: &str = "expenses.corrupt";

/// Host key-value storage facility
///
/// Reads and writes are synchronous and replace whole values.
pub trait SlotStore {
    /// Read a slot, `None` if it has never been written
    fn read(&self, key: &str) -> MonetaResult<Option<String>>;

    /// Overwrite a slot
    fn write(&self, key: &str, contents: &str) -> MonetaResult<()>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn read(&self, key: &str) -> MonetaResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> MonetaResult<()> {
        (**self).write(key, contents)
    }
}
