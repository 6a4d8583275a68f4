//! Import and export of the whole ledger
//!
//! Exports serialize the persisted collection as a portable JSON document and
//! hand it to the host. Imports read a document, validate every record and
//! replace the ledger only if all of them pass.

pub mod bridge;
pub mod json;

pub use bridge::{
    Delivery, DirectoryFileCreator, FileCreator, FilePicker, PathFilePicker, Pick,
    PlatformBridge,
};
pub use json::{export_all, export_filename, parse_import, ExportDocument};

use tracing::info;

use crate::error::MonetaResult;
use crate::services::today;
use crate::storage::SlotStore;
use crate::store::LedgerStore;

/// What happened to a bridge-driven import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The ledger was replaced with this many records
    Imported(usize),
    /// The user dismissed the picker; nothing changed
    Cancelled,
    /// The host has no picker; the caller must supply the text
    Unavailable,
}

/// Export the ledger and deliver it through the bridge
pub fn export_expenses<S: SlotStore>(
    store: &LedgerStore<S>,
    bridge: &PlatformBridge,
) -> MonetaResult<Delivery> {
    let document = export_all(store.repository(), today())?;
    bridge.deliver(document)
}

/// Import a user-picked document through the bridge
pub fn import_expenses<S: SlotStore>(
    store: &LedgerStore<S>,
    bridge: &PlatformBridge,
) -> MonetaResult<ImportOutcome> {
    match bridge.pick()? {
        Pick::Picked(text) => {
            let count = store.import_from(&text)?;
            Ok(ImportOutcome::Imported(count))
        }
        Pick::Cancelled => {
            info!("Import cancelled");
            Ok(ImportOutcome::Cancelled)
        }
        Pick::Unavailable => Ok(ImportOutcome::Unavailable),
    }
}
