//! Moneta - personal expense ledger
//!
//! This library provides the core of the Moneta expense ledger: validated and
//! normalized expense records, a single-owner ledger store that persists every
//! change, and portable JSON import and export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, ids, expenses, drafts)
//! - `services`: Validation, normalization and monthly summaries
//! - `storage`: Key-value slot storage and the expense repository
//! - `export`: JSON import/export and host file capabilities
//! - `store`: The ledger store and its state transitions
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moneta::config::MonetaPaths;
//! use moneta::models::ExpenseDraft;
//! use moneta::storage::{ExpenseRepository, FileSlotStore};
//! use moneta::store::LedgerStore;
//!
//! let paths = MonetaPaths::new()?;
//! let store = LedgerStore::open(ExpenseRepository::new(FileSlotStore::new(paths.data_dir())))?;
//! store.add(ExpenseDraft::new("12.50", "Coffee", "2024-01-05", "drinks"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{MonetaError, MonetaResult};
