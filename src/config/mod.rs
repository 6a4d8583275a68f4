//! Configuration module for Moneta
//!
//! This module provides configuration management including:
//! - Platform data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonetaPaths;
pub use settings::Settings;
