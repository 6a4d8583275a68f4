//! Service layer for Moneta
//!
//! Pure business logic on top of the models: validation of drafts,
//! normalization into canonical records, and monthly summaries.

pub mod normalizer;
pub mod summary;
pub mod validator;

pub use normalizer::{normalize, normalize_categories};
pub use summary::{newest_first, parse_month, MonthlySummary};
pub use validator::{check_fields, parse_day, today, validate, validate_on, DATE_FORMAT};
