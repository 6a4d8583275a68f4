//! Expense validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! amount, description, date presence, then date not in the future.
//! Validation is pure; "today" is read once per call.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{Amount, ExpenseDraft};

/// Date format accepted from drafts and stored in documents
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar day, ignoring surrounding whitespace
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Today's calendar day in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validate a draft against today's date
pub fn validate(draft: &ExpenseDraft) -> Result<(), ValidationError> {
    validate_on(draft, today())
}

/// Validate a draft against an explicit "today"
pub fn validate_on(draft: &ExpenseDraft, today: NaiveDate) -> Result<(), ValidationError> {
    check_fields(
        Amount::parse(&draft.amount).ok(),
        &draft.description,
        parse_day(&draft.date),
        today,
    )
}

/// Apply the business rules to already-extracted fields
///
/// `None` for amount or date means the source value could not be read.
pub fn check_fields(
    amount: Option<Amount>,
    description: &str,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if !amount.is_some_and(|a| a.is_positive()) {
        return Err(ValidationError::InvalidAmount);
    }

    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let date = date.ok_or(ValidationError::MissingDate)?;
    if date > today {
        return Err(ValidationError::FutureDate);
    }

    Ok(())
}
