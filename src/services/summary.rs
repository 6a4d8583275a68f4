//! Monthly summary
//!
//! Totals and listing order used by the summary card and expense list.

use chrono::{Datelike, NaiveDate};

use crate::error::{MonetaError, MonetaResult};
use crate::models::{Amount, Expense};

/// Total spending for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    /// Sum of amounts dated within the month
    pub total: Amount,
    /// Number of expenses counted
    pub expense_count: usize,
}

impl MonthlySummary {
    /// Summarize the expenses that fall within `year`-`month`
    pub fn for_month(expenses: &[Expense], year: i32, month: u32) -> MonetaResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MonetaError::Parse(format!(
                "Invalid month: {}-{:02}",
                year, month
            )));
        }

        Ok(Self::collect(expenses, year, month))
    }

    /// Summarize the month containing `day`
    pub fn containing(expenses: &[Expense], day: NaiveDate) -> Self {
        Self::collect(expenses, day.year(), day.month())
    }

    fn collect(expenses: &[Expense], year: i32, month: u32) -> Self {
        let in_month: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.is_in_month(year, month))
            .collect();

        Self {
            year,
            month,
            total: in_month.iter().map(|e| e.amount).sum(),
            expense_count: in_month.len(),
        }
    }

    /// Human-readable month label, e.g. "January 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

/// Parse a `YYYY-MM` month selector
pub fn parse_month(s: &str) -> MonetaResult<(i32, u32)> {
    let (year, month) = s
        .trim()
        .split_once('-')
        .ok_or_else(|| MonetaError::Parse(format!("Invalid month '{}', use YYYY-MM", s)))?;

    let year: i32 = year
        .parse()
        .map_err(|_| MonetaError::Parse(format!("Invalid year in '{}'", s)))?;
    let month: u32 = month
        .parse()
        .map_err(|_| MonetaError::Parse(format!("Invalid month in '{}'", s)))?;

    if !(1..=12).contains(&month) {
        return Err(MonetaError::Parse(format!("Month out of range in '{}'", s)));
    }

    Ok((year, month))
}

/// Expenses ordered for display, newest first
///
/// Ties on the same day keep the most recently created record on top.
pub fn newest_first(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted
}
