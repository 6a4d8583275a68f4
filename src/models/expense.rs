//! Expense model
//!
//! A single validated, persisted monetary entry. Records are never mutated
//! in place; an edit replaces the whole record under the same id.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// A recorded expense
///
/// Field order matches the persisted and exported schema:
/// `{ "id", "amount", "description", "date": "YYYY-MM-DD", "categories" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Amount,

    /// Trimmed, non-empty description
    pub description: String,

    /// Calendar day of the expense
    pub date: NaiveDate,

    /// Lowercase tags, sorted alphabetically
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Expense {
    /// Check if the expense falls within the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Check if the expense carries the given tag
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Categories sorted and joined for display
    ///
    /// Imported records may carry tags in any order.
    pub fn categories_label(&self) -> String {
        let mut sorted = self.categories.clone();
        sorted.sort();
        sorted.join(", ")
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::from_raw(1704412800000),
            amount: Amount::new(12.5),
            description: "Coffee".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            categories: vec!["drinks".into(), "food".into()],
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1704412800000,"amount":12.5,"description":"Coffee","date":"2024-01-05","categories":["drinks","food"]}"#
        );
    }

    #[test]
    fn test_missing_categories_default_to_empty() {
        let json = r#"{"id":1,"amount":3.0,"description":"Bus","date":"2024-02-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.categories.is_empty());
    }

    #[test]
    fn test_month_membership() {
        let expense = sample();
        assert!(expense.is_in_month(2024, 1));
        assert!(!expense.is_in_month(2024, 2));
        assert!(!expense.is_in_month(2023, 1));
    }

    #[test]
    fn test_categories() {
        let expense = sample();
        assert!(expense.has_category("food"));
        assert!(!expense.has_category("Food"));
        assert_eq!(expense.categories_label(), "drinks, food");
    }

    #[test]
    fn test_categories_label_sorts_unordered_tags() {
        let mut expense = sample();
        expense.categories = vec!["Zoo".into(), "food".into(), "Art".into()];
        assert_eq!(expense.categories_label(), "Art, Zoo, food");
        assert_eq!(expense.categories, vec!["Zoo", "food", "Art"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "2024-01-05 Coffee $12.50");
    }
}
