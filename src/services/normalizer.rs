//! Draft normalization
//!
//! Turns a validated draft into a canonical [`Expense`]: numeric amount,
//! trimmed description, calendar-day date and lowercase sorted tags.

use crate::error::ValidationError;
use crate::models::{Amount, Expense, ExpenseDraft, ExpenseId};

use super::validator::parse_day;

/// Split a raw category string into canonical tags
///
/// Tokens are separated by runs of whitespace, lowercased and sorted.
/// Duplicates are kept.
pub fn normalize_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();
    categories.sort();
    categories
}

/// Convert a draft into an expense record
///
/// The draft is expected to have passed validation already; fields that still
/// fail to parse are reported rather than guessed. A missing id is generated.
pub fn normalize(draft: &ExpenseDraft) -> Result<Expense, ValidationError> {
    let amount = Amount::parse(&draft.amount).map_err(|_| ValidationError::InvalidAmount)?;
    let date = parse_day(&draft.date).ok_or(ValidationError::MissingDate)?;

    Ok(Expense {
        id: draft.id.unwrap_or_else(ExpenseId::generate),
        amount,
        description: draft.description.trim().to_string(),
        date,
        categories: normalize_categories(&draft.categories),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_normalizes_fields() {
        let draft = ExpenseDraft::new("12.50", " Coffee ", "2024-01-05", "drinks food");
        let expense = normalize(&draft).unwrap();

        assert_eq!(expense.amount, Amount::new(12.5));
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(expense.categories, vec!["drinks", "food"]);
    }

    #[test]
    fn test_categories_sorted_lowercase_not_deduplicated() {
        assert_eq!(
            normalize_categories("Food  shopping food"),
            vec!["food", "food", "shopping"]
        );
        assert_eq!(normalize_categories("   "), Vec::<String>::new());
        assert_eq!(normalize_categories("\tB\na "), vec!["a", "b"]);
    }

    #[test]
    fn test_preserves_existing_id() {
        let draft = ExpenseDraft::new("3", "Bus", "2024-01-05", "").with_id(ExpenseId::from_raw(77));
        assert_eq!(normalize(&draft).unwrap().id, ExpenseId::from_raw(77));
    }

    #[test]
    fn test_same_draft_twice_gets_distinct_ids() {
        let draft = ExpenseDraft::new("3", "Bus", "2024-01-05", "");
        let first = normalize(&draft).unwrap();
        let second = normalize(&draft).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_idempotent_on_canonical_expense() {
        let expense = Expense {
            id: ExpenseId::from_raw(1704412800000),
            amount: Amount::new(19.99),
            description: "Groceries".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            categories: vec!["food".into(), "home".into()],
        };
        let again = normalize(&ExpenseDraft::from_expense(&expense)).unwrap();
        assert_eq!(again, expense);
    }

    #[test]
    fn test_unparseable_fields_are_reported() {
        let bad_amount = ExpenseDraft::new("twelve", "Coffee", "2024-01-05", "");
        assert_eq!(normalize(&bad_amount), Err(ValidationError::InvalidAmount));

        let bad_date = ExpenseDraft::new("1", "Coffee", "", "");
        assert_eq!(normalize(&bad_date), Err(ValidationError::MissingDate));
    }
}
