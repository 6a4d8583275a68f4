//! JSON import and export
//!
//! The exported document uses the same schema as the persisted slot: a
//! pretty-printed array of expense records. Imports are all-or-nothing: every
//! record is checked and any failure rejects the whole document.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{MonetaError, MonetaResult, RecordError, ValidationError};
use crate::models::{Amount, Expense, ExpenseId};
use crate::services::{check_fields, parse_day, DATE_FORMAT};
use crate::storage::{serialize_collection, ExpenseRepository, SlotStore};

/// A serialized ledger ready for delivery to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Suggested file name, `moneta-YYYY-MM-DD.json`
    pub filename: String,
    pub contents: String,
}

/// File name for an export made on `today`
pub fn export_filename(today: NaiveDate) -> String {
    format!("moneta-{}.json", today.format(DATE_FORMAT))
}

/// Export the persisted collection
///
/// Reads from storage rather than memory; the two never diverge once a
/// mutation has completed.
pub fn export_all<S: SlotStore>(
    repo: &ExpenseRepository<S>,
    today: NaiveDate,
) -> MonetaResult<ExportDocument> {
    let expenses = repo.load()?;
    let contents = serialize_collection(&expenses)
        .map_err(|e| MonetaError::Export(e.to_string()))?;

    info!(count = expenses.len(), "Exporting expenses");
    Ok(ExportDocument {
        filename: export_filename(today),
        contents,
    })
}

/// One record of an import document before validation
///
/// Amount is coerced from a number or numeric text. Other fields are taken
/// as they are; a wrongly-typed field makes the document unparseable.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    amount: Option<Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    categories: Option<Vec<String>>,
}

impl ImportRecord {
    fn id(&self) -> Option<ExpenseId> {
        self.id.as_ref().and_then(Value::as_i64).map(ExpenseId::from_raw)
    }

    fn amount(&self) -> Option<Amount> {
        match self.amount.as_ref()? {
            Value::Number(n) => n.as_f64().map(Amount::new),
            Value::String(s) => Amount::parse(s).ok(),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_day)
    }
}

/// Parse and validate an import document
///
/// Returns the records to install, or [`MonetaError::Parse`] for malformed
/// text, or [`MonetaError::ImportValidation`] listing every failing record.
/// Records without an integer id are rejected; ids are not generated here.
pub fn parse_import(text: &str, today: NaiveDate) -> MonetaResult<Vec<Expense>> {
    let records: Vec<ImportRecord> = serde_json::from_str(text)
        .map_err(|e| MonetaError::Parse(format!("Failed to parse import: {}", e)))?;

    debug!(count = records.len(), "Validating imported records");

    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    let mut expenses = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = record.id();
        match check_record(&record, id, today, &mut seen) {
            Ok(expense) => expenses.push(expense),
            Err(error) => errors.push(RecordError { index, id, error }),
        }
    }

    if !errors.is_empty() {
        return Err(MonetaError::ImportValidation(errors));
    }

    Ok(expenses)
}

fn check_record(
    record: &ImportRecord,
    id: Option<ExpenseId>,
    today: NaiveDate,
    seen: &mut HashSet<ExpenseId>,
) -> Result<Expense, ValidationError> {
    let amount = record.amount();
    let description = record.description.as_deref().unwrap_or_default();
    let date = record.date();

    check_fields(amount, description, date, today)?;

    let id = id.ok_or(ValidationError::MissingId)?;
    if !seen.insert(id) {
        return Err(ValidationError::DuplicateId(id));
    }

    // check_fields guarantees both are present
    let (Some(amount), Some(date)) = (amount, date) else {
        return Err(ValidationError::InvalidAmount);
    };

    Ok(Expense {
        id,
        amount,
        description: description.to_string(),
        date,
        categories: record.categories.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn record(id: i64, amount: &str, date: &str) -> String {
        format!(
            r#"{{"id": {}, "amount": {}, "description": "Item {}", "date": "{}", "categories": ["food"]}}"#,
            id, amount, id, date
        )
    }

    fn document(records: &[String]) -> String {
        format!("[{}]", records.join(","))
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(today()), "moneta-2024-03-15.json");
    }

    #[test]
    fn test_export_all_reads_storage() {
        let repo = ExpenseRepository::new(MemorySlotStore::new());
        let expense = Expense {
            id: ExpenseId::from_raw(1),
            amount: Amount::new(4.2),
            description: "Tea".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            categories: vec!["drinks".into()],
        };
        repo.save(&[expense.clone()]).unwrap();

        let doc = export_all(&repo, today()).unwrap();
        assert_eq!(doc.filename, "moneta-2024-03-15.json");
        assert!(doc.contents.starts_with("[\n  {\n    \"id\": 1,"));
        assert_eq!(parse_import(&doc.contents, today()).unwrap(), vec![expense]);
    }

    #[test]
    fn test_export_empty_ledger() {
        let repo = ExpenseRepository::new(MemorySlotStore::new());
        let doc = export_all(&repo, today()).unwrap();
        assert_eq!(doc.contents, "[]");
    }

    #[test]
    fn test_import_valid_document() {
        let text = document(&[record(1, "12.5", "2024-01-05"), record(2, "3", "2024-03-15")]);
        let expenses = parse_import(&text, today()).unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].amount, Amount::new(12.5));
        assert_eq!(expenses[1].date, today());
    }

    #[test]
    fn test_import_coerces_textual_amount() {
        let text = document(&[record(1, "\"12.50\"", "2024-01-05")]);
        let expenses = parse_import(&text, today()).unwrap();
        assert_eq!(expenses[0].amount, Amount::new(12.5));
    }

    #[test]
    fn test_import_one_bad_record_among_ten() {
        let mut records: Vec<String> = (1..=10).map(|i| record(i, "1", "2024-01-05")).collect();
        records[6] = record(7, "0", "2024-01-05");

        match parse_import(&document(&records), today()) {
            Err(MonetaError::ImportValidation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].index, 6);
                assert_eq!(errors[0].id, Some(ExpenseId::from_raw(7)));
                assert_eq!(errors[0].error, ValidationError::InvalidAmount);
            }
            other => panic!("expected import validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_import_collects_all_failures() {
        let text = document(&[
            record(1, "-5", "2024-01-05"),
            record(2, "1", "2024-01-05"),
            record(3, "1", "2024-03-16"),
            r#"{"id": 4, "amount": 1, "description": "  ", "date": "2024-01-05"}"#.to_string(),
        ]);

        match parse_import(&text, today()) {
            Err(MonetaError::ImportValidation(errors)) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.error.clone()).collect();
                assert_eq!(
                    kinds,
                    vec![
                        ValidationError::InvalidAmount,
                        ValidationError::FutureDate,
                        ValidationError::EmptyDescription,
                    ]
                );
            }
            other => panic!("expected import validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_import_requires_id() {
        let text = r#"[{"amount": 1, "description": "Tea", "date": "2024-01-05", "categories": []}]"#;
        match parse_import(text, today()) {
            Err(MonetaError::ImportValidation(errors)) => {
                assert_eq!(errors[0].error, ValidationError::MissingId);
                assert_eq!(errors[0].id, None);
            }
            other => panic!("expected missing id, got {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let text = document(&[record(5, "1", "2024-01-05"), record(5, "2", "2024-01-06")]);
        match parse_import(&text, today()) {
            Err(MonetaError::ImportValidation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].index, 1);
                assert_eq!(
                    errors[0].error,
                    ValidationError::DuplicateId(ExpenseId::from_raw(5))
                );
            }
            other => panic!("expected duplicate id, got {:?}", other),
        }
    }

    #[test]
    fn test_import_passes_fields_through() {
        let text = r#"[{"id": 3, "amount": 2, "description": " Snack ", "date": "2024-01-05", "categories": ["Food", "a"]}]"#;
        let expenses = parse_import(text, today()).unwrap();
        assert_eq!(expenses[0].description, " Snack ");
        assert_eq!(expenses[0].categories, vec!["Food", "a"]);
    }

    #[test]
    fn test_import_missing_categories_is_empty() {
        let text = r#"[{"id": 3, "amount": 2, "description": "Snack", "date": "2024-01-05"}]"#;
        assert!(parse_import(text, today()).unwrap()[0].categories.is_empty());
    }

    #[test]
    fn test_import_malformed_text_is_parse_error() {
        assert!(parse_import("not json", today()).unwrap_err().is_parse());
        assert!(parse_import(r#"{"id": 1}"#, today()).unwrap_err().is_parse());
        assert!(parse_import(r#"[{"description": 5}]"#, today())
            .unwrap_err()
            .is_parse());
    }

    #[test]
    fn test_import_empty_document() {
        assert!(parse_import("[]", today()).unwrap().is_empty());
    }
}
