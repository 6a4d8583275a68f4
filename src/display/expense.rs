//! Expense display formatting
//!
//! Formats expenses for terminal output in register and detail views.

use crate::models::Expense;

use super::report::{format_amount, truncate};

const DESCRIPTION_WIDTH: usize = 30;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, symbol: &str, show: bool) -> String {
    format!(
        "{:>13}  {}  {:<width$}  {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        format_amount(expense.amount, symbol, show),
        expense.categories_label(),
        width = DESCRIPTION_WIDTH,
    )
}

/// Format a list of expenses as a register
///
/// Rows are printed in the order given; callers sort beforehand.
pub fn format_expense_list(expenses: &[Expense], symbol: &str, show: bool) -> String {
    if expenses.is_empty() {
        return "No expenses yet\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>13}  {:10}  {:<width$}  {:>12}  {}\n",
        "Id",
        "Date",
        "Description",
        "Amount",
        "Categories",
        width = DESCRIPTION_WIDTH,
    ));
    output.push_str(&"-".repeat(13 + 2 + 10 + 2 + DESCRIPTION_WIDTH + 2 + 12 + 2 + 10));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol, show));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str, show: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount, symbol, show)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));

    if expense.categories.is_empty() {
        output.push_str("Categories:  (none)\n");
    } else {
        output.push_str(&format!("Categories:  {}\n", expense.categories_label()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseId};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense {
            id: ExpenseId::from_raw(1704412800000),
            amount: Amount::new(12.5),
            description: "Coffee".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            categories: vec!["drinks".into(), "food".into()],
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$", true), "No expenses yet\n");
    }

    #[test]
    fn test_row_contents() {
        let row = format_expense_row(&coffee(), "$", true);
        assert!(row.contains("1704412800000"));
        assert!(row.contains("2024-01-05"));
        assert!(row.contains("Coffee"));
        assert!(row.contains("$12.50"));
        assert!(row.ends_with("drinks, food"));
    }

    #[test]
    fn test_list_has_header_and_rows() {
        let list = format_expense_list(&[coffee(), coffee()], "$", false);
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Description"));
        assert!(!list.contains("12.50"));
    }

    #[test]
    fn test_details() {
        let details = format_expense_details(&coffee(), "$", true);
        assert!(details.contains("Amount:      $12.50"));
        assert!(details.contains("Categories:  drinks, food"));

        let mut plain = coffee();
        plain.categories.clear();
        assert!(format_expense_details(&plain, "$", true).contains("(none)"));
    }
}
