//! Report formatting utilities for terminal output

use crate::models::Amount;
use crate::services::MonthlySummary;

/// Text shown in place of a hidden amount
const MASK: &str = "*****";

/// Format an amount, or the mask when amounts are hidden
pub fn format_amount(amount: Amount, symbol: &str, show: bool) -> String {
    if show {
        amount.format_with_symbol(symbol)
    } else {
        mask()
    }
}

pub fn mask() -> String {
    MASK.to_string()
}

/// Format the monthly summary card
pub fn format_summary(summary: &MonthlySummary, symbol: &str, show: bool) -> String {
    let label = summary.label();
    let width = label.chars().count().max(24);

    let mut output = String::new();
    output.push_str(&format!("{}\n", label));
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format!(
        "Total:    {}\n",
        format_amount(summary.total, symbol, show)
    ));
    output.push_str(&format!("Expenses: {}\n", summary.expense_count));
    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to at most `max_len` characters, adding an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
