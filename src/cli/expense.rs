//! CLI commands for expense management
//!
//! Implements add, edit, delete, show, list and summary, bridging clap
//! arguments with the ledger store.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_summary};
use crate::error::MonetaResult;
use crate::models::{ExpenseDraft, ExpenseId};
use crate::services::{newest_first, parse_month, today, MonthlySummary, DATE_FORMAT};
use crate::storage::SlotStore;
use crate::store::LedgerStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount, e.g. 12.50 or $12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        description: String,
        /// Expense date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Space-separated categories, e.g. "food drinks"
        #[arg(short, long)]
        categories: Option<String>,
    },

    /// Change an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New categories (replaces the old ones)
        #[arg(short, long)]
        categories: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
    },

    /// Show expense details
    Show {
        /// Expense ID
        id: ExpenseId,
        /// Show the amount even if amounts are hidden
        #[arg(long)]
        reveal: bool,
    },

    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show amounts even if amounts are hidden
        #[arg(long)]
        reveal: bool,
    },

    /// Show the total for a month
    Summary {
        /// Month to summarize (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Show the total even if amounts are hidden
        #[arg(long)]
        reveal: bool,
    },
}

/// Handle expense commands
pub fn handle_expense_command<S: SlotStore>(
    store: &LedgerStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> MonetaResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            date,
            categories,
        } => {
            store.begin_add()?;
            let date = date.unwrap_or_else(|| today().format(DATE_FORMAT).to_string());
            let draft = ExpenseDraft::new(amount, description, date, categories.unwrap_or_default());

            match store.add(draft) {
                Ok(expense) => {
                    println!("Added expense {}: {}", expense.id, expense);
                    Ok(())
                }
                Err(e) => {
                    store.cancel()?;
                    Err(e)
                }
            }
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            date,
            categories,
        } => {
            let mut draft = store.begin_edit(id)?;
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(categories) = categories {
                draft.categories = categories;
            }

            match store.edit(id, draft) {
                Ok(expense) => {
                    println!("Updated expense {}: {}", expense.id, expense);
                    Ok(())
                }
                Err(e) => {
                    store.cancel()?;
                    Err(e)
                }
            }
        }

        ExpenseCommands::Delete { id } => {
            let removed = store.delete(id)?;
            println!("Deleted expense {}: {}", removed.id, removed.description);
            Ok(())
        }

        ExpenseCommands::Show { id, reveal } => {
            let expense = store.get(id)?;
            let show = reveal || store.snapshot()?.show_amounts;
            print!("{}", format_expense_details(&expense, symbol, show));
            Ok(())
        }

        ExpenseCommands::List { limit, reveal } => {
            let state = store.snapshot()?;
            let show = reveal || state.show_amounts;

            let mut expenses = newest_first(&state.expenses);
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_list(&expenses, symbol, show));
            Ok(())
        }

        ExpenseCommands::Summary { month, reveal } => {
            let state = store.snapshot()?;
            let show = reveal || state.show_amounts;

            let summary = match month {
                Some(month) => {
                    let (year, month) = parse_month(&month)?;
                    MonthlySummary::for_month(&state.expenses, year, month)?
                }
                None => MonthlySummary::containing(&state.expenses, today()),
            };

            print!("{}", format_summary(&summary, symbol, show));
            Ok(())
        }
    }
}
