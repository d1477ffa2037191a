//! Expense display formatting
//!
//! Fixed-width tables for terminal output.

use crate::models::Expense;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{:<5}{:<12}{:<20}{:<11}{}",
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d").to_string(),
        truncate(&expense.description, 19),
        expense.amount.format_with_symbol(currency_symbol),
        expense.category
    )
}

/// Format expenses as a table with a header row
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}{:<12}{:<20}{:<11}{}\n",
        "ID", "Date", "Description", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
