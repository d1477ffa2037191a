//! CSV Export functionality
//!
//! Exports expenses to CSV with the header `id,date,description,amount,category`,
//! one row per expense in store order.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Column names, in output order
pub const CSV_HEADER: [&str; 5] = ["id", "date", "description", "amount", "category"];

/// One CSV row; amounts are written with two decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ExpenseRow {
    id: u32,
    date: String,
    description: String,
    amount: String,
    category: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.get(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: expense.description.clone(),
            amount: expense.amount.to_decimal_string(),
            category: expense.category.clone(),
        }
    }
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = TrackerError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| TrackerError::Export(format!("Invalid date '{}': {}", row.date, e)))?;
        let amount = Money::parse(&row.amount)
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        Ok(Expense::new(
            ExpenseId::new(row.id),
            date,
            row.description,
            amount,
            row.category,
        ))
    }
}

/// Write expenses as CSV, returning the number of rows written
///
/// The header row is written even when there are no expenses.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Export every stored expense as CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> TrackerResult<usize> {
    let expenses = storage.expenses.get_all()?;
    write_expenses_csv(&expenses, writer)
}

/// Export every stored expense to a CSV file, replacing it if present
pub fn export_expenses_to_file(storage: &Storage, path: &Path) -> TrackerResult<usize> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let count = export_expenses_csv(storage, BufWriter::new(file))?;
    info!(count, path = %path.display(), "expenses exported");
    Ok(count)
}

/// Parse CSV produced by [`write_expenses_csv`] back into expenses
pub fn read_expenses_csv<R: Read>(reader: R) -> TrackerResult<Vec<Expense>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(TrackerError::Export(format!(
            "Unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    csv_reader
        .deserialize::<ExpenseRow>()
        .map(|row| Expense::try_from(row?))
        .collect()
}
