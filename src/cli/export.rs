//! CLI command for CSV export

use std::path::Path;

use crate::error::TrackerResult;
use crate::export::export_expenses_to_file;
use crate::storage::Storage;

/// Export all expenses to a CSV file
///
/// Nothing is written when the store is empty.
pub fn handle_export_command(storage: &Storage, file: &Path) -> TrackerResult<()> {
    if storage.expenses.count()? == 0 {
        println!("No expenses to export.");
        return Ok(());
    }

    export_expenses_to_file(storage, file)?;
    println!("Expenses exported successfully to {}.", file.display());
    Ok(())
}
