//! Export module for the expense tracker
//!
//! CSV export of the expense store, spreadsheet-compatible.

pub mod csv;

pub use self::csv::{
    export_expenses_csv, export_expenses_to_file, read_expenses_csv, write_expenses_csv,
    CSV_HEADER,
};
