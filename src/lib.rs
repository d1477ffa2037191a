//! Expense Tracker - command-line expense records and monthly budgets
//!
//! This library provides the core functionality of the `expense` binary: a
//! file-backed expense store with id assignment, filtering and totals, a
//! monthly budget table, and CSV export.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, budget verdicts)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `export`: CSV export
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! # fn main() -> Result<(), expense_tracker::TrackerError> {
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//! storage.load_all()?;
//!
//! let service = ExpenseService::new(&storage, &settings);
//! let expense = service.add("Coffee", Money::from_cents(450), Some("Food"))?;
//! println!("added #{}", expense.id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
