//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment and aggregation.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{DeleteOutcome, ExpenseService, UpdateOutcome};
