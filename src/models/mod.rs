//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: expenses, their
//! ids, money amounts and budget verdicts.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::BudgetVerdict;
pub use expense::{Expense, ExpenseValidationError, DEFAULT_CATEGORY};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
