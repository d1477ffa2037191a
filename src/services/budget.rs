//! Budget service
//!
//! Sets monthly budget ceilings and checks a month's spend against them.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetVerdict, Money};
use crate::storage::Storage;

/// Service for monthly budgets
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a month, replacing any previous value
    ///
    /// Returns the previous budget, if one was set.
    pub fn set(&self, month: u32, amount: Money) -> TrackerResult<Option<Money>> {
        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Budget amount cannot be negative: {}",
                amount
            )));
        }

        let previous = self.storage.budgets.set(month, amount)?;
        self.storage.budgets.save()?;

        info!(month, amount = %amount, "budget set");
        Ok(previous)
    }

    /// Get the budget for a month
    pub fn get(&self, month: u32) -> TrackerResult<Option<Money>> {
        self.storage.budgets.get(month)
    }

    /// All budgets ordered by month
    pub fn list(&self) -> TrackerResult<Vec<(u32, Money)>> {
        self.storage.budgets.get_all()
    }

    /// Compare the month's total spend (all years) against its budget
    pub fn check(&self, month: u32) -> TrackerResult<BudgetVerdict> {
        let total = self.storage.expenses.total(Some(month))?;
        let budget = self.storage.budgets.get(month)?;
        Ok(BudgetVerdict::evaluate(total, budget))
    }
}
