//! Expense service
//!
//! Business logic for recording, editing, deleting and aggregating expenses.
//! Every mutation is persisted before the call returns.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::settings::{IdAssignment, Settings};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Result of an update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The expense as stored after the update
    Updated(Expense),
    /// No expense has the requested id
    NotFound,
}

/// Result of a delete request
///
/// Deleting an id that is not present is not an error; `removed` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub id: ExpenseId,
    pub removed: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Record a new expense dated today
    pub fn add(
        &self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> TrackerResult<Expense> {
        self.add_on(Local::now().date_naive(), description, amount, category)
    }

    /// Record a new expense on a specific date
    pub fn add_on(
        &self,
        date: NaiveDate,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> TrackerResult<Expense> {
        let category = match category.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => self.settings.default_category.clone(),
        };

        let id = self.next_id()?;
        let expense = Expense::new(id, date, description.trim(), amount, category);

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.push(expense.clone())?;
        self.storage.expenses.save()?;

        info!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Change the description and/or amount of an expense
    ///
    /// Omitted fields are left unchanged. A blank description counts as
    /// omitted; descriptions cannot be cleared.
    pub fn update(
        &self,
        id: ExpenseId,
        new_description: Option<&str>,
        new_amount: Option<Money>,
    ) -> TrackerResult<UpdateOutcome> {
        if let Some(amount) = new_amount {
            if amount.is_negative() {
                return Err(TrackerError::Validation(format!(
                    "Expense amount cannot be negative: {}",
                    amount
                )));
            }
        }

        let new_description = new_description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let after = self.storage.expenses.modify(id, |expense| {
            if let Some(description) = new_description {
                expense.description = description;
            }
            if let Some(amount) = new_amount {
                expense.amount = amount;
            }
        })?;

        let after = match after {
            Some(expense) => expense,
            None => return Ok(UpdateOutcome::NotFound),
        };

        self.storage.expenses.save()?;

        info!(id = %id, "expense updated");
        Ok(UpdateOutcome::Updated(after))
    }

    /// Delete every expense with the given id
    ///
    /// The store is rewritten even when nothing matched.
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<DeleteOutcome> {
        let removed = self.storage.expenses.remove_all(id)?;
        self.storage.expenses.save()?;

        info!(id = %id, removed = removed.len(), "expense delete");
        Ok(DeleteOutcome {
            id,
            removed: removed.len(),
        })
    }

    /// Total spend, optionally for one calendar month (any year)
    pub fn summarize(&self, month: Option<u32>) -> TrackerResult<Money> {
        self.storage.expenses.total(month)
    }

    /// Expenses whose category matches case-insensitively
    pub fn list_by_category(&self, category: &str) -> TrackerResult<Vec<Expense>> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.in_category(category))
            .collect())
    }

    fn next_id(&self) -> TrackerResult<ExpenseId> {
        match self.settings.id_assignment {
            IdAssignment::NextAvailable => match self.storage.expenses.max_id()? {
                None => Ok(ExpenseId::new(1)),
                Some(max) => max
                    .next()
                    .ok_or_else(|| TrackerError::Storage("Expense id space exhausted".into())),
            },
            IdAssignment::RecordCount => {
                let count = self.storage.expenses.count()?;
                let id = u32::try_from(count + 1)
                    .map(ExpenseId::new)
                    .map_err(|_| TrackerError::Storage("Expense id space exhausted".into()))?;
                if self.storage.expenses.contains(id)? {
                    warn!(id = %id, "record-count id assignment reuses a live id");
                }
                Ok(id)
            }
        }
    }
}
