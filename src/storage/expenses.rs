//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file holds a
//! plain JSON array in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(count = expenses.len(), "loaded expenses");

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get the first expense with the given ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Append an expense
    pub fn push(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Apply `f` to the first expense with the given ID
    ///
    /// Returns the modified expense, or `None` if no expense matched.
    pub fn modify<F>(&self, id: ExpenseId, f: F) -> Result<Option<Expense>, TrackerError>
    where
        F: FnOnce(&mut Expense),
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.iter_mut().find(|e| e.id == id).map(|expense| {
            f(expense);
            expense.clone()
        }))
    }

    /// Remove every expense with the given ID, returning the removed records
    pub fn remove_all(&self, id: ExpenseId) -> Result<Vec<Expense>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let (removed, kept): (Vec<_>, Vec<_>) = data.drain(..).partition(|e| e.id == id);
        *data = kept;
        Ok(removed)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    /// Largest ID currently in the store
    pub fn max_id(&self) -> Result<Option<ExpenseId>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().map(|e| e.id).max())
    }

    /// Check whether an expense with the given ID exists
    pub fn contains(&self, id: ExpenseId) -> Result<bool, TrackerError> {
        Ok(self.get(id)?.is_some())
    }

    /// Sum of amounts, optionally restricted to one calendar month of any year
    pub fn total(&self, month: Option<u32>) -> Result<Money, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        data.iter()
            .filter(|e| month.map_or(true, |m| e.month() == m))
            .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount))
            .ok_or_else(|| {
                TrackerError::Storage("Expense total exceeds the supported amount range".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_CENTS;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(id: u32, description: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description,
            Money::from_cents(100),
            "Other",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.max_id().unwrap(), None);
    }

    #[test]
    fn test_push_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, "Lunch")).unwrap();

        let found = repo.get(ExpenseId::new(1)).unwrap().unwrap();
        assert_eq!(found.description, "Lunch");
        assert!(repo.get(ExpenseId::new(2)).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.push(expense(2, "Second")).unwrap();
        repo.push(expense(1, "First")).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        let all = repo2.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "Second");
        assert_eq!(all[1].description, "First");
    }

    #[test]
    fn test_file_is_plain_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.push(expense(1, "Lunch")).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["date"], "2024-05-01");
    }

    #[test]
    fn test_modify_first_match_only() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, "A")).unwrap();
        repo.push(expense(1, "B")).unwrap();

        let modified = repo
            .modify(ExpenseId::new(1), |e| e.description = "Changed".into())
            .unwrap()
            .unwrap();
        assert_eq!(modified.description, "Changed");

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].description, "Changed");
        assert_eq!(all[1].description, "B");

        assert!(repo.modify(ExpenseId::new(9), |_| {}).unwrap().is_none());
    }

    #[test]
    fn test_remove_all_duplicates() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, "A")).unwrap();
        repo.push(expense(2, "B")).unwrap();
        repo.push(expense(1, "C")).unwrap();

        let removed = repo.remove_all(ExpenseId::new(1)).unwrap();
        assert_eq!(removed.len(), 2);

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "B");
        assert!(!repo.contains(ExpenseId::new(1)).unwrap());
    }

    #[test]
    fn test_total_by_month_ignores_year() {
        let (_temp_dir, repo) = create_test_repo();
        let mut may_2023 = expense(1, "Old");
        may_2023.date = NaiveDate::from_ymd_opt(2023, 5, 20).unwrap();
        let mut june = expense(2, "June");
        june.date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        june.amount = Money::from_cents(250);

        repo.push(may_2023).unwrap();
        repo.push(expense(3, "May")).unwrap();
        repo.push(june).unwrap();

        assert_eq!(repo.total(Some(5)).unwrap(), Money::from_cents(200));
        assert_eq!(repo.total(Some(6)).unwrap(), Money::from_cents(250));
        assert_eq!(repo.total(Some(7)).unwrap(), Money::zero());
        assert_eq!(repo.total(None).unwrap(), Money::from_cents(450));
    }

    #[test]
    fn test_total_overflow_is_storage_error() {
        let (_temp_dir, repo) = create_test_repo();
        let mut big = expense(1, "Big");
        big.amount = Money::from_cents(MAX_CENTS);
        repo.push(big.clone()).unwrap();
        assert_eq!(repo.total(None).unwrap(), Money::from_cents(MAX_CENTS));

        big.id = ExpenseId::new(2);
        repo.push(big).unwrap();
        assert!(repo.total(None).unwrap_err().is_storage());
        assert!(repo.total(Some(5)).unwrap_err().is_storage());
        assert_eq!(repo.total(Some(6)).unwrap(), Money::zero());
    }

    #[test]
    fn test_corrupt_file_fails_load() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "[{]").unwrap();

        assert!(repo.load().unwrap_err().is_storage());
    }
}
