//! Budget repository for JSON storage
//!
//! Manages loading and saving monthly budgets to budgets.json. The file is a
//! JSON object keyed by month number as a string, e.g. `{"3": 500.0}`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::TrackerError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BTreeMap<u32, Money>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: BTreeMap<u32, Money> = read_json(&self.path)?;
        debug!(count = file_data.len(), "loaded budgets");

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = file_data;

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*budgets)
    }

    /// Get the budget for a month
    pub fn get(&self, month: u32) -> Result<Option<Money>, TrackerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&month).copied())
    }

    /// Set the budget for a month, returning the previous value
    pub fn set(&self, month: u32, amount: Money) -> Result<Option<Money>, TrackerError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.insert(month, amount))
    }

    /// All budgets ordered by month
    pub fn get_all(&self) -> Result<Vec<(u32, Money)>, TrackerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().map(|(m, a)| (*m, *a)).collect())
    }
}
