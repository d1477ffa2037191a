//! Monthly budget model
//!
//! Budgets are keyed by calendar month number only; the same ceiling applies
//! to that month in every year.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Outcome of comparing a month's spend against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetVerdict {
    /// No budget has been set for the month
    NoBudget,
    /// Spend is strictly greater than the budget
    OverBudget {
        total: Money,
        budget: Money,
        excess: Money,
    },
    /// Spend is at or below the budget
    WithinBudget { total: Money, budget: Money },
}

impl BudgetVerdict {
    /// Compare a month's total spend against an optional budget
    pub fn evaluate(total: Money, budget: Option<Money>) -> Self {
        match budget {
            None => Self::NoBudget,
            Some(budget) if total > budget => Self::OverBudget {
                total,
                budget,
                excess: total - budget,
            },
            Some(budget) => Self::WithinBudget { total, budget },
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self, Self::OverBudget { .. })
    }
}
