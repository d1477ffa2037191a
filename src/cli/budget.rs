//! Budget CLI commands
//!
//! Implements setting, checking and listing monthly budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{BudgetVerdict, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set a budget for a specific month
    SetBudget {
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        /// Budget amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Money,
    },

    /// Check if expenses exceed the budget for a month
    CheckBudget {
        /// Month to check
        #[arg(long)]
        month: u32,
    },

    /// List every monthly budget
    Budgets,
}

impl BudgetCommands {
    /// Whether the command writes the budget store
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::SetBudget { .. })
    }
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::SetBudget { month, amount } => {
            service.set(month, amount)?;
            println!(
                "Budget for month {} set to {}",
                month,
                amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::CheckBudget { month } => match service.check(month)? {
            BudgetVerdict::NoBudget => println!("No budget set for month {}.", month),
            BudgetVerdict::OverBudget {
                total,
                budget,
                excess,
            } => {
                println!(
                    "Total expenses for month {}: {}",
                    month,
                    total.format_with_symbol(symbol)
                );
                println!(
                    "Budget for month {}: {}",
                    month,
                    budget.format_with_symbol(symbol)
                );
                println!(
                    "Warning: You have exceeded the budget for month {} by {}!",
                    month,
                    excess.format_with_symbol(symbol)
                );
            }
            BudgetVerdict::WithinBudget { total, budget } => {
                println!(
                    "Total expenses for month {}: {}",
                    month,
                    total.format_with_symbol(symbol)
                );
                println!(
                    "Budget for month {}: {}",
                    month,
                    budget.format_with_symbol(symbol)
                );
                println!("You are within the budget for month {}.", month);
            }
        },

        BudgetCommands::Budgets => {
            let budgets = service.list()?;
            if budgets.is_empty() {
                println!("No budgets set.");
                return Ok(());
            }

            println!("{:<8}{:>12}", "Month", "Budget");
            println!("{}", "-".repeat(20));
            for (month, amount) in budgets {
                println!("{:<8}{:>12}", month, amount.format_with_symbol(symbol));
            }
        }
    }

    Ok(())
}
