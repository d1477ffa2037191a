//! Expense CLI commands
//!
//! Implements the record-keeping commands: add, list, update, delete,
//! summary and list-by-category.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::TrackerResult;
use crate::models::{ExpenseId, Money};
use crate::services::{ExpenseService, UpdateOutcome};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense (e.g. "4.50")
        #[arg(long, allow_negative_numbers = true)]
        amount: Money,
        /// Category of the expense (default: Other)
        #[arg(long)]
        category: Option<String>,
    },

    /// List all expenses
    List,

    /// Update an expense
    Update {
        /// ID of the expense
        #[arg(long)]
        id: ExpenseId,
        /// New description for the expense
        #[arg(long)]
        description: Option<String>,
        /// New amount for the expense
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<Money>,
    },

    /// Delete an expense
    Delete {
        /// ID of the expense
        #[arg(long)]
        id: ExpenseId,
    },

    /// View summary of expenses
    Summary {
        /// Summary for a specific month (1-12)
        #[arg(long)]
        month: Option<u32>,
    },

    /// List expenses by category
    ListByCategory {
        /// Category to filter expenses (case-insensitive)
        #[arg(long)]
        category: String,
    },
}

impl ExpenseCommands {
    /// Whether the command writes the expense store
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Update { .. } | Self::Delete { .. })
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let expense = service.add(&description, amount, category.as_deref())?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            if expenses.is_empty() {
                println!("No expenses found.");
            } else {
                print!("{}", format_expense_table(&expenses, symbol));
            }
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => match service.update(id, description.as_deref(), amount)? {
            UpdateOutcome::Updated(_) => println!("Expense ID {} updated successfully", id),
            UpdateOutcome::NotFound => println!("Expense with ID {} not found.", id),
        },

        ExpenseCommands::Delete { id } => {
            // Deleting a missing id still reports success
            service.delete(id)?;
            println!("Expense ID {} deleted successfully.", id);
        }

        ExpenseCommands::Summary { month } => {
            let total = service.summarize(month)?;
            match month {
                Some(m) => println!(
                    "Total expenses for month {}: {}",
                    m,
                    total.format_with_symbol(symbol)
                ),
                None => println!("Total expenses: {}", total.format_with_symbol(symbol)),
            }
        }

        ExpenseCommands::ListByCategory { category } => {
            let expenses = service.list_by_category(&category)?;
            if expenses.is_empty() {
                println!("No expenses found for category '{}'.", category);
            } else {
                print!("{}", format_expense_table(&expenses, symbol));
            }
        }
    }

    Ok(())
}
