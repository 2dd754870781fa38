//! Expense management commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_register;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::{ExpenseId, DEFAULT_CATEGORIES};
use crate::services::{suggest_category, ExpenseService};
use crate::storage::Storage;

use super::parse_date;

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "12.50")
        amount: String,
        /// Category; omitted, it is inferred from the description
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List expenses, most recent first
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        amount: String,
        /// New category
        #[arg(short, long)]
        category: String,
        /// New date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
    /// List the known categories
    Categories,
}

fn parse_expense_id(id: &str) -> SmartSpendResult<ExpenseId> {
    id.parse()
        .map_err(|_| SmartSpendError::Validation(format!("Invalid expense ID: {}", id)))
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SmartSpendResult<()> {
    let service = ExpenseService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = parse_date(date.as_deref(), settings)?;
            let category = match category {
                Some(c) => c,
                None => suggest_category(&description)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        SmartSpendError::Validation(
                            "could not infer a category from the description; pass --category"
                                .into(),
                        )
                    })?,
            };

            let expense = service.add_expense(&amount, date, &description, &category)?;
            println!(
                "Recorded {} ({}) on {}",
                expense.amount,
                expense.category,
                expense.date.format("%Y-%m-%d")
            );
        }
        ExpenseCommands::List { limit } => {
            let mut expenses = storage.expenses.get_all()?;
            expenses.sort_by(|a, b| b.date.cmp(&a.date));
            expenses.truncate(limit);
            print!("{}", format_expense_register(&expenses));
        }
        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let id = parse_expense_id(&id)?;
            let date = parse_date(date.as_deref(), settings)?;
            let expense = service.edit_expense(id, &amount, date, &description, &category)?;
            println!("Updated expense {}", expense.id);
        }
        ExpenseCommands::Delete { id } => {
            let id = parse_expense_id(&id)?;
            let removed = service.delete_expense(id)?;
            println!("Deleted expense {} ({})", removed.id, removed.amount);
        }
        ExpenseCommands::Categories => {
            for category in DEFAULT_CATEGORIES {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
