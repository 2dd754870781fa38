//! Goal management commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::GoalId;
use crate::services::{ExpenseService, GoalService, SummaryService};
use crate::storage::Storage;

use super::parse_date;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g. "100")
        target: String,
    },
    /// List goals with their progress
    List,
    /// Make a goal the active one
    Activate {
        /// Goal ID
        id: String,
    },
    /// Update a goal's name and target
    Update {
        /// Goal ID
        id: String,
        /// New name
        name: String,
        /// New target amount
        target: String,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
    /// Record a contribution toward the active goal
    Contribute {
        /// Amount (e.g. "20")
        amount: String,
        /// Contribution date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description; defaults to the active goal's name
        #[arg(long)]
        description: Option<String>,
    },
}

fn parse_goal_id(id: &str) -> SmartSpendResult<GoalId> {
    id.parse()
        .map_err(|_| SmartSpendError::Validation(format!("Invalid goal ID: {}", id)))
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> SmartSpendResult<()> {
    let service = GoalService::new(storage, settings);

    match cmd {
        GoalCommands::Add { name, target } => {
            let goal = service.add_goal(&name, &target)?;
            println!("Created goal '{}' with target {}", goal.name, goal.target_amount);
        }
        GoalCommands::List => {
            let summary_service = SummaryService::new(storage);
            let goals = summary_service.goals_with_progress()?;
            print!("{}", format_goal_list(&goals));
        }
        GoalCommands::Activate { id } => {
            let goal = service.activate(parse_goal_id(&id)?)?;
            println!("'{}' is now the active goal", goal.name);
        }
        GoalCommands::Update { id, name, target } => {
            let goal = service.update_goal(parse_goal_id(&id)?, &name, &target)?;
            println!("Updated goal '{}'", goal.name);
        }
        GoalCommands::Delete { id } => {
            let removed = service.delete_goal(parse_goal_id(&id)?)?;
            println!("Deleted goal '{}'", removed.name);
        }
        GoalCommands::Contribute {
            amount,
            date,
            description,
        } => {
            let date = parse_date(date.as_deref(), settings)?;
            let expense_service = ExpenseService::new(storage, settings);
            let contribution =
                expense_service.add_saving_contribution(&amount, date, description.as_deref())?;
            println!(
                "Saved {} toward '{}'",
                contribution.amount, contribution.description
            );
        }
    }

    Ok(())
}
