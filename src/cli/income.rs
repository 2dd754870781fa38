//! Income management commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::SmartSpendResult;
use crate::services::IncomeService;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record a new yearly income snapshot
    Set {
        /// Yearly income (e.g. "52000")
        amount: String,
    },
    /// Update the current snapshot in place
    Update {
        /// Yearly income
        amount: String,
    },
    /// Show the current income with derived monthly and weekly amounts
    Show,
}

pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SmartSpendResult<()> {
    let service = IncomeService::new(storage, settings);

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = service.set_income(&amount)?;
            println!("Income set to {} per year", income.yearly);
        }
        IncomeCommands::Update { amount } => {
            let income = service.update_income(&amount)?;
            println!("Income updated to {} per year", income.yearly);
        }
        IncomeCommands::Show => match service.current()? {
            Some(income) => {
                println!("Yearly:  {}", income.yearly);
                println!("Monthly: {}", income.monthly());
                println!("Weekly:  {}", income.weekly());
            }
            None => println!("No income recorded yet."),
        },
    }

    Ok(())
}
