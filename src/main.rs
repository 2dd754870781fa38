use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use smartspend::cli::{
    handle_dashboard, handle_expense_command, handle_export, handle_goal_command,
    handle_income_command, handle_summary, ExpenseCommands, GoalCommands, IncomeCommands,
};
use smartspend::config::{paths::SmartSpendPaths, settings::Settings};
use smartspend::storage::Storage;

#[derive(Parser)]
#[command(
    name = "smartspend",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "SmartSpend is a terminal-based personal finance tracker. It records \
                  income, expenses, and savings goals, and derives weekly and monthly \
                  summaries you can inspect or export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home dashboard
    #[command(alias = "home")]
    Dashboard,

    /// Show a period summary
    Summary {
        /// View mode: monthly or weekly
        #[arg(short, long)]
        view: Option<String>,
        /// Period label (e.g. "July 2025" or "Week 29 2025")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export a period report
    Export {
        /// View mode: monthly or weekly
        #[arg(short, long)]
        view: Option<String>,
        /// Period label (e.g. "July 2025" or "Week 29 2025")
        #[arg(short, long)]
        period: Option<String>,
        /// Export format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (defaults to SmartSpend_Report_<period>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Income management commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SmartSpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Dashboard => {
            handle_dashboard(&storage)?;
        }
        Commands::Summary { view, period } => {
            handle_summary(&storage, &settings, view, period)?;
        }
        Commands::Export {
            view,
            period,
            format,
            output,
        } => {
            handle_export(&storage, &settings, view, period, format, output)?;
        }
        Commands::Expense(cmd) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Commands::Income(cmd) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Commands::Goal(cmd) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Income file:    {}", paths.income_file().display());
            println!("Goals file:     {}", paths.goals_file().display());
            println!("Default view:   {}", settings.granularity);
            println!("Currency:       {}", settings.currency_symbol);
            println!(
                "Max expense:    {}",
                settings
                    .max_expense_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
