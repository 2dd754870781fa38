//! Business logic layer

pub mod expense;
pub mod goal;
pub mod income;
pub mod period;
pub mod summary;

pub use expense::{parse_amount, suggest_category, ExpenseService};
pub use goal::GoalService;
pub use income::IncomeService;
pub use period::{PeriodResolver, PeriodSelection};
pub use summary::{saving_progress_percent, Dashboard, Summary, SummaryService};
