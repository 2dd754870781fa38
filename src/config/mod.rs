//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SmartSpendPaths;
pub use settings::Settings;
