//! SmartSpend - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the SmartSpend
//! application: income snapshots, categorized expenses, savings goals,
//! period (monthly/weekly) summaries, and exportable reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, income, goals, period keys)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic, including the summary aggregation engine
//! - `reports`: Period report projection for display and export
//! - `export`: CSV/JSON report export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use smartspend::config::{paths::SmartSpendPaths, settings::Settings};
//! use smartspend::storage::Storage;
//!
//! let paths = SmartSpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SmartSpendError, SmartSpendResult};
