//! Export module for SmartSpend
//!
//! Flattens period reports for external consumption:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable document with a versioned schema

pub mod csv;
pub mod json;

pub use csv::export_period_report_csv;
pub use json::{export_period_report_json, ReportDocument, REPORT_SCHEMA_VERSION};
