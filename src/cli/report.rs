//! Summary, dashboard, and export commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::export::{export_period_report_csv, export_period_report_json};
use crate::reports::PeriodReport;
use crate::services::SummaryService;
use crate::storage::Storage;

use super::resolve_granularity;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// Show the period summary view
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    view: Option<String>,
    period: Option<String>,
) -> SmartSpendResult<()> {
    let granularity = resolve_granularity(view.as_deref(), settings)?;
    let report = PeriodReport::generate(storage, granularity, period.as_deref())?;

    print!("{}", report.format_terminal());

    if report.available_labels.len() > 1 {
        println!("\nAvailable periods: {}", report.available_labels.join(", "));
    }

    Ok(())
}

/// Show the home dashboard
pub fn handle_dashboard(storage: &Storage) -> SmartSpendResult<()> {
    let service = SummaryService::new(storage);
    let dashboard = service.dashboard()?;
    print!("{}", format_dashboard(&dashboard));
    Ok(())
}

/// Export a period report to a file
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    view: Option<String>,
    period: Option<String>,
    format: String,
    output: Option<PathBuf>,
) -> SmartSpendResult<()> {
    let granularity = resolve_granularity(view.as_deref(), settings)?;
    let format: ExportFormat = format.parse().map_err(SmartSpendError::Validation)?;
    let report = PeriodReport::generate(storage, granularity, period.as_deref())?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "SmartSpend_Report_{}.{}",
            report.selection.label.replace(' ', "_"),
            format.extension()
        ))
    });

    let file = File::create(&path)
        .map_err(|e| SmartSpendError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_period_report_csv(&report, writer)?,
        ExportFormat::Json => export_period_report_json(&report, writer)?,
    }

    println!(
        "Exported '{}' report to {}",
        report.selection.label,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
