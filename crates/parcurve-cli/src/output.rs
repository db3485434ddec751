//! Output formatting and CSV export.

use std::path::Path;

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use parcurve_curves::{SwapQuote, ZeroCurve};
use parcurve_pricing::RepricingReport;

use crate::error::CliResult;

/// A curve pillar row for display.
#[derive(Debug, Tabled)]
pub struct PillarRow {
    /// Pillar maturity.
    #[tabled(rename = "Maturity")]
    pub maturity: String,
    /// Continuously compounded zero rate.
    #[tabled(rename = "Zero Rate")]
    pub zero_rate: String,
    /// Discount factor at the pillar.
    #[tabled(rename = "Discount Factor")]
    pub discount_factor: String,
}

/// Builds display rows for every pillar of the curve.
pub fn pillar_rows(curve: &ZeroCurve) -> CliResult<Vec<PillarRow>> {
    curve
        .pillars()
        .map(|(maturity, rate)| {
            Ok(PillarRow {
                maturity: format!("{maturity:.2}Y"),
                zero_rate: format!("{:.4}%", rate * 100.0),
                discount_factor: format!("{:.6}", curve.discount_factor(maturity)?),
            })
        })
        .collect()
}

/// A repricing verification row: market quote vs curve-implied values.
#[derive(Debug, Tabled)]
pub struct VerificationRow {
    /// Quote maturity.
    #[tabled(rename = "Maturity")]
    pub maturity: String,
    /// Quoted market par rate.
    #[tabled(rename = "Market Rate")]
    pub market_rate: String,
    /// Curve-implied fair rate.
    #[tabled(rename = "Fair Rate")]
    pub fair_rate: String,
    /// NPV of the quoted swap (should be near zero).
    #[tabled(rename = "NPV")]
    pub npv: String,
    /// Pass/fail marker.
    #[tabled(rename = "Status")]
    pub status: String,
}

/// Builds display rows from a repricing report.
pub fn verification_rows(report: &RepricingReport) -> Vec<VerificationRow> {
    report
        .checks()
        .iter()
        .map(|check| VerificationRow {
            maturity: format!("{:.2}Y", check.maturity),
            market_rate: format!("{:.4}%", check.market_rate * 100.0),
            fair_rate: format!("{:.4}%", check.fair_rate * 100.0),
            npv: format!("{:+.2e}", check.npv),
            status: if check.passed {
                "✓".green().to_string()
            } else {
                "✗".red().to_string()
            },
        })
        .collect()
}

/// An interpolated swap row.
#[derive(Debug, Tabled)]
pub struct InterpolatedRow {
    /// Requested maturity.
    #[tabled(rename = "Maturity")]
    pub maturity: String,
    /// Curve-implied fair rate.
    #[tabled(rename = "Fair Rate")]
    pub fair_rate: String,
}

/// A key-value pair for display.
#[derive(Debug, Tabled)]
pub struct KeyValue {
    /// Metric name.
    #[tabled(rename = "Metric")]
    pub key: String,
    /// Formatted value.
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Writes quotes as `Maturity,SwapRate` with 8-decimal precision.
pub fn export_quotes(quotes: &[SwapQuote], path: &Path) -> CliResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Maturity", "SwapRate"])?;
    for quote in quotes {
        writer.write_record([
            format!("{:.8}", quote.maturity()),
            format!("{:.8}", quote.rate()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes curve pillars as `Time,ZeroRate` with 8-decimal precision.
pub fn export_curve(curve: &ZeroCurve, path: &Path) -> CliResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Time", "ZeroRate"])?;
    for (maturity, rate) in curve.pillars() {
        writer.write_record([format!("{maturity:.8}"), format!("{rate:.8}")])?;
    }
    writer.flush()?;
    Ok(())
}
