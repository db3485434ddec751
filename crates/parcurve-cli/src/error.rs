//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Quote record could not be turned into a valid quote.
    #[error("Invalid quote in record {record}: {reason}")]
    InvalidQuote {
        /// 1-based record number in the input file.
        record: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Deposit rate would make the seed discount factor non-positive.
    #[error("Invalid deposit rate {rate} for tenor {tenor}: implied discount factor is not positive")]
    InvalidDepositRate {
        /// Deposit rate in decimal form.
        rate: f64,
        /// Deposit tenor in years.
        tenor: f64,
    },

    /// Curve construction or query error.
    #[error("Curve error: {0}")]
    Curve(#[from] parcurve_curves::CurveError),

    /// Pricing error.
    #[error("Pricing error: {0}")]
    Pricing(#[from] parcurve_pricing::PricingError),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
