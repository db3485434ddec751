//! Market quote input.
//!
//! Quotes come either from a CSV file with `Maturity,SwapRate` columns
//! or from the embedded demo market. The curve seed is derived here from
//! the zero-coupon deposit rate; the core library only ever sees a
//! ready-made pillar.

use std::path::Path;

use serde::Deserialize;

use parcurve_curves::{SwapQuote, ZeroCurve};

use crate::error::{CliError, CliResult};

/// CSV record for par swap quotes.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    #[serde(rename = "Maturity")]
    maturity: f64,
    #[serde(rename = "SwapRate")]
    swap_rate: f64,
}

/// Loads quotes from a CSV file with `Maturity,SwapRate` columns.
pub fn load_quotes(path: &Path) -> CliResult<Vec<SwapQuote>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut quotes = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let record: QuoteRecord = result?;
        let quote =
            SwapQuote::new(record.maturity, record.swap_rate).map_err(|e| {
                CliError::InvalidQuote {
                    record: i + 1,
                    reason: e.to_string(),
                }
            })?;
        quotes.push(quote);
    }

    Ok(quotes)
}

/// The embedded demo market: a 6M zero-coupon placeholder plus five par
/// swap quotes.
pub fn demo_quotes(zcb_rate: f64) -> CliResult<Vec<SwapQuote>> {
    let rows = [
        (0.5, zcb_rate), // placeholder for the ZCB seed, skipped at calibration
        (1.0, 0.0150),
        (2.0, 0.0190),
        (3.0, 0.0240),
        (5.0, 0.0315),
        (6.0, 0.0400),
    ];

    rows.iter()
        .map(|&(maturity, rate)| SwapQuote::new(maturity, rate).map_err(CliError::from))
        .collect()
}

/// Converts a simple zero-coupon deposit rate into a seeded curve.
///
/// `DF = 1 / (1 + rate * tenor)`, `r = -ln(DF) / tenor`.
pub fn seed_from_deposit(rate: f64, tenor: f64) -> CliResult<ZeroCurve> {
    let accrual = 1.0 + rate * tenor;
    if accrual <= 0.0 {
        return Err(CliError::InvalidDepositRate { rate, tenor });
    }

    let df = 1.0 / accrual;
    let zero_rate = -df.ln() / tenor;

    let mut curve = ZeroCurve::new();
    curve.add_node(tenor, zero_rate)?;
    Ok(curve)
}
