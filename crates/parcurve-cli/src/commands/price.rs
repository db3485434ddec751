//! Price command implementation.
//!
//! Calibrates the curve, then values a single receive-floating,
//! pay-fixed swap at an arbitrary maturity.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use parcurve_curves::{Bootstrapper, DEFAULT_FIXED_TENOR};
use parcurve_pricing::SwapPricer;

use crate::market;
use crate::output::{print_header, print_table, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Swap maturity in years
    #[arg(short, long)]
    pub maturity: f64,

    /// Fixed rate in percent
    #[arg(short = 'r', long)]
    pub fixed_rate: f64,

    /// Path to a quotes CSV with columns Maturity,SwapRate. Uses the
    /// embedded demo market when omitted.
    #[arg(short, long)]
    pub quotes: Option<PathBuf>,

    /// Zero-coupon deposit rate in percent, seeding the short end
    #[arg(long, default_value_t = 1.0)]
    pub zcb_rate: f64,

    /// Fixed-leg payment tenor in years
    #[arg(long, default_value_t = DEFAULT_FIXED_TENOR)]
    pub tenor: f64,
}

/// Executes the price command.
pub fn execute(args: PriceArgs) -> Result<()> {
    let zcb_rate = args.zcb_rate / 100.0;
    let fixed_rate = args.fixed_rate / 100.0;

    let quotes = match &args.quotes {
        Some(path) => market::load_quotes(path)?,
        None => market::demo_quotes(zcb_rate)?,
    };

    let seed = market::seed_from_deposit(zcb_rate, args.tenor)?;
    let bootstrapper = Bootstrapper::new(quotes).with_tenor(args.tenor)?;
    let curve = bootstrapper.calibrate(seed)?;
    let pricer = SwapPricer::new(bootstrapper.schedule());

    let annuity = pricer.annuity(&curve, args.maturity)?;
    let fair = pricer.fair_rate(&curve, args.maturity)?;
    let npv = pricer.price_swap(&curve, args.maturity, fixed_rate)?;
    let df_end = curve.discount_factor(args.maturity)?;

    print_header("Swap Valuation");
    print_table(&[
        KeyValue::new("Maturity", format!("{:.2}Y", args.maturity)),
        KeyValue::new("Fixed Rate", format!("{:.4}%", fixed_rate * 100.0)),
        KeyValue::new("Fair Rate", format!("{:.4}%", fair * 100.0)),
        KeyValue::new("Annuity", format!("{annuity:.6}")),
        KeyValue::new("DF(maturity)", format!("{df_end:.6}")),
        KeyValue::new("NPV (per unit notional)", format!("{npv:+.6}")),
    ]);

    Ok(())
}
