//! Bootstrap command implementation.
//!
//! Calibrates a zero curve from par swap quotes, verifies that the
//! curve reprices its inputs, and exports the results as CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use parcurve_curves::{Bootstrapper, SwapQuote, ZeroCurve, DEFAULT_FIXED_TENOR};
use parcurve_pricing::repricing::tolerances;
use parcurve_pricing::{RepricingReport, SwapPricer};

use crate::market;
use crate::output::{
    export_curve, export_quotes, pillar_rows, print_error, print_header, print_success,
    print_table, verification_rows, InterpolatedRow,
};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
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

    /// Directory for the exported CSV files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Extra maturity to quote an interpolated swap for (repeatable)
    #[arg(long = "price", value_name = "MATURITY")]
    pub price_maturities: Vec<f64>,

    /// Repricing tolerance in absolute NPV per unit notional
    #[arg(long, default_value_t = tolerances::DEFAULT)]
    pub tolerance: f64,
}

/// Executes the bootstrap command.
pub fn execute(args: BootstrapArgs) -> Result<()> {
    let zcb_rate = args.zcb_rate / 100.0;

    let quotes = match &args.quotes {
        Some(path) => market::load_quotes(path)?,
        None => market::demo_quotes(zcb_rate)?,
    };

    let seed = market::seed_from_deposit(zcb_rate, args.tenor)?;
    print_header("Initialization (ZCB)");
    let seed_rate = seed.zero_rate(args.tenor)?;
    let seed_df = seed.discount_factor(args.tenor)?;
    println!(
        "Deposit {:.4}% -> DF {seed_df:.6} -> zero rate {:.4}% (CC)",
        zcb_rate * 100.0,
        seed_rate * 100.0
    );

    let bootstrapper = Bootstrapper::new(quotes).with_tenor(args.tenor)?;
    let curve = bootstrapper.calibrate(seed)?;
    let pricer = SwapPricer::new(bootstrapper.schedule());

    print_header("Calibrated Curve");
    print_table(&pillar_rows(&curve)?);

    print_header("Repricing Verification");
    let report =
        RepricingReport::from_quotes(&pricer, &curve, bootstrapper.quotes(), args.tolerance)?;
    print_table(&verification_rows(&report));
    println!(
        "Max error: {:.2e}  RMS error: {:.2e}",
        report.max_error(),
        report.rms_error()
    );

    let interpolated = interpolated_swaps(&pricer, &curve, &args.price_maturities)?;
    if !interpolated.is_empty() {
        print_header("Interpolated Swaps");
        let rows: Vec<InterpolatedRow> = interpolated
            .iter()
            .map(|quote| InterpolatedRow {
                maturity: format!("{:.2}Y", quote.maturity()),
                fair_rate: format!("{:.4}%", quote.rate() * 100.0),
            })
            .collect();
        print_table(&rows);
    }

    std::fs::create_dir_all(&args.out_dir)?;
    export_quotes(bootstrapper.quotes(), &args.out_dir.join("swap_quotes.csv"))?;
    print_success("Swap quotes exported");
    export_curve(&curve, &args.out_dir.join("zero_curve.csv"))?;
    print_success("Zero curve pillars exported");
    if !interpolated.is_empty() {
        export_quotes(&interpolated, &args.out_dir.join("interpolated_swaps.csv"))?;
        print_success("Interpolated swaps exported");
    }

    if !report.is_valid() {
        print_error("Calibrated curve failed repricing validation");
        anyhow::bail!(
            "{} of {} quotes exceeded the repricing tolerance {:.2e}",
            report.failed_count(),
            report.total_count(),
            args.tolerance
        );
    }

    Ok(())
}

/// Quotes interpolated swaps at the requested maturities off the curve.
fn interpolated_swaps(
    pricer: &SwapPricer,
    curve: &ZeroCurve,
    maturities: &[f64],
) -> Result<Vec<SwapQuote>> {
    let mut swaps = Vec::with_capacity(maturities.len());
    for &maturity in maturities {
        let fair = pricer.fair_rate(curve, maturity)?;
        swaps.push(SwapQuote::new(maturity, fair)?);
    }
    Ok(swaps)
}
