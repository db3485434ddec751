//! Parcurve CLI - par swap curve bootstrapping and pricing.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap the embedded demo market and export the curve
//! parcurve bootstrap --out-dir out --price 4.0 --price 4.7 --price 5.5
//!
//! # Bootstrap quotes from a CSV file
//! parcurve bootstrap --quotes quotes.csv --zcb-rate 1.0
//!
//! # Value a 4.7Y payer swap struck at 3.05%
//! parcurve price --maturity 4.7 --fixed-rate 3.05
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod market;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::execute(args)?,
        Commands::Price(args) => commands::price::execute(args)?,
    }

    Ok(())
}
