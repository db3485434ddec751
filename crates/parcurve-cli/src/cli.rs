//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{BootstrapArgs, PriceArgs};

/// Parcurve - par swap curve bootstrapping and pricing CLI
#[derive(Parser)]
#[command(name = "parcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show per-pillar calibration progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bootstrap a zero curve from par swap quotes and export it
    Bootstrap(BootstrapArgs),

    /// Value a swap of arbitrary maturity off the bootstrapped curve
    Price(PriceArgs),
}
