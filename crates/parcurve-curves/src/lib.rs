//! # Parcurve Curves
//!
//! Zero curve construction for the Parcurve swap analytics library.
//!
//! This crate provides:
//!
//! - **Curve Type**: [`ZeroCurve`] with linear interpolation between
//!   pillars and flat extrapolation on both sides
//! - **Bootstrap**: Sequential calibration from par swap quotes
//! - **Quotes**: Market observable par swap rates
//! - **Schedule**: The fixed-leg coupon grid shared between calibration
//!   and pricing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parcurve_curves::prelude::*;
//!
//! // Seed the short end from a 6M zero-coupon deposit
//! let mut seed = ZeroCurve::new();
//! let df = 1.0 / (1.0 + 0.0100 * 0.5);
//! seed.add_node(0.5, -df.ln() / 0.5)?;
//!
//! // Bootstrap the par swap quotes
//! let quotes = vec![
//!     SwapQuote::new(1.0, 0.0150)?,
//!     SwapQuote::new(2.0, 0.0190)?,
//! ];
//! let curve = Bootstrapper::new(quotes).calibrate(seed)?;
//!
//! // Query any maturity
//! let rate = curve.zero_rate(1.5)?;
//! let df = curve.discount_factor(1.5)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod curve;
pub mod error;
pub mod quotes;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{bootstrap_zero_curve, Bootstrapper};
    pub use crate::curve::ZeroCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::quotes::SwapQuote;
    pub use crate::schedule::{CouponSchedule, DEFAULT_FIXED_TENOR};
}

pub use bootstrap::Bootstrapper;
pub use curve::ZeroCurve;
pub use error::{CurveError, CurveResult};
pub use quotes::SwapQuote;
pub use schedule::{CouponSchedule, DEFAULT_FIXED_TENOR};
