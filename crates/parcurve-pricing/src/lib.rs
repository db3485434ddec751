//! # Parcurve Pricing
//!
//! Swap pricing over a bootstrapped zero curve.
//!
//! This crate provides:
//!
//! - **Pricer**: [`SwapPricer`] for fixed-leg annuity, fair par rate,
//!   and receive-floating NPV at any maturity
//! - **Repricing**: [`RepricingReport`] validating that a calibrated
//!   curve prices its own input quotes back to zero
//!
//! ## Architecture
//!
//! `parcurve-pricing` depends on `parcurve-curves` for the curve and
//! schedule types, but `parcurve-curves` does NOT depend on this crate.
//! Curve construction stays calculation-free; every function here is a
//! pure read over a finished curve.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parcurve_curves::prelude::*;
//! use parcurve_pricing::prelude::*;
//!
//! let curve = Bootstrapper::new(quotes.clone()).calibrate(seed)?;
//!
//! let pricer = SwapPricer::semiannual();
//! let fair = pricer.fair_rate(&curve, 4.7)?;
//! let npv = pricer.price_swap(&curve, 4.7, 0.0305)?;
//!
//! let report = RepricingReport::from_quotes(
//!     &pricer, &curve, &quotes, tolerances::DEFAULT,
//! )?;
//! assert!(report.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod pricer;
pub mod repricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::pricer::{SwapPricer, ANNUITY_EPSILON};
    pub use crate::repricing::{tolerances, RepricingCheck, RepricingReport};
}

pub use error::{PricingError, PricingResult};
pub use pricer::{SwapPricer, ANNUITY_EPSILON};
pub use repricing::{RepricingCheck, RepricingReport};
