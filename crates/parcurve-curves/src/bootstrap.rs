//! Sequential bootstrap of a zero curve from par swap quotes.
//!
//! Each quote is solved in ascending maturity order. The fixed-leg
//! coupons strictly before the quote maturity are discounted off the
//! curve built so far, leaving the final discount factor as the single
//! unknown with a closed-form solution. No root-finding is involved.

use crate::curve::ZeroCurve;
use crate::error::{CurveError, CurveResult};
use crate::quotes::SwapQuote;
use crate::schedule::CouponSchedule;

/// Sequential bootstrapper for zero curves.
///
/// The bootstrap algorithm:
/// 1. Sort quotes by maturity (stable, so equal maturities keep their
///    input order)
/// 2. For each quote, discount the known fixed coupons off the curve
///    built so far
/// 3. Solve the final discount factor in closed form and insert the
///    implied zero rate as a new pillar
///
/// Calibration consumes the seed curve and returns a new curve value;
/// the seed is never shared with the result.
///
/// # Example
///
/// ```rust,ignore
/// use parcurve_curves::prelude::*;
///
/// let quotes = vec![
///     SwapQuote::new(1.0, 0.0150)?,
///     SwapQuote::new(2.0, 0.0190)?,
/// ];
///
/// let mut seed = ZeroCurve::new();
/// seed.add_node(0.5, 0.00998)?;
///
/// let curve = Bootstrapper::new(quotes).calibrate(seed)?;
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    /// Quotes sorted ascending by maturity.
    quotes: Vec<SwapQuote>,
    /// Fixed-leg payment schedule, shared with the pricer.
    schedule: CouponSchedule,
}

impl Bootstrapper {
    /// Creates a bootstrapper over the given quotes with the default
    /// semiannual fixed leg.
    ///
    /// Quotes are sorted ascending by maturity; calibration order is
    /// defined by maturity, not input order.
    #[must_use]
    pub fn new(quotes: impl IntoIterator<Item = SwapQuote>) -> Self {
        let mut quotes: Vec<SwapQuote> = quotes.into_iter().collect();
        quotes.sort_by(|a, b| a.maturity().total_cmp(&b.maturity()));
        Self {
            quotes,
            schedule: CouponSchedule::semiannual(),
        }
    }

    /// Sets the fixed-leg payment schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: CouponSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the fixed-leg payment tenor in years.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] if `tenor` is not strictly
    /// positive.
    pub fn with_tenor(self, tenor: f64) -> CurveResult<Self> {
        Ok(self.with_schedule(CouponSchedule::new(tenor)?))
    }

    /// Returns the quotes in calibration order.
    #[must_use]
    pub fn quotes(&self) -> &[SwapQuote] {
        &self.quotes
    }

    /// Returns the fixed-leg payment schedule.
    #[must_use]
    pub fn schedule(&self) -> CouponSchedule {
        self.schedule
    }

    /// Calibrates the curve, consuming the seed.
    ///
    /// Quotes whose maturity already has a pillar are skipped, so
    /// re-running with the same inputs yields the identical pillar set.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonPositiveDiscountFactor`] when a quote
    /// implies a discount factor at or below zero. Such a curve is
    /// arbitrage-inconsistent and must not be silently patched over.
    pub fn calibrate(&self, seed: ZeroCurve) -> CurveResult<ZeroCurve> {
        let mut curve = seed;
        let tau = self.schedule.tenor();

        for quote in &self.quotes {
            let maturity = quote.maturity();
            let rate = quote.rate();

            if curve.contains(maturity) {
                tracing::debug!("Pillar at {}Y already calibrated, skipping", maturity);
                continue;
            }

            // Known fixed coupons, discounted off the curve built so far.
            let mut coupon_pv = 0.0;
            for t in self.schedule.coupon_times(maturity) {
                coupon_pv += rate * tau * curve.discount_factor(t)?;
            }

            // Single remaining unknown: DF at the quote maturity.
            let final_accrual = self.schedule.final_accrual(maturity);
            let df = (1.0 - coupon_pv) / (1.0 + final_accrual * rate);
            if df <= 0.0 {
                return Err(CurveError::non_positive_discount_factor(maturity, df));
            }

            let zero_rate = -df.ln() / maturity;
            curve.add_node(maturity, zero_rate)?;

            tracing::debug!(
                "Calibrated {}Y swap: zero rate {:.4}%",
                maturity,
                zero_rate * 100.0
            );
        }

        Ok(curve)
    }
}

/// Bootstraps a zero curve from quotes with the default semiannual
/// fixed leg.
///
/// Convenience wrapper around [`Bootstrapper::new`] + `calibrate`.
pub fn bootstrap_zero_curve(
    quotes: impl IntoIterator<Item = SwapQuote>,
    seed: ZeroCurve,
) -> CurveResult<ZeroCurve> {
    Bootstrapper::new(quotes).calibrate(seed)
}
