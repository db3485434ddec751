//! Swap pricing off a finished zero curve.
//!
//! Pure functions over a calibrated [`ZeroCurve`]: nothing here mutates
//! the curve. Single-curve, unit-notional, no-spread simplification
//! throughout, so the floating leg values to `1 - DF(T)`.

use parcurve_curves::schedule::CouponSchedule;
use parcurve_curves::ZeroCurve;

use crate::error::PricingResult;

/// Annuities below this threshold are treated as degenerate and make
/// the fair rate a `0.0` sentinel instead of a division blow-up.
pub const ANNUITY_EPSILON: f64 = 1e-8;

/// Prices par swaps against a zero curve.
///
/// The pricer shares its [`CouponSchedule`] type with the bootstrapper:
/// both compute identical period boundaries, so every bootstrapped
/// quote whose coupons fall on curve pillars reprices to zero NPV.
///
/// # Pricing
///
/// ```text
/// Annuity:   A(T) = Σ τ·DF(tᵢ) + τ_last·DF(T)
/// Fair rate: S*(T) = (1 − DF(T)) / A(T)
/// NPV:       (1 − DF(T)) − S·A(T)     (receive floating, pay fixed)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapPricer {
    /// Fixed-leg payment schedule.
    schedule: CouponSchedule,
}

impl SwapPricer {
    /// Creates a pricer over the given fixed-leg schedule.
    ///
    /// Pass the same schedule used for bootstrapping; a mismatch breaks
    /// the repricing identity.
    #[must_use]
    pub fn new(schedule: CouponSchedule) -> Self {
        Self { schedule }
    }

    /// Creates a pricer with the default semiannual fixed leg.
    #[must_use]
    pub fn semiannual() -> Self {
        Self::new(CouponSchedule::semiannual())
    }

    /// Returns the fixed-leg payment schedule.
    #[must_use]
    pub fn schedule(&self) -> CouponSchedule {
        self.schedule
    }

    /// Present value of a unit fixed coupon stream to `maturity`.
    ///
    /// # Errors
    ///
    /// Propagates curve query errors (negative maturity).
    pub fn annuity(&self, curve: &ZeroCurve, maturity: f64) -> PricingResult<f64> {
        let tau = self.schedule.tenor();
        let mut sum = 0.0;
        for t in self.schedule.coupon_times(maturity) {
            sum += tau * curve.discount_factor(t)?;
        }
        sum += self.schedule.final_accrual(maturity) * curve.discount_factor(maturity)?;
        Ok(sum)
    }

    /// Fair (par) swap rate for the given maturity.
    ///
    /// Returns `0.0` when the annuity is below [`ANNUITY_EPSILON`]
    /// (zero or near-zero maturity).
    ///
    /// # Errors
    ///
    /// Propagates curve query errors (negative maturity).
    pub fn fair_rate(&self, curve: &ZeroCurve, maturity: f64) -> PricingResult<f64> {
        let annuity = self.annuity(curve, maturity)?;
        if annuity < ANNUITY_EPSILON {
            return Ok(0.0);
        }
        let df_end = curve.discount_factor(maturity)?;
        Ok((1.0 - df_end) / annuity)
    }

    /// NPV of a receive-floating, pay-fixed swap at the given fixed
    /// rate, per unit notional.
    ///
    /// # Errors
    ///
    /// Propagates curve query errors (negative maturity).
    pub fn price_swap(
        &self,
        curve: &ZeroCurve,
        maturity: f64,
        fixed_rate: f64,
    ) -> PricingResult<f64> {
        let pv_fixed = fixed_rate * self.annuity(curve, maturity)?;
        let pv_float = 1.0 - curve.discount_factor(maturity)?;
        Ok(pv_float - pv_fixed)
    }
}
