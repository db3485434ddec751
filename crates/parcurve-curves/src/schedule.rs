//! Fixed-leg coupon schedule on a regular tenor grid.
//!
//! The bootstrapper and the swap pricer must agree exactly on period
//! boundaries, otherwise bootstrapped swaps do not reprice to zero NPV.
//! Both sides therefore share this one schedule type instead of
//! computing stub lengths independently.

use crate::error::{CurveError, CurveResult};

/// Default fixed-leg payment tenor: semiannual.
pub const DEFAULT_FIXED_TENOR: f64 = 0.5;

/// Tolerance on the maturity/tenor ratio when deciding whether a
/// maturity sits exactly on the payment grid.
const GRID_EPSILON: f64 = 1e-9;

/// Fixed-leg payment schedule with a regular tenor and a final stub.
///
/// Payments fall at `τ, 2τ, 3τ, …` up to the swap maturity. When the
/// maturity is not a multiple of `τ`, the final period is a shorter
/// stub; when it is, the final period is a regular full period.
///
/// # Example
///
/// ```rust,ignore
/// use parcurve_curves::schedule::CouponSchedule;
///
/// let schedule = CouponSchedule::semiannual();
/// assert_eq!(schedule.coupon_times(2.0), vec![0.5, 1.0, 1.5]);
/// assert_eq!(schedule.final_accrual(2.0), 0.5);
/// assert_eq!(schedule.final_accrual(4.7), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouponSchedule {
    /// Regular period length in years.
    tenor: f64,
}

impl CouponSchedule {
    /// Creates a schedule with the given payment tenor.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] if `tenor` is not strictly
    /// positive. A non-positive tenor would make the coupon grid
    /// unbounded.
    pub fn new(tenor: f64) -> CurveResult<Self> {
        if tenor <= 0.0 || !tenor.is_finite() {
            return Err(CurveError::invalid_tenor(tenor));
        }
        Ok(Self { tenor })
    }

    /// Creates the default semiannual schedule.
    #[must_use]
    pub fn semiannual() -> Self {
        Self {
            tenor: DEFAULT_FIXED_TENOR,
        }
    }

    /// Returns the regular period length in years.
    #[must_use]
    pub fn tenor(&self) -> f64 {
        self.tenor
    }

    /// Returns the number of full periods strictly before `maturity`.
    ///
    /// The period ending at `maturity` itself is the final period and is
    /// not counted here, whether it is a stub or a regular period.
    #[must_use]
    pub fn full_periods(&self, maturity: f64) -> usize {
        let ratio = maturity / self.tenor;
        let nearest = ratio.round();
        if nearest >= 1.0 && (ratio - nearest).abs() < GRID_EPSILON {
            // On-grid: the final period is a full one and is excluded.
            nearest as usize - 1
        } else {
            ratio.floor() as usize
        }
    }

    /// Returns the payment times of the full periods strictly before
    /// `maturity`: `τ, 2τ, …`.
    #[must_use]
    pub fn coupon_times(&self, maturity: f64) -> Vec<f64> {
        (1..=self.full_periods(maturity))
            .map(|i| i as f64 * self.tenor)
            .collect()
    }

    /// Returns the accrual length of the final period ending at
    /// `maturity`.
    ///
    /// For an off-grid maturity this is the stub remainder
    /// `T − floor(T/τ)·τ`. For an on-grid maturity the final period is a
    /// regular one, so the accrual is `τ` rather than the zero the raw
    /// remainder formula would give.
    #[must_use]
    pub fn final_accrual(&self, maturity: f64) -> f64 {
        let ratio = maturity / self.tenor;
        let nearest = ratio.round();
        if nearest >= 1.0 && (ratio - nearest).abs() < GRID_EPSILON {
            self.tenor
        } else {
            maturity - ratio.floor() * self.tenor
        }
    }
}

impl Default for CouponSchedule {
    fn default() -> Self {
        Self::semiannual()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_tenor() {
        assert!(matches!(
            CouponSchedule::new(0.0),
            Err(CurveError::InvalidTenor { .. })
        ));
        assert!(matches!(
            CouponSchedule::new(-0.5),
            Err(CurveError::InvalidTenor { .. })
        ));
    }

    #[test]
    fn test_on_grid_maturity() {
        let schedule = CouponSchedule::semiannual();
        assert_eq!(schedule.coupon_times(2.0), vec![0.5, 1.0, 1.5]);
        assert_relative_eq!(schedule.final_accrual(2.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_off_grid_maturity() {
        let schedule = CouponSchedule::semiannual();
        let times = schedule.coupon_times(4.7);
        assert_eq!(times.len(), 9);
        assert_relative_eq!(times[8], 4.5, epsilon = 1e-12);
        assert_relative_eq!(schedule.final_accrual(4.7), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_maturity_shorter_than_tenor() {
        let schedule = CouponSchedule::semiannual();
        assert!(schedule.coupon_times(0.3).is_empty());
        assert_relative_eq!(schedule.final_accrual(0.3), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_single_period_maturity() {
        let schedule = CouponSchedule::semiannual();
        assert!(schedule.coupon_times(0.5).is_empty());
        assert_relative_eq!(schedule.final_accrual(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_annual_tenor() {
        let schedule = CouponSchedule::new(1.0).unwrap();
        assert_eq!(schedule.coupon_times(3.0), vec![1.0, 2.0]);
        assert_relative_eq!(schedule.final_accrual(3.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(schedule.final_accrual(2.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_detection_tolerates_float_noise() {
        let schedule = CouponSchedule::semiannual();
        // 0.1 + 0.2 + ... style noise: 3.0000000000000004 is still on-grid
        let noisy = 6.0 * DEFAULT_FIXED_TENOR + 1e-12;
        assert_eq!(schedule.full_periods(noisy), 5);
        assert_relative_eq!(schedule.final_accrual(noisy), 0.5, epsilon = 1e-9);
    }
}
