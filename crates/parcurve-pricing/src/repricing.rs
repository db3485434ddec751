//! Repricing validation for bootstrapped curves.
//!
//! A calibrated curve must price its own input quotes back to (near)
//! zero NPV. This module turns that check into an auditable report: one
//! check per quote, plus aggregate error statistics.
//!
//! Quotes whose coupon dates all fall on curve pillars reprice to
//! machine precision. Sparser quote sets leave mid-period discount
//! factors to interpolation that the sequential solve could only
//! extrapolate, so their residual NPV is small but nonzero; pick the
//! tolerance accordingly.

use std::fmt;

use parcurve_curves::{SwapQuote, ZeroCurve};

use crate::error::PricingResult;
use crate::pricer::SwapPricer;

/// Repricing tolerances in absolute NPV per unit notional.
pub mod tolerances {
    /// For quote sets spaced at most one tenor apart: every coupon time
    /// is a pillar and repricing is exact up to float accumulation.
    pub const EXACT: f64 = 1e-9;

    /// Default for sparse quote sets, where interpolation between later
    /// pillars shifts mid-period discount factors after the solve.
    pub const DEFAULT: f64 = 1e-3;
}

/// Result of repricing a single quote against the curve.
#[derive(Debug, Clone)]
pub struct RepricingCheck {
    /// Quote maturity in years.
    pub maturity: f64,
    /// Quoted market par rate.
    pub market_rate: f64,
    /// Curve-implied fair rate at the same maturity.
    pub fair_rate: f64,
    /// NPV of the quoted swap on the calibrated curve.
    pub npv: f64,
    /// Absolute NPV error (target is zero).
    pub error: f64,
    /// Tolerance applied to this check.
    pub tolerance: f64,
    /// Whether the check passed.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(
        maturity: f64,
        market_rate: f64,
        fair_rate: f64,
        npv: f64,
        tolerance: f64,
    ) -> Self {
        let error = npv.abs();
        Self {
            maturity,
            market_rate,
            fair_rate,
            npv,
            error,
            tolerance,
            passed: error <= tolerance,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(
            f,
            "{} {}Y market {:.4}% fair {:.4}% | NPV: {:.2e} (tol: {:.2e})",
            status,
            self.maturity,
            self.market_rate * 100.0,
            self.fair_rate * 100.0,
            self.npv,
            self.tolerance
        )
    }
}

/// Complete repricing report for a calibrated curve.
#[derive(Debug, Clone)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
    all_passed: bool,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);
        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };
        let all_passed = checks.iter().all(|c| c.passed);

        Self {
            checks,
            max_error,
            rms_error,
            all_passed,
        }
    }

    /// Reprices every quote on the curve at the given tolerance.
    ///
    /// # Errors
    ///
    /// Propagates curve query errors from the pricer.
    pub fn from_quotes(
        pricer: &SwapPricer,
        curve: &ZeroCurve,
        quotes: &[SwapQuote],
        tolerance: f64,
    ) -> PricingResult<Self> {
        let mut checks = Vec::with_capacity(quotes.len());
        for quote in quotes {
            let fair = pricer.fair_rate(curve, quote.maturity())?;
            let npv = pricer.price_swap(curve, quote.maturity(), quote.rate())?;
            checks.push(RepricingCheck::new(
                quote.maturity(),
                quote.rate(),
                fair,
                npv,
                tolerance,
            ));
        }
        Ok(Self::new(checks))
    }

    /// Returns whether every quote repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.all_passed
    }

    /// Returns the individual checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute NPV error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS NPV error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Returns the number of checks that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    /// Returns the total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Returns the failed checks.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(
            f,
            "Status: {}",
            if self.all_passed { "PASSED" } else { "FAILED" }
        )?;
        writeln!(
            f,
            "Quotes: {}/{} passed",
            self.passed_count(),
            self.checks.len()
        )?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}
