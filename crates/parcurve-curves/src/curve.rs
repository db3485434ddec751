//! Zero-coupon yield curve.
//!
//! A [`ZeroCurve`] stores calibrated (maturity, zero rate) pillars in
//! ascending maturity order and answers rate and discount factor queries
//! at any maturity by linear interpolation between pillars, with flat
//! extrapolation on both sides.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A zero-coupon yield curve.
///
/// Rates are continuously compounded: `DF(t) = exp(-r(t) * t)`.
///
/// The curve is an owned value. The bootstrapper consumes a seed curve
/// and returns a calibrated one; holding on to the seed never observes
/// the calibrated pillars.
///
/// # Example
///
/// ```rust,ignore
/// use parcurve_curves::curve::ZeroCurve;
///
/// let mut curve = ZeroCurve::new();
/// curve.add_node(0.5, 0.0100)?;
/// curve.add_node(1.0, 0.0150)?;
///
/// let rate = curve.zero_rate(0.75)?;   // linear between the pillars
/// let df = curve.discount_factor(1.0)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroCurve {
    /// Pillar maturities in years, strictly increasing.
    maturities: Vec<f64>,
    /// Continuously compounded zero rates at each pillar.
    rates: Vec<f64>,
}

impl ZeroCurve {
    /// Creates an empty curve.
    ///
    /// An empty curve is degenerate but well-defined: every zero rate
    /// query returns `0.0` and every discount factor is `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pillar, or overwrites the rate of an existing pillar at
    /// the same maturity.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMaturity`] if `maturity` is not
    /// strictly positive.
    pub fn add_node(&mut self, maturity: f64, rate: f64) -> CurveResult<()> {
        if maturity <= 0.0 || !maturity.is_finite() {
            return Err(CurveError::invalid_maturity(maturity));
        }

        match self
            .maturities
            .binary_search_by(|m| m.total_cmp(&maturity))
        {
            Ok(i) => self.rates[i] = rate,
            Err(i) => {
                self.maturities.insert(i, maturity);
                self.rates.insert(i, rate);
            }
        }
        Ok(())
    }

    /// Returns the continuously compounded zero rate applicable at year
    /// fraction `t`.
    ///
    /// - empty curve: `0.0`;
    /// - `t` at or below the first pillar: the first pillar's rate;
    /// - `t` at or above the last pillar: the last pillar's rate;
    /// - `t` exactly on a pillar: that pillar's stored rate;
    /// - otherwise: linear interpolation between the bracketing pillars.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMaturity`] if `t` is negative.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 || !t.is_finite() {
            return Err(CurveError::invalid_maturity(t));
        }
        if self.maturities.is_empty() {
            return Ok(0.0);
        }

        // Exact pillar hit: return the stored rate, never an interpolated one.
        if let Ok(i) = self.maturities.binary_search_by(|m| m.total_cmp(&t)) {
            return Ok(self.rates[i]);
        }

        let first = self.maturities[0];
        let last = *self.maturities.last().unwrap_or(&first);
        if t <= first {
            return Ok(self.rates[0]);
        }
        if t >= last {
            return Ok(*self.rates.last().unwrap_or(&self.rates[0]));
        }

        // Bracketing pillars: maturities[i-1] < t < maturities[i].
        let i = self.maturities.partition_point(|&m| m < t);
        let (t1, t2) = (self.maturities[i - 1], self.maturities[i]);
        let (r1, r2) = (self.rates[i - 1], self.rates[i]);

        Ok(r1 + (r2 - r1) * (t - t1) / (t2 - t1))
    }

    /// Returns the discount factor `exp(-zero_rate(t) * t)`.
    ///
    /// In `(0, 1]` for non-negative rates; may exceed 1 when the curve
    /// carries negative rates.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMaturity`] if `t` is negative.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let rate = self.zero_rate(t)?;
        Ok((-rate * t).exp())
    }

    /// Returns the largest pillar maturity, or `0.0` for an empty curve.
    #[must_use]
    pub fn max_maturity(&self) -> f64 {
        self.maturities.last().copied().unwrap_or(0.0)
    }

    /// Returns true if a pillar exists at exactly this maturity.
    #[must_use]
    pub fn contains(&self, maturity: f64) -> bool {
        self.maturities
            .binary_search_by(|m| m.total_cmp(&maturity))
            .is_ok()
    }

    /// Enumerates the pillars as `(maturity, rate)` pairs in ascending
    /// maturity order.
    pub fn pillars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.maturities
            .iter()
            .copied()
            .zip(self.rates.iter().copied())
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maturities.len()
    }

    /// Returns true if the curve has no pillars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maturities.is_empty()
    }
}
