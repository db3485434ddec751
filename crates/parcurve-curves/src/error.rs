//! Error types for curve operations.
//!
//! This module provides error handling for curve mutation, curve queries,
//! and sequential bootstrap calibration.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Maturity is outside the valid domain for a curve node or query.
    #[error("Invalid maturity {maturity:.4}: must be positive")]
    InvalidMaturity {
        /// The offending maturity in years.
        maturity: f64,
    },

    /// Payment tenor is non-positive, which would make the coupon grid unbounded.
    #[error("Invalid payment tenor {tenor:.4}: must be positive")]
    InvalidTenor {
        /// The offending tenor in years.
        tenor: f64,
    },

    /// Bootstrap solved for a discount factor that is not strictly positive,
    /// indicating an arbitrage-inconsistent or malformed quote set.
    #[error(
        "Non-positive discount factor {discount_factor:.6} at maturity {maturity:.4}"
    )]
    NonPositiveDiscountFactor {
        /// Pillar maturity being solved.
        maturity: f64,
        /// The offending discount factor.
        discount_factor: f64,
    },
}

impl CurveError {
    /// Creates an invalid maturity error.
    #[must_use]
    pub fn invalid_maturity(maturity: f64) -> Self {
        Self::InvalidMaturity { maturity }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(tenor: f64) -> Self {
        Self::InvalidTenor { tenor }
    }

    /// Creates a non-positive discount factor error.
    #[must_use]
    pub fn non_positive_discount_factor(maturity: f64, discount_factor: f64) -> Self {
        Self::NonPositiveDiscountFactor {
            maturity,
            discount_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = CurveError::invalid_maturity(-1.5);
        let msg = format!("{}", err);
        assert!(msg.contains("-1.5"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_invalid_tenor_display() {
        let err = CurveError::invalid_tenor(0.0);
        let msg = format!("{}", err);
        assert!(msg.contains("tenor"));
    }

    #[test]
    fn test_non_positive_discount_factor_display() {
        let err = CurveError::non_positive_discount_factor(6.0, -0.02);
        let msg = format!("{}", err);
        assert!(msg.contains("6.0"));
        assert!(msg.contains("Non-positive discount factor"));
    }
}
