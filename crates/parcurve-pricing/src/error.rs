//! Error types for pricing operations.

use parcurve_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Error types for pricing operations.
///
/// Pricing is total over a finished curve; the only failures are those
/// surfaced by the underlying curve queries (a degenerate annuity is a
/// well-defined market state and yields a sentinel, not an error).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An underlying curve query failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
