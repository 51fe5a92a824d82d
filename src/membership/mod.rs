//! Membership Functions
//!
//! Pure functions mapping a crisp value to a degree of membership in [0, 1].
//! Shapes validate their control points on construction, so a constructed
//! function never returns values outside the unit interval.

mod gaussian;
mod trapezoid;
mod triangle;

pub use gaussian::Gaussian;
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

use std::fmt;

use crate::error::{FuzzyError, Result};

/// Interface shared by every membership shape
pub trait MembershipFunction: fmt::Debug + Send + Sync {
    /// Degree of membership of `x`, always in [0, 1]
    fn membership(&self, x: f64) -> f64;

    /// The defining control points, in declaration order
    fn parameters(&self) -> Vec<f64>;

    /// Discriminator such as `"triangle"`
    fn kind(&self) -> &'static str;
}

fn ensure_finite(kind: &str, params: &[f64]) -> Result<()> {
    if params.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(FuzzyError::invalid(format!(
            "{} parameters must be finite, got {:?}",
            kind, params
        )))
    }
}
