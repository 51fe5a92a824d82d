use serde::Serialize;

use super::{ensure_finite, MembershipFunction};
use crate::error::{FuzzyError, Result};

/// Trapezoidal membership with a plateau between `b` and `c`.
///
/// `a == b` or `c == d` gives a shoulder: the plateau extends to the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoid {
    /// Requires `a <= b <= c <= d` and `a < d`
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        ensure_finite("trapezoid", &[a, b, c, d])?;
        if !(a <= b && b <= c && c <= d && a < d) {
            return Err(FuzzyError::invalid(format!(
                "trapezoid requires a <= b <= c <= d and a < d, got ({}, {}, {}, {})",
                a, b, c, d
            )));
        }
        Ok(Self { a, b, c, d })
    }
}

impl MembershipFunction for Trapezoid {
    fn membership(&self, x: f64) -> f64 {
        let Trapezoid { a, b, c, d } = *self;
        if x.is_nan() || x < a || x > d {
            0.0
        } else if x >= b && x <= c {
            1.0
        } else if x <= a || x >= d {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (d - x) / (d - c)
        }
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }

    fn kind(&self) -> &'static str {
        "trapezoid"
    }
}
