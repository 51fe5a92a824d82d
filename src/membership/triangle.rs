use serde::Serialize;

use super::{ensure_finite, MembershipFunction};
use crate::error::{FuzzyError, Result};

/// Triangular membership: rises from `a` to the peak at `b`, falls to `c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Requires `a <= b <= c` and `a < c`
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        ensure_finite("triangle", &[a, b, c])?;
        if !(a <= b && b <= c && a < c) {
            return Err(FuzzyError::invalid(format!(
                "triangle requires a <= b <= c and a < c, got ({}, {}, {})",
                a, b, c
            )));
        }
        Ok(Self { a, b, c })
    }

    pub fn peak(&self) -> f64 {
        self.b
    }
}

impl MembershipFunction for Triangle {
    fn membership(&self, x: f64) -> f64 {
        let Triangle { a, b, c } = *self;
        if x.is_nan() || x < a || x > c {
            0.0
        } else if x == b {
            1.0
        } else if x <= a || x >= c {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn kind(&self) -> &'static str {
        "triangle"
    }
}
