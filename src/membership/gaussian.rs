use serde::Serialize;

use super::{ensure_finite, MembershipFunction};
use crate::error::{FuzzyError, Result};

/// Gaussian bell: `exp(-0.5 * ((x - mean) / stdv)^2)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gaussian {
    mean: f64,
    stdv: f64,
}

impl Gaussian {
    pub fn new(mean: f64, stdv: f64) -> Result<Self> {
        ensure_finite("gaussian", &[mean, stdv])?;
        if stdv <= 0.0 {
            return Err(FuzzyError::invalid(format!(
                "gaussian requires stdv > 0, got {}",
                stdv
            )));
        }
        Ok(Self { mean, stdv })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl MembershipFunction for Gaussian {
    fn membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let z = (x - self.mean) / self.stdv;
        (-0.5 * z * z).exp()
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mean, self.stdv]
    }

    fn kind(&self) -> &'static str {
        "gaussian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_shape() {
        let g = Gaussian::new(50.0, 10.0).unwrap();
        assert_eq!(g.membership(50.0), 1.0);
        assert!((g.membership(60.0) - (-0.5f64).exp()).abs() < 1e-12);
        assert_eq!(g.membership(40.0), g.membership(60.0));
        assert!(g.membership(1e6) >= 0.0);
        assert!(g.membership(1e6) < 1e-12);
    }

    #[test]
    fn test_invalid_stdv() {
        assert!(Gaussian::new(0.0, 0.0).is_err());
        assert!(Gaussian::new(0.0, -1.0).is_err());
        assert!(Gaussian::new(f64::NAN, 1.0).is_err());
    }
}
