use super::{AggregatedCurve, DefuzzificationStrategy};
use crate::error::Result;

/// Centre of gravity: `Σ x·μ / Σ μ` over the sample points.
///
/// A Riemann-sum approximation; accuracy follows sample resolution. An
/// all-zero curve defuzzifies to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centroid;

impl DefuzzificationStrategy for Centroid {
    fn name(&self) -> &'static str {
        "centroid"
    }

    fn defuzzify_curve(&self, curve: &AggregatedCurve) -> Result<f64> {
        let (numerator, denominator) = curve
            .points()
            .iter()
            .fold((0.0, 0.0), |(num, den), &(x, mu)| (num + x * mu, den + mu));

        if denominator == 0.0 {
            Ok(0.0)
        } else {
            Ok(numerator / denominator)
        }
    }
}
