use super::DefuzzificationStrategy;
use crate::error::{FuzzyError, Result};

/// Sugeno weighted average: `Σ output·strength / Σ strength`, 0 when no rule fired
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAverage;

impl DefuzzificationStrategy for WeightedAverage {
    fn name(&self) -> &'static str {
        "weighted_average"
    }

    fn defuzzify_weighted(&self, outputs: &[f64], strengths: &[f64]) -> Result<f64> {
        if outputs.len() != strengths.len() {
            return Err(FuzzyError::invalid(format!(
                "{} rule outputs but {} firing strengths",
                outputs.len(),
                strengths.len()
            )));
        }

        let (numerator, denominator) = outputs
            .iter()
            .zip(strengths)
            .fold((0.0, 0.0), |(num, den), (o, w)| (num + o * w, den + w));

        if denominator == 0.0 {
            Ok(0.0)
        } else {
            Ok(numerator / denominator)
        }
    }
}
