use super::{AggregatedCurve, DefuzzificationStrategy};
use crate::error::Result;

/// Mean of the sample points attaining the maximum membership.
///
/// Equality is exact on the sampled grid. An empty curve defuzzifies to 0;
/// an all-zero curve attains its maximum everywhere and gives the mean of
/// every sample point.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanOfMaxima;

impl DefuzzificationStrategy for MeanOfMaxima {
    fn name(&self) -> &'static str {
        "mean_of_maxima"
    }

    fn defuzzify_curve(&self, curve: &AggregatedCurve) -> Result<f64> {
        if curve.is_empty() {
            return Ok(0.0);
        }
        let max = curve.max_membership();

        let (sum, count) = curve
            .points()
            .iter()
            .filter(|&&(_, mu)| mu == max)
            .fold((0.0, 0usize), |(sum, count), &(x, _)| (sum + x, count + 1));

        Ok(sum / count as f64)
    }
}
