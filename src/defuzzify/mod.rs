//! Defuzzification Strategies
//!
//! Turn an aggregated fuzzy result into one crisp number. Mamdani-style
//! strategies read a sampled curve; the Sugeno-style weighted average reads
//! parallel lists of rule outputs and firing strengths. Each strategy rejects
//! the shape it was not built for instead of guessing.

mod centroid;
mod mean_of_maxima;
mod weighted;

pub use centroid::Centroid;
pub use mean_of_maxima::MeanOfMaxima;
pub use weighted::WeightedAverage;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Aggregated membership sampled over an output domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedCurve {
    points: Vec<(f64, f64)>,
}

impl AggregatedCurve {
    /// `samples` equal intervals over `[min, max]`, all memberships 0
    pub fn zeroed(min: f64, max: f64, samples: usize) -> Self {
        let step = (max - min) / samples as f64;
        let points = (0..=samples).map(|i| (min + i as f64 * step, 0.0)).collect();
        Self { points }
    }

    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// `(x, μ)` pairs in ascending x
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [(f64, f64)] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_membership(&self) -> f64 {
        self.points.iter().map(|&(_, mu)| mu).fold(0.0, f64::max)
    }

    pub fn total_membership(&self) -> f64 {
        self.points.iter().map(|&(_, mu)| mu).sum()
    }
}

/// A way of collapsing fuzzy output into a crisp value
pub trait DefuzzificationStrategy: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Defuzzify a sampled, aggregated membership curve
    fn defuzzify_curve(&self, _curve: &AggregatedCurve) -> Result<f64> {
        Err(FuzzyError::UnsupportedMode {
            strategy: self.name(),
            mode: "aggregated curve",
        })
    }

    /// Defuzzify per-rule crisp outputs weighted by firing strength
    fn defuzzify_weighted(&self, _outputs: &[f64], _strengths: &[f64]) -> Result<f64> {
        Err(FuzzyError::UnsupportedMode {
            strategy: self.name(),
            mode: "weighted rule output",
        })
    }
}

/// Configuration-level choice of strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationMethod {
    #[default]
    Centroid,
    MeanOfMaxima,
    WeightedAverage,
}

impl DefuzzificationMethod {
    pub fn strategy(self) -> Arc<dyn DefuzzificationStrategy> {
        match self {
            DefuzzificationMethod::Centroid => Arc::new(Centroid),
            DefuzzificationMethod::MeanOfMaxima => Arc::new(MeanOfMaxima),
            DefuzzificationMethod::WeightedAverage => Arc::new(WeightedAverage),
        }
    }
}

impl FromStr for DefuzzificationMethod {
    type Err = FuzzyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centroid" | "cog" => Ok(DefuzzificationMethod::Centroid),
            "mean_of_maxima" | "mom" => Ok(DefuzzificationMethod::MeanOfMaxima),
            "weighted_average" | "sugeno" => Ok(DefuzzificationMethod::WeightedAverage),
            other => Err(FuzzyError::invalid(format!(
                "unknown defuzzification method '{}'",
                other
            ))),
        }
    }
}
