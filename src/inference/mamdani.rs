use std::sync::Arc;

use tracing::debug;

use super::{Inference, InferenceEngine, RuleFiring};
use crate::defuzzify::{AggregatedCurve, Centroid, DefuzzificationStrategy};
use crate::error::{FuzzyError, Result};
use crate::operator::{Implication, SNorm, TNorm};
use crate::rules::{Consequent, RuleBase};
use crate::variable::{Inputs, VariableRegistry};

/// Intervals across the output domain (201 sample points)
pub const DEFAULT_SAMPLES: usize = 200;

/// Mamdani inference: clip each consequent set by its rule's firing strength,
/// fold the clipped sets together over a sampled output domain, defuzzify.
#[derive(Debug, Clone)]
pub struct MamdaniEngine {
    registry: Arc<VariableRegistry>,
    tnorm: TNorm,
    snorm: SNorm,
    implication: Implication,
    samples: usize,
    defuzzifier: Arc<dyn DefuzzificationStrategy>,
}

impl MamdaniEngine {
    /// min / max / clip, 200 intervals, centroid
    pub fn new(registry: Arc<VariableRegistry>) -> Self {
        Self {
            registry,
            tnorm: TNorm::Minimum,
            snorm: SNorm::Maximum,
            implication: Implication::Minimum,
            samples: DEFAULT_SAMPLES,
            defuzzifier: Arc::new(Centroid),
        }
    }

    pub fn with_tnorm(mut self, tnorm: TNorm) -> Self {
        self.tnorm = tnorm;
        self
    }

    pub fn with_snorm(mut self, snorm: SNorm) -> Self {
        self.snorm = snorm;
        self
    }

    pub fn with_implication(mut self, implication: Implication) -> Self {
        self.implication = implication;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(FuzzyError::invalid("sample resolution must be at least 1"));
        }
        self.samples = samples;
        Ok(self)
    }

    pub fn with_defuzzifier(mut self, defuzzifier: Arc<dyn DefuzzificationStrategy>) -> Self {
        self.defuzzifier = defuzzifier;
        self
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }
}

impl InferenceEngine for MamdaniEngine {
    fn name(&self) -> &'static str {
        "mamdani"
    }

    fn infer(&self, inputs: &Inputs, rules: &RuleBase) -> Result<Inference> {
        if rules.enabled().next().is_none() {
            debug!("No enabled rules among {}, output is 0", rules.len());
            return Ok(Inference::empty());
        }

        let output_name = match rules.output_variable()? {
            Some(name) => name,
            None => return Ok(Inference::empty()),
        };
        let output = self.registry.require(output_name)?;

        let mut curve = AggregatedCurve::zeroed(output.min(), output.max(), self.samples);
        let mut firings = Vec::new();

        for rule in rules.enabled() {
            let strength = rule.firing_strength(inputs, &self.registry, self.tnorm)?;

            let set = match rule.consequent() {
                Consequent::Set { set, .. } => output.require_set(set)?,
                Consequent::Function { .. } => {
                    return Err(FuzzyError::invalid(format!(
                        "rule {:?} has a function consequent; mamdani inference needs a fuzzy set",
                        rule.id()
                    )))
                }
            };

            if strength > 0.0 {
                for (x, aggregate) in curve.points_mut() {
                    let implied = self.implication.apply(strength, set.membership(*x));
                    *aggregate = self.snorm.or(*aggregate, implied);
                }
            }

            firings.push(RuleFiring {
                rule_id: rule.id(),
                strength,
                value: None,
            });
        }

        let crisp = self.defuzzifier.defuzzify_curve(&curve)?;
        debug!(
            output = crisp,
            variable = output_name,
            fired = firings.iter().filter(|f| f.strength > 0.0).count(),
            defuzzifier = self.defuzzifier.name(),
            "Mamdani inference complete"
        );

        Ok(Inference {
            output: crisp,
            firings,
            aggregated: Some(curve),
        })
    }
}
