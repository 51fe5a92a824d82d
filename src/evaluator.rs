//! Evaluation Facade
//!
//! Couples a variable registry with one inference engine and offers the
//! caller-facing entry points: crisp evaluation, an explained evaluation for
//! display, and parallel batch evaluation.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::inference::{Inference, InferenceEngine};
use crate::rules::{RuleBase, RuleValidator};
use crate::variable::{Fuzzified, Inputs, VariableRegistry};

/// Everything one evaluation produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub engine: &'static str,
    /// Membership of every supplied input in every set of its variable
    pub fuzzified: Fuzzified,
    pub inference: Inference,
}

impl Evaluation {
    pub fn output(&self) -> f64 {
        self.inference.output
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone)]
pub struct Evaluator {
    registry: Arc<VariableRegistry>,
    engine: Arc<dyn InferenceEngine>,
}

impl Evaluator {
    pub fn new(registry: Arc<VariableRegistry>, engine: Arc<dyn InferenceEngine>) -> Self {
        Self { registry, engine }
    }

    pub fn from_config(registry: Arc<VariableRegistry>, config: &EngineConfig) -> Result<Self> {
        let engine = config.build_engine(registry.clone())?;
        Ok(Self::new(registry, engine))
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &dyn InferenceEngine {
        self.engine.as_ref()
    }

    /// Link every rule against the registry before evaluating
    pub fn validate(&self, rules: &RuleBase) -> Result<Option<String>> {
        RuleValidator::new(self.registry.clone()).validate_rule_base(rules)
    }

    pub fn evaluate(&self, inputs: &Inputs, rules: &RuleBase) -> Result<f64> {
        self.engine.evaluate(inputs, rules)
    }

    pub fn explain(&self, inputs: &Inputs, rules: &RuleBase) -> Result<Evaluation> {
        let inference = self.engine.infer(inputs, rules)?;
        Ok(Evaluation {
            engine: self.engine.name(),
            fuzzified: self.registry.fuzzify_inputs(inputs),
            inference,
        })
    }

    /// Evaluate independent input sets in parallel; results keep input order
    pub fn evaluate_batch(&self, batch: &[Inputs], rules: &RuleBase) -> Vec<Result<f64>> {
        debug!(size = batch.len(), engine = self.engine.name(), "Evaluating batch");
        batch
            .par_iter()
            .map(|inputs| self.engine.evaluate(inputs, rules))
            .collect()
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("engine", &self.engine.name())
            .field("variables", &self.registry.len())
            .finish()
    }
}
