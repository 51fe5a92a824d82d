//! Inference Engines
//!
//! Both engines are pure functions of (inputs, rule base): they keep no state
//! between calls and are `Send + Sync`, so one engine can serve many threads
//! as long as nobody mutates the rule base meanwhile.

mod mamdani;
mod sugeno;

pub use mamdani::{MamdaniEngine, DEFAULT_SAMPLES};
pub use sugeno::SugenoEngine;

use serde::Serialize;

use crate::defuzzify::AggregatedCurve;
use crate::error::Result;
use crate::rules::{RuleBase, RuleId};
use crate::variable::Inputs;

/// How one enabled rule responded to the inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleFiring {
    pub rule_id: Option<RuleId>,
    pub strength: f64,
    /// Crisp consequent value (Sugeno only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Full result of one inference pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inference {
    pub output: f64,
    pub firings: Vec<RuleFiring>,
    /// Aggregated output curve (Mamdani only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregated: Option<AggregatedCurve>,
}

impl Inference {
    /// Nothing fired: output 0
    pub fn empty() -> Self {
        Self {
            output: 0.0,
            firings: Vec::new(),
            aggregated: None,
        }
    }
}

/// One inference semantics (Mamdani, Sugeno, ...)
pub trait InferenceEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run inference and keep the intermediate results
    fn infer(&self, inputs: &Inputs, rules: &RuleBase) -> Result<Inference>;

    /// Crisp output only
    fn evaluate(&self, inputs: &Inputs, rules: &RuleBase) -> Result<f64> {
        Ok(self.infer(inputs, rules)?.output)
    }
}
