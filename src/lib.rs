//! Fuzzy Inference Core
//!
//! Domain-agnostic fuzzy logic for rule-based decision making:
//! - Membership functions (triangle, trapezoid, Gaussian)
//! - Linguistic variables with named fuzzy sets
//! - Weighted IF-THEN rules in an owned, id-addressed rule base
//! - Mamdani and Sugeno inference with pluggable defuzzification
//!
//! ```
//! use std::sync::Arc;
//! use fuzzy_inference::{
//!     EngineConfig, Evaluator, FuzzySet, Inputs, LinguisticVariable, Rule, RuleBase, Triangle,
//!     VariableRegistry,
//! };
//!
//! let temp = LinguisticVariable::new("Temp", 0.0, 40.0)?
//!     .with_set(FuzzySet::new("Cold", Triangle::new(0.0, 0.0, 20.0)?));
//! let heat = LinguisticVariable::new("Heat", 0.0, 10.0)?
//!     .with_set(FuzzySet::new("High", Triangle::new(5.0, 7.5, 10.0)?));
//! let registry = Arc::new(VariableRegistry::new().with(temp).with(heat));
//!
//! let mut rules = RuleBase::new();
//! rules.create(Rule::mamdani([("Temp", "Cold")], "Heat", "High")?)?;
//!
//! let evaluator = Evaluator::from_config(registry, &EngineConfig::default())?;
//! let inputs: Inputs = [("Temp".to_string(), 0.0)].into_iter().collect();
//! let heat = evaluator.evaluate(&inputs, &rules)?;
//! assert!((heat - 7.5).abs() < 1e-9);
//! # Ok::<(), fuzzy_inference::FuzzyError>(())
//! ```

pub mod config;
pub mod defuzzify;
pub mod error;
pub mod evaluator;
pub mod inference;
pub mod membership;
pub mod operator;
pub mod rules;
pub mod utils;
pub mod variable;

// Re-exports for convenience
pub use config::{EngineConfig, EngineKind};
pub use defuzzify::{AggregatedCurve, Centroid, DefuzzificationMethod, DefuzzificationStrategy, MeanOfMaxima, WeightedAverage};
pub use error::{FuzzyError, Result};
pub use evaluator::{Evaluation, Evaluator};
pub use inference::{Inference, InferenceEngine, MamdaniEngine, RuleFiring, SugenoEngine};
pub use membership::{Gaussian, MembershipFunction, Trapezoid, Triangle};
pub use operator::{Implication, SNorm, TNorm};
pub use rules::{Consequent, Rule, RuleBase, RuleId, RuleValidator, SugenoFunction};
pub use variable::{Fuzzified, FuzzySet, Inputs, LinguisticVariable, VariableRegistry};
