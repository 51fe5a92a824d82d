use std::sync::Arc;

use tracing::debug;

use super::{Inference, InferenceEngine, RuleFiring};
use crate::defuzzify::{DefuzzificationStrategy, WeightedAverage};
use crate::error::{FuzzyError, Result};
use crate::operator::TNorm;
use crate::rules::{Consequent, RuleBase};
use crate::variable::{Inputs, VariableRegistry};

/// Sugeno (TSK) inference: each rule yields a crisp value, combined by the
/// firing-strength weighted average. Antecedents always fold with `min`.
#[derive(Debug, Clone)]
pub struct SugenoEngine {
    registry: Arc<VariableRegistry>,
}

impl SugenoEngine {
    pub fn new(registry: Arc<VariableRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }
}

impl InferenceEngine for SugenoEngine {
    fn name(&self) -> &'static str {
        "sugeno"
    }

    fn infer(&self, inputs: &Inputs, rules: &RuleBase) -> Result<Inference> {
        if rules.enabled().next().is_none() {
            debug!("No enabled rules among {}, output is 0", rules.len());
            return Ok(Inference::empty());
        }
        rules.output_variable()?;

        let mut firings = Vec::new();
        let mut outputs = Vec::new();
        let mut strengths = Vec::new();

        for rule in rules.enabled() {
            let strength = rule.firing_strength(inputs, &self.registry, TNorm::Minimum)?;
            let value = match rule.consequent() {
                Consequent::Function { function, .. } => function.evaluate(inputs)?,
                Consequent::Set { variable, set } => {
                    return Err(FuzzyError::invalid(format!(
                        "rule {:?} concludes '{} is {}'; sugeno inference needs a crisp function",
                        rule.id(),
                        variable,
                        set
                    )))
                }
            };

            outputs.push(value);
            strengths.push(strength);
            firings.push(RuleFiring {
                rule_id: rule.id(),
                strength,
                value: Some(value),
            });
        }

        let crisp = WeightedAverage.defuzzify_weighted(&outputs, &strengths)?;
        debug!(output = crisp, rules = firings.len(), "Sugeno inference complete");

        Ok(Inference {
            output: crisp,
            firings,
            aggregated: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{Gaussian, Triangle};
    use crate::rules::Rule;
    use crate::variable::{FuzzySet, LinguisticVariable};

    fn registry() -> Arc<VariableRegistry> {
        let load = LinguisticVariable::new("Load", 0.0, 100.0)
            .unwrap()
            .with_set(FuzzySet::new("Light", Triangle::new(0.0, 0.0, 60.0).unwrap()))
            .with_set(FuzzySet::new("Heavy", Triangle::new(40.0, 100.0, 100.0).unwrap()))
            .with_set(FuzzySet::new("Any", Gaussian::new(50.0, 1000.0).unwrap()));
        Arc::new(VariableRegistry::new().with(load))
    }

    fn load(x: f64) -> Inputs {
        [("Load".to_string(), x)].into_iter().collect()
    }

    #[test]
    fn test_weighted_average_of_constants() {
        let mut base = RuleBase::new();
        base.create(Rule::sugeno([("Load", "Light")], "Fan", "20").unwrap()).unwrap();
        base.create(Rule::sugeno([("Load", "Heavy")], "Fan", "80").unwrap()).unwrap();

        // Load 50: Light = 1/6, Heavy = 1/6
        let out = SugenoEngine::new(registry()).evaluate(&load(50.0), &base).unwrap();
        assert!((out - 50.0).abs() < 1e-9);

        // Load 10: only Light fires
        let out = SugenoEngine::new(registry()).evaluate(&load(10.0), &base).unwrap();
        assert!((out - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_consequent_uses_raw_input() {
        let mut base = RuleBase::new();
        base.create(Rule::sugeno([("Load", "Light")], "Fan", "0.5*Load + 1").unwrap()).unwrap();
        let inference = SugenoEngine::new(registry()).infer(&load(30.0), &base).unwrap();
        assert!((inference.output - 16.0).abs() < 1e-12);
        assert_eq!(inference.firings[0].value, Some(16.0));
        assert!(inference.aggregated.is_none());
    }

    #[test]
    fn test_missing_consequent_input() {
        let mut base = RuleBase::new();
        base.create(Rule::sugeno([("Load", "Any")], "Fan", "2*Speed").unwrap()).unwrap();
        assert_eq!(
            SugenoEngine::new(registry()).evaluate(&load(30.0), &base).unwrap_err(),
            FuzzyError::MissingInput("Speed".to_string())
        );
    }

    #[test]
    fn test_set_consequent_rejected() {
        let mut base = RuleBase::new();
        base.create(Rule::mamdani([("Load", "Any")], "Fan", "Fast").unwrap()).unwrap();
        assert!(matches!(
            SugenoEngine::new(registry()).evaluate(&load(30.0), &base),
            Err(FuzzyError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_two_output_variables_rejected() {
        let mut base = RuleBase::new();
        base.create(Rule::sugeno([("Load", "Light")], "Fan", "10").unwrap()).unwrap();
        base.create(Rule::sugeno([("Load", "Heavy")], "Pump", "90").unwrap()).unwrap();
        assert_eq!(
            SugenoEngine::new(registry()).evaluate(&load(50.0), &base).unwrap_err(),
            FuzzyError::MultipleOutputVariables(vec!["Fan".to_string(), "Pump".to_string()])
        );
    }

    #[test]
    fn test_nothing_fires() {
        let mut base = RuleBase::new();
        base.create(Rule::sugeno([("Load", "Heavy")], "Fan", "80").unwrap()).unwrap();
        assert_eq!(SugenoEngine::new(registry()).evaluate(&load(5.0), &base).unwrap(), 0.0);
    }
}
