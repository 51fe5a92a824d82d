//! Linking pass
//!
//! Rules name variables and sets by string. `RuleValidator` resolves those
//! names against a registry ahead of evaluation so configuration mistakes
//! surface before the first input arrives.

use std::sync::Arc;

use tracing::warn;

use super::{Consequent, Rule, RuleBase};
use crate::error::Result;
use crate::variable::VariableRegistry;

pub struct RuleValidator {
    registry: Arc<VariableRegistry>,
}

impl RuleValidator {
    pub fn new(registry: Arc<VariableRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve every name the rule mentions
    pub fn validate_rule(&self, rule: &Rule) -> Result<()> {
        super::rule::validate_weight(rule.weight())?;

        for (variable, set) in rule.antecedent() {
            self.registry.require(variable)?.require_set(set)?;
        }

        match rule.consequent() {
            Consequent::Set { variable, set } => {
                self.registry.require(variable)?.require_set(set)?;
            }
            Consequent::Function { function, .. } => {
                for input in function.variables() {
                    self.registry.require(input)?;
                }
            }
        }
        Ok(())
    }

    /// Validate every rule, disabled ones included, and return the single
    /// output variable
    pub fn validate_rule_base(&self, rules: &RuleBase) -> Result<Option<String>> {
        for rule in rules {
            if let Err(e) = self.validate_rule(rule) {
                warn!("Rule {:?} failed validation: {}", rule.id(), e);
                return Err(e);
            }
        }
        Ok(rules.output_variable()?.map(String::from))
    }
}
