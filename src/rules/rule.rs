use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

use super::SugenoFunction;
use crate::error::{FuzzyError, Result};
use crate::operator::TNorm;
use crate::variable::{Inputs, VariableRegistry};

pub type RuleId = u32;

/// Right-hand side of a rule
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Consequent {
    /// `THEN variable IS set` (Mamdani)
    Set { variable: String, set: String },
    /// `THEN variable = f(inputs)` (Sugeno)
    Function {
        variable: String,
        function: SugenoFunction,
    },
}

impl Consequent {
    pub fn set(variable: impl Into<String>, set: impl Into<String>) -> Self {
        Consequent::Set {
            variable: variable.into(),
            set: set.into(),
        }
    }

    pub fn function(variable: impl Into<String>, expression: &str) -> Result<Self> {
        Ok(Consequent::Function {
            variable: variable.into(),
            function: SugenoFunction::parse(expression)?,
        })
    }

    /// Build a fuzzy-set consequent from a name→name mapping with exactly one clause
    pub fn set_from_clauses<K, V>(clauses: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (variable, set) = single_clause(clauses)?;
        Ok(Consequent::Set { variable, set })
    }

    /// Build a function consequent from a name→expression mapping with exactly one clause
    pub fn function_from_clauses<K, V>(clauses: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (variable, expression) = single_clause(clauses)?;
        Consequent::function(variable, &expression)
    }

    /// The output variable this consequent assigns
    pub fn variable(&self) -> &str {
        match self {
            Consequent::Set { variable, .. } | Consequent::Function { variable, .. } => variable,
        }
    }
}

fn single_clause<K, V>(clauses: impl IntoIterator<Item = (K, V)>) -> Result<(String, String)>
where
    K: Into<String>,
    V: Into<String>,
{
    let mut iter = clauses.into_iter();
    match (iter.next(), iter.next()) {
        (Some((k, v)), None) => Ok((k.into(), v.into())),
        (None, _) => Err(FuzzyError::invalid("consequent must contain exactly one clause, got 0")),
        (Some(_), Some(_)) => Err(FuzzyError::invalid(format!(
            "consequent must contain exactly one clause, got {}",
            2 + iter.count()
        ))),
    }
}

/// `IF v1 IS s1 AND v2 IS s2 ... THEN consequent`, with a weight and an enable gate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub(crate) id: Option<RuleId>,
    antecedent: IndexMap<String, String>,
    consequent: Consequent,
    weight: f64,
    enabled: bool,
}

impl Rule {
    /// A rule with weight 1, enabled, and no id until it joins a rule base.
    ///
    /// The antecedent keeps declaration order; naming a variable twice keeps
    /// the last set.
    pub fn new<K, V>(antecedent: impl IntoIterator<Item = (K, V)>, consequent: Consequent) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let antecedent: IndexMap<String, String> = antecedent
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if antecedent.is_empty() {
            return Err(FuzzyError::invalid("antecedent must contain at least one clause"));
        }
        Ok(Self {
            id: None,
            antecedent,
            consequent,
            weight: 1.0,
            enabled: true,
        })
    }

    /// `IF ... THEN variable IS set`
    pub fn mamdani<K, V>(
        antecedent: impl IntoIterator<Item = (K, V)>,
        variable: &str,
        set: &str,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(antecedent, Consequent::set(variable, set))
    }

    /// `IF ... THEN variable = expression`
    pub fn sugeno<K, V>(
        antecedent: impl IntoIterator<Item = (K, V)>,
        variable: &str,
        expression: &str,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(antecedent, Consequent::function(variable, expression)?)
    }

    pub fn with_id(mut self, id: RuleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Result<Self> {
        self.set_weight(weight)?;
        Ok(self)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn id(&self) -> Option<RuleId> {
        self.id
    }

    pub fn antecedent(&self) -> &IndexMap<String, String> {
        &self.antecedent
    }

    pub fn consequent(&self) -> &Consequent {
        &self.consequent
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        validate_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    /// Replace antecedent and consequent in place, keeping id, weight and gate
    pub fn set_content<K, V>(&mut self, antecedent: impl IntoIterator<Item = (K, V)>, consequent: Consequent) -> Result<()>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let replacement = Rule::new(antecedent, consequent)?;
        self.antecedent = replacement.antecedent;
        self.consequent = replacement.consequent;
        Ok(())
    }

    /// How strongly this rule applies to `inputs`.
    ///
    /// Each clause's input is clamped into its variable's domain before the
    /// membership lookup; memberships are folded with `tnorm` in clause order
    /// and scaled by the weight. A disabled rule is 0 without any lookups.
    pub fn firing_strength(&self, inputs: &Inputs, registry: &VariableRegistry, tnorm: TNorm) -> Result<f64> {
        if !self.enabled {
            return Ok(0.0);
        }

        let mut strength = 1.0;
        for (variable_name, set_name) in &self.antecedent {
            let variable = registry.require(variable_name)?;
            let raw = *inputs
                .get(variable_name)
                .ok_or_else(|| FuzzyError::MissingInput(variable_name.clone()))?;
            if raw.is_nan() {
                return Err(FuzzyError::invalid(format!("input for '{}' is NaN", variable_name)));
            }
            let x = variable.clamp(raw);
            let mu = variable.require_set(set_name)?.membership(x);
            strength = tnorm.and(strength, mu);
        }

        let strength = strength * self.weight;
        trace!(rule = ?self.id, strength, "Antecedent evaluated");
        Ok(strength)
    }
}

/// Weights live in (0, 1]
pub fn validate_weight(weight: f64) -> Result<()> {
    if weight > 0.0 && weight <= 1.0 {
        Ok(())
    } else {
        Err(FuzzyError::invalid(format!("weight must be in (0, 1], got {}", weight)))
    }
}
