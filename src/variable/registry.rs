use indexmap::IndexMap;
use tracing::debug;

use super::{Inputs, LinguisticVariable};
use crate::error::{FuzzyError, Result};

/// Per-variable, per-set membership degrees
pub type Fuzzified = IndexMap<String, IndexMap<String, f64>>;

/// The set of linguistic variables rules are resolved against
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: IndexMap<String, LinguisticVariable>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(mut self, variable: LinguisticVariable) -> Self {
        self.add(variable);
        self
    }

    /// Register a variable, replacing any previous one with the same name
    pub fn add(&mut self, variable: LinguisticVariable) {
        self.variables.insert(variable.name().to_string(), variable);
    }

    pub fn get(&self, name: &str) -> Option<&LinguisticVariable> {
        self.variables.get(name)
    }

    /// Like [`get`](Self::get) but fails with `UnknownVariable`
    pub fn require(&self, name: &str) -> Result<&LinguisticVariable> {
        self.variables
            .get(name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.variables.values()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Fuzzify every input that names a registered variable.
    ///
    /// Inputs without a variable are skipped. The result follows registry
    /// order so reports are stable.
    pub fn fuzzify_inputs(&self, inputs: &Inputs) -> Fuzzified {
        for name in inputs.keys().filter(|name| !self.contains(name)) {
            debug!("Skipping input '{}': no such linguistic variable", name);
        }

        self.variables
            .values()
            .filter_map(|var| {
                inputs
                    .get(var.name())
                    .map(|value| (var.name().to_string(), var.fuzzify(*value)))
            })
            .collect()
    }
}
