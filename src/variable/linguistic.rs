use indexmap::IndexMap;

use super::FuzzySet;
use crate::error::{FuzzyError, Result};

/// A named numeric domain `[min, max]` holding its fuzzy sets by name
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: String,
    min: f64,
    max: f64,
    sets: IndexMap<String, FuzzySet>,
}

impl LinguisticVariable {
    /// Requires finite bounds with `min < max`
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Result<Self> {
        let name = name.into();
        if !min.is_finite() || !max.is_finite() {
            return Err(FuzzyError::invalid(format!(
                "range of '{}' must be finite, got [{}, {}]",
                name, min, max
            )));
        }
        if min >= max {
            return Err(FuzzyError::invalid(format!(
                "range of '{}' requires min < max, got [{}, {}]",
                name, min, max
            )));
        }
        Ok(Self {
            name,
            min,
            max,
            sets: IndexMap::new(),
        })
    }

    /// Builder form of [`add_fuzzy_set`](Self::add_fuzzy_set)
    pub fn with_set(mut self, set: FuzzySet) -> Self {
        self.add_fuzzy_set(set);
        self
    }

    /// Insert or replace a set by name; the last write wins
    pub fn add_fuzzy_set(&mut self, set: FuzzySet) {
        self.sets.insert(set.name().to_string(), set);
    }

    pub fn fuzzy_set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.get(name)
    }

    pub fn has_fuzzy_set(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub(crate) fn require_set(&self, name: &str) -> Result<&FuzzySet> {
        self.sets.get(name).ok_or_else(|| FuzzyError::UnknownSet {
            variable: self.name.clone(),
            set: name.to_string(),
        })
    }

    /// Sets in insertion order
    pub fn sets(&self) -> impl Iterator<Item = &FuzzySet> {
        self.sets.values()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Degree of membership of `value` (clamped into the domain) in every set
    pub fn fuzzify(&self, value: f64) -> IndexMap<String, f64> {
        let x = self.clamp(value);
        self.sets
            .values()
            .map(|set| (set.name().to_string(), set.membership(x)))
            .collect()
    }
}
