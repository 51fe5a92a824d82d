//! Engine Configuration
//!
//! Selects the inference semantics and operator family. Values come from
//! defaults, a YAML document or `FUZZY_*` environment variables.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::defuzzify::DefuzzificationMethod;
use crate::error::FuzzyError;
use crate::inference::{InferenceEngine, MamdaniEngine, SugenoEngine, DEFAULT_SAMPLES};
use crate::operator::{Implication, SNorm, TNorm};
use crate::variable::VariableRegistry;

pub const ENV_ENGINE: &str = "FUZZY_ENGINE";
pub const ENV_SAMPLES: &str = "FUZZY_SAMPLES";
pub const ENV_TNORM: &str = "FUZZY_TNORM";
pub const ENV_SNORM: &str = "FUZZY_SNORM";
pub const ENV_IMPLICATION: &str = "FUZZY_IMPLICATION";
pub const ENV_DEFUZZIFICATION: &str = "FUZZY_DEFUZZIFICATION";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    #[default]
    Mamdani,
    Sugeno,
}

impl FromStr for EngineKind {
    type Err = FuzzyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mamdani" => Ok(EngineKind::Mamdani),
            "sugeno" | "tsk" => Ok(EngineKind::Sugeno),
            other => Err(FuzzyError::invalid(format!("unknown engine '{}'", other))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Mamdani => f.write_str("mamdani"),
            EngineKind::Sugeno => f.write_str("sugeno"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub engine: EngineKind,
    /// Output-domain intervals for Mamdani aggregation
    pub samples: usize,
    pub tnorm: TNorm,
    pub snorm: SNorm,
    pub implication: Implication,
    /// Unset means the engine's natural strategy (see [`EngineConfig::defuzzifier`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defuzzification: Option<DefuzzificationMethod>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Mamdani,
            samples: DEFAULT_SAMPLES,
            tnorm: TNorm::Minimum,
            snorm: SNorm::Maximum,
            implication: Implication::Minimum,
            defuzzification: None,
        }
    }
}

impl EngineConfig {
    pub fn sugeno() -> Self {
        Self {
            engine: EngineKind::Sugeno,
            ..Self::default()
        }
    }

    /// Parse a YAML document; absent keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine configuration {:?}", path))?;
        let config = Self::from_yaml_str(&yaml).with_context(|| format!("Invalid engine configuration in {:?}", path))?;
        info!(path = ?path, engine = %config.engine, "Loaded engine configuration");
        Ok(config)
    }

    /// Defaults overridden by any `FUZZY_*` variable that is set
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an arbitrary lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ENGINE) {
            config.engine = value.parse().with_context(|| format!("{} is invalid", ENV_ENGINE))?;
        }
        if let Some(value) = lookup(ENV_SAMPLES) {
            config.samples = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got '{}'", ENV_SAMPLES, value))?;
        }
        if let Some(value) = lookup(ENV_TNORM) {
            config.tnorm = value.parse().with_context(|| format!("{} is invalid", ENV_TNORM))?;
        }
        if let Some(value) = lookup(ENV_SNORM) {
            config.snorm = value.parse().with_context(|| format!("{} is invalid", ENV_SNORM))?;
        }
        if let Some(value) = lookup(ENV_IMPLICATION) {
            config.implication = value.parse().with_context(|| format!("{} is invalid", ENV_IMPLICATION))?;
        }
        if let Some(value) = lookup(ENV_DEFUZZIFICATION) {
            config.defuzzification = Some(
                value
                    .parse()
                    .with_context(|| format!("{} is invalid", ENV_DEFUZZIFICATION))?,
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// The configured strategy, or centroid for Mamdani and weighted average
    /// for Sugeno when none is set
    pub fn defuzzifier(&self) -> DefuzzificationMethod {
        match (self.defuzzification, self.engine) {
            (Some(method), _) => method,
            (None, EngineKind::Mamdani) => DefuzzificationMethod::Centroid,
            (None, EngineKind::Sugeno) => DefuzzificationMethod::WeightedAverage,
        }
    }

    /// Reject combinations no engine can run
    pub fn validate(&self) -> crate::Result<()> {
        if self.samples == 0 {
            return Err(FuzzyError::invalid("sample resolution must be at least 1"));
        }

        match self.engine {
            EngineKind::Mamdani => {
                if self.defuzzifier() == DefuzzificationMethod::WeightedAverage {
                    return Err(FuzzyError::invalid(
                        "mamdani inference needs a curve defuzzifier (centroid or mean_of_maxima)",
                    ));
                }
            }
            EngineKind::Sugeno => {
                if self.defuzzifier() != DefuzzificationMethod::WeightedAverage {
                    return Err(FuzzyError::invalid("sugeno inference only supports weighted_average"));
                }
                if self.tnorm != TNorm::Minimum {
                    warn!(tnorm = %self.tnorm, "Sugeno inference always uses the minimum t-norm");
                }
            }
        }
        Ok(())
    }

    pub fn build_engine(&self, registry: Arc<VariableRegistry>) -> crate::Result<Arc<dyn InferenceEngine>> {
        self.validate()?;
        let engine: Arc<dyn InferenceEngine> = match self.engine {
            EngineKind::Mamdani => Arc::new(
                MamdaniEngine::new(registry)
                    .with_tnorm(self.tnorm)
                    .with_snorm(self.snorm)
                    .with_implication(self.implication)
                    .with_samples(self.samples)?
                    .with_defuzzifier(self.defuzzifier().strategy()),
            ),
            EngineKind::Sugeno => Arc::new(SugenoEngine::new(registry)),
        };
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.engine, EngineKind::Mamdani);
        assert_eq!(config.samples, 200);
        assert_eq!(config.defuzzifier(), DefuzzificationMethod::Centroid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = EngineConfig::from_yaml_str("snorm: probabilistic_sum\nsamples: 400\n").unwrap();
        assert_eq!(config.snorm, SNorm::ProbabilisticSum);
        assert_eq!(config.samples, 400);
        assert_eq!(config.tnorm, TNorm::Minimum);
    }

    #[test]
    fn test_engine_alone_picks_its_defuzzifier() {
        let config = EngineConfig::from_yaml_str("engine: sugeno\n").unwrap();
        assert_eq!(config.engine, EngineKind::Sugeno);
        assert_eq!(config.defuzzification, None);
        assert_eq!(config.defuzzifier(), DefuzzificationMethod::WeightedAverage);

        let env = vars(&[("FUZZY_ENGINE", "sugeno")]);
        assert_eq!(EngineConfig::from_vars(|k| env.get(k).cloned()).unwrap(), config);
    }

    #[test]
    fn test_unknown_yaml_key() {
        assert!(EngineConfig::from_yaml_str("resolution: 10\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env = vars(&[("FUZZY_ENGINE", "sugeno"), ("FUZZY_SAMPLES", "50")]);
        let config = EngineConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.engine, EngineKind::Sugeno);
        assert_eq!(config.defuzzifier(), DefuzzificationMethod::WeightedAverage);
        assert_eq!(config.samples, 50);
    }

    #[test]
    fn test_env_bad_value() {
        let env = vars(&[("FUZZY_SAMPLES", "many")]);
        let err = EngineConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("FUZZY_SAMPLES"));
    }

    #[test]
    fn test_invalid_combinations() {
        let mut config = EngineConfig::default();
        config.defuzzification = Some(DefuzzificationMethod::WeightedAverage);
        assert!(config.validate().is_err());

        let mut config = EngineConfig::sugeno();
        config.defuzzification = Some(DefuzzificationMethod::Centroid);
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.samples = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_engine_kind() {
        let registry = Arc::new(VariableRegistry::new());
        assert_eq!(EngineConfig::default().build_engine(registry.clone()).unwrap().name(), "mamdani");
        assert_eq!(EngineConfig::sugeno().build_engine(registry).unwrap().name(), "sugeno");
    }
}
