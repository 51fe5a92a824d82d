use std::io::Write;
use std::sync::Arc;

use fuzzy_inference::{
    DefuzzificationMethod, EngineConfig, EngineKind, Evaluator, FuzzySet, Implication, Inputs, LinguisticVariable,
    Rule, RuleBase, SNorm, Triangle, VariableRegistry,
};
use tempfile::NamedTempFile;

fn registry() -> Arc<VariableRegistry> {
    let load = LinguisticVariable::new("Load", 0.0, 10.0)
        .unwrap()
        .with_set(FuzzySet::new("Heavy", Triangle::new(0.0, 10.0, 10.0).unwrap()));
    let fan = LinguisticVariable::new("Fan", 0.0, 100.0)
        .unwrap()
        .with_set(FuzzySet::new("Fast", Triangle::new(50.0, 100.0, 100.0).unwrap()));
    Arc::new(VariableRegistry::new().with(load).with(fan))
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "engine: mamdani\nsamples: 500\nsnorm: bounded_sum\nimplication: product\ndefuzzification: mean_of_maxima"
    )
    .unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.engine, EngineKind::Mamdani);
    assert_eq!(config.samples, 500);
    assert_eq!(config.snorm, SNorm::BoundedSum);
    assert_eq!(config.implication, Implication::Product);
    assert_eq!(config.defuzzifier(), DefuzzificationMethod::MeanOfMaxima);
}

#[test]
fn test_missing_file_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read engine configuration"));
}

#[test]
fn test_minimal_sugeno_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "engine: sugeno").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.defuzzifier(), DefuzzificationMethod::WeightedAverage);
    let evaluator = Evaluator::from_config(registry(), &config).unwrap();
    assert_eq!(evaluator.engine().name(), "sugeno");
}

#[test]
fn test_invalid_file_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "engine: sugeno\ndefuzzification: centroid").unwrap();
    assert!(EngineConfig::from_file(file.path()).is_err());
}

#[test]
fn test_configured_evaluator_runs() {
    let config = EngineConfig::from_yaml_str("defuzzification: mom\n");
    // Aliases are a FromStr convenience; YAML takes the canonical names
    assert!(config.is_err());

    let config = EngineConfig::from_yaml_str("defuzzification: mean_of_maxima\n").unwrap();
    let evaluator = Evaluator::from_config(registry(), &config).unwrap();

    let mut base = RuleBase::new();
    base.create(Rule::mamdani([("Load", "Heavy")], "Fan", "Fast").unwrap()).unwrap();
    let inputs: Inputs = [("Load".to_string(), 10.0)].into_iter().collect();
    assert_eq!(evaluator.evaluate(&inputs, &base).unwrap(), 100.0);
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = EngineConfig::sugeno();
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("engine: sugeno"));
    assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
}
