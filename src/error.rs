//! Error types
//!
//! Every failure the inference core can report. All of them describe a caller
//! or configuration mistake; none are transient.

use thiserror::Error;

/// Errors raised while building or evaluating a fuzzy system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// A rule references a variable absent from the registry
    #[error("unknown linguistic variable '{0}'")]
    UnknownVariable(String),

    /// A rule references a set absent from its variable
    #[error("variable '{variable}' has no fuzzy set named '{set}'")]
    UnknownSet { variable: String, set: String },

    /// A required crisp input was not supplied
    #[error("missing crisp input for variable '{0}'")]
    MissingInput(String),

    /// A shape, weight, rule structure or setting violates its invariant
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A defuzzification strategy was handed an input shape it cannot handle
    #[error("{strategy} defuzzification does not support {mode} input")]
    UnsupportedMode {
        strategy: &'static str,
        mode: &'static str,
    },

    /// Consequents name more than one output variable
    #[error("rule base references more than one output variable: {}", .0.join(", "))]
    MultipleOutputVariables(Vec<String>),

    #[error("rule {0} not found")]
    RuleNotFound(u32),

    /// A Sugeno consequent could not be parsed
    #[error("invalid consequent expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },
}

impl FuzzyError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        FuzzyError::InvalidParameter(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
