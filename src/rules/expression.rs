//! Sugeno consequent functions
//!
//! A consequent is either a literal constant or a linear combination of crisp
//! inputs, written declaratively: `"42"`, `"0.5*HeartRate + 10"`,
//! `"Temperature*2 - 3e-1*OxygenLevel"`.

use std::fmt;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{FuzzyError, Result};
use crate::variable::Inputs;

lazy_static! {
    static ref TERM: Regex = Regex::new(
        r"(?x)
        (?P<sign>[+-])?\s*
        (?:
            (?P<coef>\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)
            (?:\s*\*\s*(?P<var>[A-Za-z_][A-Za-z0-9_]*))?
          |
            (?P<lvar>[A-Za-z_][A-Za-z0-9_]*)
            (?:\s*\*\s*(?P<rcoef>\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?))?
        )"
    )
    .expect("term pattern is valid");
}

/// `constant + Σ coefficient · variable`, parsed once at rule construction
#[derive(Debug, Clone, PartialEq)]
pub struct SugenoFunction {
    source: String,
    constant: f64,
    coefficients: IndexMap<String, f64>,
}

impl SugenoFunction {
    pub fn parse(expression: &str) -> Result<Self> {
        let source = expression.trim().to_string();
        let fail = |reason: String| FuzzyError::InvalidExpression {
            expression: source.clone(),
            reason,
        };

        if source.is_empty() {
            return Err(fail("expression is empty".to_string()));
        }

        let mut constant = 0.0;
        let mut coefficients: IndexMap<String, f64> = IndexMap::new();
        let mut cursor = 0;

        for caps in TERM.captures_iter(&source) {
            let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((cursor, cursor));
            let gap = &source[cursor..whole.0];
            if !gap.trim().is_empty() {
                return Err(fail(format!("unexpected '{}'", gap.trim())));
            }
            if cursor > 0 && caps.name("sign").is_none() {
                return Err(fail(format!("missing operator before '{}'", &source[whole.0..whole.1])));
            }
            cursor = whole.1;

            let sign = match caps.name("sign").map(|m| m.as_str()) {
                Some("-") => -1.0,
                _ => 1.0,
            };
            let number = caps.name("coef").or_else(|| caps.name("rcoef"));
            let coefficient = match number {
                Some(m) => m
                    .as_str()
                    .parse::<f64>()
                    .map_err(|e| fail(format!("bad number '{}': {}", m.as_str(), e)))?,
                None => 1.0,
            };
            if !coefficient.is_finite() {
                return Err(fail(format!("number '{}' is out of range", &source[whole.0..whole.1])));
            }

            match caps.name("var").or_else(|| caps.name("lvar")) {
                Some(var) => {
                    *coefficients.entry(var.as_str().to_string()).or_insert(0.0) += sign * coefficient;
                }
                None => constant += sign * coefficient,
            }
        }

        if cursor == 0 || !source[cursor..].trim().is_empty() {
            return Err(fail(format!("unexpected '{}'", source[cursor..].trim())));
        }
        if !constant.is_finite() || coefficients.values().any(|c| !c.is_finite()) {
            return Err(fail("terms add up beyond the floating-point range".to_string()));
        }

        Ok(Self {
            source,
            constant,
            coefficients,
        })
    }

    /// A function with no variable terms
    pub fn constant(value: f64) -> Self {
        Self {
            source: value.to_string(),
            constant: value,
            coefficients: IndexMap::new(),
        }
    }

    pub fn is_constant(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Names of the inputs this function reads
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.keys().map(String::as_str)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate against raw (unclamped) crisp inputs
    pub fn evaluate(&self, inputs: &Inputs) -> Result<f64> {
        self.coefficients
            .iter()
            .try_fold(self.constant, |acc, (name, coefficient)| {
                let value = inputs
                    .get(name)
                    .ok_or_else(|| FuzzyError::MissingInput(name.clone()))?;
                Ok(acc + coefficient * value)
            })
    }
}

impl fmt::Display for SugenoFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for SugenoFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
