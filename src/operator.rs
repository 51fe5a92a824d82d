//! Combination Operators
//!
//! T-norms (fuzzy AND), S-norms (fuzzy OR) and the implication applied to a
//! Mamdani consequent. All are stateless, commutative, associative and
//! monotonic over [0, 1]; T(1, x) = x and S(0, x) = x.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;

/// Fuzzy AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNorm {
    #[default]
    Minimum,
    /// Algebraic product
    Product,
    /// max(0, a + b - 1)
    Lukasiewicz,
}

impl TNorm {
    pub fn and(self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Minimum => a.min(b),
            TNorm::Product => a * b,
            TNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
        }
    }

    /// Fold degrees left to right; the empty fold is the identity 1
    pub fn reduce(self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        degrees.into_iter().fold(1.0, |acc, mu| self.and(acc, mu))
    }
}

/// Fuzzy OR
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SNorm {
    #[default]
    Maximum,
    /// a + b - a·b
    ProbabilisticSum,
    /// min(1, a + b)
    BoundedSum,
}

impl SNorm {
    pub fn or(self, a: f64, b: f64) -> f64 {
        match self {
            SNorm::Maximum => a.max(b),
            SNorm::ProbabilisticSum => a + b - a * b,
            SNorm::BoundedSum => (a + b).min(1.0),
        }
    }

    /// Fold degrees left to right; the empty fold is the identity 0
    pub fn reduce(self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        degrees.into_iter().fold(0.0, |acc, mu| self.or(acc, mu))
    }
}

/// How a rule's firing strength shapes its consequent set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Implication {
    /// Clip the consequent at the firing strength (Mamdani)
    #[default]
    Minimum,
    /// Scale the consequent by the firing strength (Larsen)
    Product,
}

impl Implication {
    pub fn apply(self, strength: f64, membership: f64) -> f64 {
        match self {
            Implication::Minimum => strength.min(membership),
            Implication::Product => strength * membership,
        }
    }
}

impl FromStr for TNorm {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" => Ok(TNorm::Minimum),
            "product" | "prod" => Ok(TNorm::Product),
            "lukasiewicz" => Ok(TNorm::Lukasiewicz),
            other => Err(FuzzyError::invalid(format!("unknown t-norm '{}'", other))),
        }
    }
}

impl FromStr for SNorm {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximum" => Ok(SNorm::Maximum),
            "probabilistic_sum" | "probor" => Ok(SNorm::ProbabilisticSum),
            "bounded_sum" => Ok(SNorm::BoundedSum),
            other => Err(FuzzyError::invalid(format!("unknown s-norm '{}'", other))),
        }
    }
}

impl FromStr for Implication {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" | "clip" => Ok(Implication::Minimum),
            "product" | "prod" | "scale" => Ok(Implication::Product),
            other => Err(FuzzyError::invalid(format!("unknown implication '{}'", other))),
        }
    }
}

impl fmt::Display for TNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TNorm::Minimum => "minimum",
            TNorm::Product => "product",
            TNorm::Lukasiewicz => "lukasiewicz",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SNorm::Maximum => "maximum",
            SNorm::ProbabilisticSum => "probabilistic_sum",
            SNorm::BoundedSum => "bounded_sum",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.8, 1.0];
    const TNORMS: [TNorm; 3] = [TNorm::Minimum, TNorm::Product, TNorm::Lukasiewicz];
    const SNORMS: [SNorm; 3] = [SNorm::Maximum, SNorm::ProbabilisticSum, SNorm::BoundedSum];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_boundary_conditions() {
        for x in GRID {
            for t in TNORMS {
                assert!(close(t.and(1.0, x), x), "{} boundary at {}", t, x);
                assert!(close(t.and(0.0, x), 0.0));
            }
            for s in SNORMS {
                assert!(close(s.or(0.0, x), x), "{} boundary at {}", s, x);
                assert!(close(s.or(1.0, x), 1.0));
            }
        }
    }

    #[test]
    fn test_commutative_and_associative() {
        for a in GRID {
            for b in GRID {
                for t in TNORMS {
                    assert!(close(t.and(a, b), t.and(b, a)));
                }
                for s in SNORMS {
                    assert!(close(s.or(a, b), s.or(b, a)));
                }
                for c in GRID {
                    for t in TNORMS {
                        assert!(close(t.and(t.and(a, b), c), t.and(a, t.and(b, c))));
                    }
                    for s in SNORMS {
                        assert!(close(s.or(s.or(a, b), c), s.or(a, s.or(b, c))));
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for a in GRID {
            for window in GRID.windows(2) {
                let (lo, hi) = (window[0], window[1]);
                for t in TNORMS {
                    assert!(t.and(a, lo) <= t.and(a, hi) + 1e-12);
                }
                for s in SNORMS {
                    assert!(s.or(a, lo) <= s.or(a, hi) + 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_reduce() {
        assert_eq!(TNorm::Minimum.reduce([0.7, 0.3, 0.9]), 0.3);
        assert_eq!(TNorm::Minimum.reduce(std::iter::empty()), 1.0);
        assert_eq!(SNorm::Maximum.reduce([0.2, 0.6]), 0.6);
        assert_eq!(SNorm::Maximum.reduce(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_implication() {
        assert_eq!(Implication::Minimum.apply(0.4, 0.9), 0.4);
        assert_eq!(Implication::Minimum.apply(0.4, 0.1), 0.1);
        assert!(close(Implication::Product.apply(0.5, 0.8), 0.4));
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!("min".parse::<TNorm>().unwrap(), TNorm::Minimum);
        assert_eq!("Product".parse::<TNorm>().unwrap(), TNorm::Product);
        assert_eq!("probabilistic_sum".parse::<SNorm>().unwrap(), SNorm::ProbabilisticSum);
        assert_eq!("scale".parse::<Implication>().unwrap(), Implication::Product);
        assert!("xor".parse::<SNorm>().is_err());
    }
}
