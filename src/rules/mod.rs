//! Rules
//!
//! IF-THEN rules over linguistic categories, the rule base that holds them,
//! and the linking pass that checks their names against a registry.

mod base;
mod expression;
mod rule;
mod validation;

pub use base::RuleBase;
pub use expression::SugenoFunction;
pub use rule::{validate_weight, Consequent, Rule, RuleId};
pub use validation::RuleValidator;
