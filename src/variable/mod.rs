//! Linguistic Variables
//!
//! Named numeric domains partitioned into overlapping fuzzy sets, and the
//! registry rules are resolved against at evaluation time.

mod linguistic;
mod registry;
mod set;

pub use linguistic::LinguisticVariable;
pub use registry::{Fuzzified, VariableRegistry};
pub use set::FuzzySet;

use std::collections::HashMap;

/// Crisp inputs keyed by variable name
pub type Inputs = HashMap<String, f64>;
