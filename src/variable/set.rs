use std::sync::Arc;

use crate::membership::MembershipFunction;

/// A named category backed by exactly one membership function
#[derive(Debug, Clone)]
pub struct FuzzySet {
    name: String,
    function: Arc<dyn MembershipFunction>,
}

impl FuzzySet {
    pub fn new(name: impl Into<String>, function: impl MembershipFunction + 'static) -> Self {
        Self {
            name: name.into(),
            function: Arc::new(function),
        }
    }

    /// Wrap an already shared membership function
    pub fn from_shared(name: impl Into<String>, function: Arc<dyn MembershipFunction>) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn membership(&self, x: f64) -> f64 {
        self.function.membership(x)
    }

    pub fn function(&self) -> &dyn MembershipFunction {
        self.function.as_ref()
    }
}
