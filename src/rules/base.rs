//! Rule Base
//!
//! An append-ordered rule collection. It owns id assignment and is the only
//! mutable state in the system: mutation needs `&mut`, so concurrent writers
//! must be serialized by the owner, while engines read through `&RuleBase`
//! or a [`snapshot`](RuleBase::snapshot).

use serde::Serialize;
use tracing::debug;

use super::rule::{validate_weight, Consequent, Rule, RuleId};
use crate::error::{FuzzyError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct RuleBase {
    rules: Vec<Rule>,
    next_id: RuleId,
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBase {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a rule, assigning the next id when it has none.
    ///
    /// Explicit ids must be unique; the counter moves past them.
    pub fn create(&mut self, mut rule: Rule) -> Result<&Rule> {
        let id = match rule.id {
            Some(id) => {
                if id == 0 || self.find(id).is_some() {
                    return Err(FuzzyError::invalid(format!("rule id {} is already taken or reserved", id)));
                }
                id
            }
            None => self.next_id,
        };
        let following = id
            .checked_add(1)
            .ok_or_else(|| FuzzyError::invalid(format!("rule id {} leaves no room for later ids", id)))?;
        self.next_id = self.next_id.max(following);
        rule.id = Some(id);

        debug!("Created rule {} -> {}", id, rule.consequent().variable());
        self.rules.push(rule);
        Ok(&self.rules[self.rules.len() - 1])
    }

    pub fn find(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == Some(id))
    }

    fn find_mut(&mut self, id: RuleId) -> Result<&mut Rule> {
        self.rules
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or(FuzzyError::RuleNotFound(id))
    }

    /// Remove a rule; order of the remaining rules is preserved
    pub fn remove(&mut self, id: RuleId) -> Option<Rule> {
        let index = self.rules.iter().position(|r| r.id == Some(id))?;
        debug!("Removed rule {}", id);
        Some(self.rules.remove(index))
    }

    /// Replace content, weight and gate of an existing rule
    pub fn update<K, V>(
        &mut self,
        id: RuleId,
        antecedent: impl IntoIterator<Item = (K, V)>,
        consequent: Consequent,
        weight: f64,
        enabled: bool,
    ) -> Result<&Rule>
    where
        K: Into<String>,
        V: Into<String>,
    {
        validate_weight(weight)?;
        let rule = self.find_mut(id)?;
        rule.set_content(antecedent, consequent)?;
        rule.set_weight(weight)?;
        rule.set_enabled(enabled);
        debug!("Updated rule {}", id);
        Ok(&*rule)
    }

    pub fn set_weight(&mut self, id: RuleId, weight: f64) -> Result<()> {
        validate_weight(weight)?;
        self.find_mut(id)?.set_weight(weight)
    }

    pub fn set_enabled(&mut self, id: RuleId, enabled: bool) -> Result<()> {
        self.find_mut(id)?.set_enabled(enabled);
        Ok(())
    }

    /// Rules in insertion order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.is_enabled())
    }

    /// Owned copy of every rule, for readers that must not hold a borrow
    pub fn snapshot(&self) -> Vec<Rule> {
        self.rules.clone()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The single variable every consequent assigns.
    ///
    /// `None` for an empty rule base; disabled rules count too, so toggling a
    /// rule never changes which variable a rule base produces.
    pub fn output_variable(&self) -> Result<Option<&str>> {
        let mut names: Vec<&str> = Vec::new();
        for rule in &self.rules {
            let name = rule.consequent().variable();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        match names.len() {
            0 => Ok(None),
            1 => Ok(Some(names[0])),
            _ => Err(FuzzyError::MultipleOutputVariables(
                names.into_iter().map(String::from).collect(),
            )),
        }
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(var: &str, set: &str) -> Rule {
        Rule::mamdani([(var, set)], "AlertLevel", "High").unwrap()
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut base = RuleBase::new();
        assert_eq!(base.create(rule("HeartRate", "High")).unwrap().id(), Some(1));
        assert_eq!(base.create(rule("Temperature", "High")).unwrap().id(), Some(2));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_explicit_ids_advance_counter() {
        let mut base = RuleBase::new();
        base.create(rule("a", "x").with_id(10)).unwrap();
        assert_eq!(base.create(rule("b", "y")).unwrap().id(), Some(11));
        assert!(base.create(rule("c", "z").with_id(10)).is_err());
        assert!(base.create(rule("c", "z").with_id(0)).is_err());
    }

    #[test]
    fn test_largest_explicit_id_rejected() {
        let mut base = RuleBase::new();
        assert!(matches!(
            base.create(rule("a", "x").with_id(RuleId::MAX)),
            Err(FuzzyError::InvalidParameter(_))
        ));
        assert!(base.is_empty());

        base.create(rule("a", "x").with_id(RuleId::MAX - 1)).unwrap();
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut base = RuleBase::new();
        base.create(rule("a", "x")).unwrap();
        base.create(rule("b", "y")).unwrap();
        assert!(base.remove(2).is_some());
        assert!(base.remove(2).is_none());
        assert_eq!(base.create(rule("c", "z")).unwrap().id(), Some(3));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut base = RuleBase::new();
        for var in ["a", "b", "c"] {
            base.create(rule(var, "x")).unwrap();
        }
        base.remove(2);
        let ids: Vec<_> = base.iter().filter_map(Rule::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_mutations() {
        let mut base = RuleBase::new();
        base.create(rule("a", "x")).unwrap();

        base.set_weight(1, 0.3).unwrap();
        assert_eq!(base.find(1).unwrap().weight(), 0.3);
        assert!(base.set_weight(1, 2.0).is_err());
        assert_eq!(base.set_weight(9, 0.5).unwrap_err(), FuzzyError::RuleNotFound(9));

        base.set_enabled(1, false).unwrap();
        assert_eq!(base.enabled().count(), 0);

        let updated = base
            .update(1, [("b", "y")], Consequent::set("AlertLevel", "None"), 0.8, true)
            .unwrap();
        assert_eq!(updated.weight(), 0.8);
        assert!(updated.is_enabled());
        assert_eq!(updated.consequent(), &Consequent::set("AlertLevel", "None"));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut base = RuleBase::new();
        base.create(rule("a", "x")).unwrap();
        let snapshot = base.snapshot();
        base.set_enabled(1, false).unwrap();
        assert!(snapshot[0].is_enabled());
    }

    #[test]
    fn test_output_variable() {
        let mut base = RuleBase::new();
        assert_eq!(base.output_variable().unwrap(), None);

        base.create(rule("a", "x")).unwrap();
        base.create(rule("b", "y").disabled()).unwrap();
        assert_eq!(base.output_variable().unwrap(), Some("AlertLevel"));

        base.create(Rule::mamdani([("c", "z")], "Severity", "High").unwrap()).unwrap();
        assert_eq!(
            base.output_variable().unwrap_err(),
            FuzzyError::MultipleOutputVariables(vec!["AlertLevel".to_string(), "Severity".to_string()])
        );
    }
}
