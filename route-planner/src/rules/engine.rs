//! First-match rule evaluation.

use std::fmt;

use tracing::trace;

use crate::domain::Path;

use super::Rule;

/// Ordered list of rules, evaluated first-match.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create an engine with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from rules in declaration order.
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Append a rule after the existing ones.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Builder-style [`RuleEngine::push`].
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the first rule whose predicate matches `path`.
    ///
    /// Later rules are not consulted once one matches, so at most one
    /// transform runs per call. With no match the path comes back unchanged.
    pub fn apply_rules(&self, path: &Path) -> Path {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.applies(path) {
                let shaped = rule.apply(path);
                trace!(rule = index, %path, shaped = %shaped, "Rule matched");
                return shaped;
            }
        }
        path.clone()
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules.len())
            .finish()
    }
}
