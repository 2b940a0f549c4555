//! Exact-match allow rules keyed by role, method, and path.

use std::collections::HashMap;

/// Maps `role:method:path` to an explicit allow or deny.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, bool>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(role: &str, method: &str, path: &str) -> String {
        format!("{role}:{method}:{path}")
    }

    /// Adds or replaces a rule.
    pub fn insert(&mut self, role: &str, method: &str, path: &str, allowed: bool) {
        self.rules.insert(Self::key(role, method, path), allowed);
    }

    /// Returns the configured decision, or `None` when no rule exists.
    pub fn lookup(&self, role: &str, method: &str, path: &str) -> Option<bool> {
        self.rules.get(&Self::key(role, method, path)).copied()
    }

    /// Whether an explicit allow rule exists. Unknown keys are denied.
    pub fn is_allowed(&self, role: &str, method: &str, path: &str) -> bool {
        self.lookup(role, method, path).unwrap_or(false)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
