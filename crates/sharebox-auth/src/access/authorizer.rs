//! Combined access decision over exact and prefix rules.

use tracing::debug;

use super::{AccessPolicy, PrefixRuleTree, RuleTable, role_method_key};

/// Decides whether a role may call a method on a path.
///
/// An exact rule, when present, is final. Otherwise the rules of the longest
/// matching prefix apply. Anything else is denied.
#[derive(Debug, Clone)]
pub struct Authorizer {
    exact: RuleTable,
    prefixes: PrefixRuleTree,
}

impl Authorizer {
    /// Creates an authorizer from prebuilt rule structures.
    pub fn new(exact: RuleTable, prefixes: PrefixRuleTree) -> Self {
        Self { exact, prefixes }
    }

    /// Creates an authorizer from a policy.
    pub fn from_policy(policy: &AccessPolicy) -> Self {
        Self::new(policy.rule_table(), policy.prefix_tree())
    }

    /// Returns whether the request is allowed. Never fails.
    pub fn is_allowed(&self, role: &str, method: &str, path: &str) -> bool {
        if let Some(allowed) = self.exact.lookup(role, method, path) {
            debug!(role, method, path, allowed, "Exact rule decision");
            return allowed;
        }

        if let Some((rules, prefix)) = self.prefixes.longest_match(path) {
            let allowed = rules
                .get(&role_method_key(role, method))
                .copied()
                .unwrap_or(false);
            debug!(role, method, path, prefix, allowed, "Prefix rule decision");
            return allowed;
        }

        debug!(role, method, path, "No rule matched, denying");
        false
    }
}
