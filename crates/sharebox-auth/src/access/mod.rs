//! Access control: exact rules, prefix rules, and the combined decision.

pub mod authorizer;
pub mod policies;
pub mod prefix_tree;
pub mod rule_table;

pub use authorizer::Authorizer;
pub use policies::AccessPolicy;
pub use prefix_tree::{PrefixRuleTree, RoleMethodMap};
pub use rule_table::RuleTable;

/// Builds the `role:method` key used by prefix rules.
pub fn role_method_key(role: &str, method: &str) -> String {
    format!("{role}:{method}")
}
