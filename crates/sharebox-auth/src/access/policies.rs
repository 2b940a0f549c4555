//! Route access policy definitions.

use std::collections::BTreeMap;

use sharebox_entity::user::Role;

use super::{PrefixRuleTree, RoleMethodMap, RuleTable, role_method_key};

/// Exact routes open to admins, besides the public path.
const ADMIN_ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/v1/users/login"),
    ("POST", "/v1/users/logout"),
    ("GET", "/v1/users/isauthed"),
    ("PATCH", "/v1/users/pwd"),
    ("PATCH", "/v1/users/"),
    ("PATCH", "/v1/users/pwd/force-set"),
    ("POST", "/v1/users/"),
    ("DELETE", "/v1/users/"),
    ("GET", "/v1/users/list"),
    ("GET", "/v1/users/self"),
    ("PATCH", "/v1/users/preferences"),
    ("PUT", "/v1/fs/used-space"),
    ("POST", "/v1/roles/"),
    ("DELETE", "/v1/roles/"),
    ("GET", "/v1/roles/list"),
    ("POST", "/v1/fs/files"),
    ("DELETE", "/v1/fs/files"),
    ("GET", "/v1/fs/files"),
    ("PATCH", "/v1/fs/files/chunks"),
    ("GET", "/v1/fs/files/chunks"),
    ("PATCH", "/v1/fs/files/copy"),
    ("PATCH", "/v1/fs/files/move"),
    ("GET", "/v1/fs/search"),
    ("PUT", "/v1/fs/reindex"),
    ("GET", "/v1/fs/dirs"),
    ("GET", "/v1/fs/dirs/home"),
    ("POST", "/v1/fs/dirs"),
    ("GET", "/v1/fs/uploadings"),
    ("DELETE", "/v1/fs/uploadings"),
    ("GET", "/v1/fs/metadata"),
    ("OPTIONS", "/v1/settings/health"),
    ("GET", "/v1/settings/client"),
    ("PATCH", "/v1/settings/client"),
    ("POST", "/v1/settings/errors"),
    ("GET", "/v1/settings/workers/queue-len"),
    ("GET", "/v1/captchas/"),
    ("GET", "/v1/captchas/imgs"),
    ("POST", "/v1/fs/sharings"),
    ("DELETE", "/v1/fs/sharings"),
    ("GET", "/v1/fs/sharings"),
    ("GET", "/v1/fs/sharings/exist"),
    ("GET", "/v1/fs/sharings/dirs"),
    ("GET", "/v1/fs/sharings/ids"),
    ("POST", "/v1/fs/hashes/sha1"),
];

/// Exact routes open to regular users, besides the public path.
const USER_ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/v1/users/logout"),
    ("GET", "/v1/users/isauthed"),
    ("PATCH", "/v1/users/pwd"),
    ("GET", "/v1/users/self"),
    ("PATCH", "/v1/users/preferences"),
    ("POST", "/v1/fs/files"),
    ("DELETE", "/v1/fs/files"),
    ("GET", "/v1/fs/files"),
    ("PATCH", "/v1/fs/files/chunks"),
    ("GET", "/v1/fs/files/chunks"),
    ("PATCH", "/v1/fs/files/copy"),
    ("PATCH", "/v1/fs/files/move"),
    ("GET", "/v1/fs/search"),
    ("GET", "/v1/fs/dirs"),
    ("GET", "/v1/fs/dirs/home"),
    ("POST", "/v1/fs/dirs"),
    ("GET", "/v1/fs/uploadings"),
    ("DELETE", "/v1/fs/uploadings"),
    ("GET", "/v1/fs/metadata"),
    ("OPTIONS", "/v1/settings/health"),
    ("GET", "/v1/settings/client"),
    ("POST", "/v1/settings/errors"),
    ("GET", "/v1/captchas/"),
    ("GET", "/v1/captchas/imgs"),
    ("POST", "/v1/fs/sharings"),
    ("DELETE", "/v1/fs/sharings"),
    ("GET", "/v1/fs/sharings"),
    ("GET", "/v1/fs/sharings/exist"),
    ("GET", "/v1/fs/sharings/dirs"),
    ("GET", "/v1/fs/sharings/ids"),
    ("POST", "/v1/fs/hashes/sha1"),
];

/// Exact routes open to anonymous visitors, besides the public path.
const VISITOR_ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/v1/users/login"),
    ("GET", "/v1/users/self"),
    ("GET", "/v1/fs/files"),
    ("GET", "/v1/fs/dirs"),
    ("OPTIONS", "/v1/settings/health"),
    ("GET", "/v1/settings/client"),
    ("GET", "/v1/captchas/"),
    ("GET", "/v1/captchas/imgs"),
    ("GET", "/v1/fs/sharings/exist"),
    ("GET", "/v1/fs/sharings/dirs"),
];

/// One exact-match rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRule {
    pub role: String,
    pub method: String,
    pub path: String,
    pub allowed: bool,
}

/// The full set of access rules, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    /// Exact-match rules.
    pub exact: Vec<ExactRule>,
    /// Prefix rules keyed by path prefix.
    pub prefixes: BTreeMap<String, RoleMethodMap>,
}

impl AccessPolicy {
    /// Creates an empty policy that denies everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in policy. `public_path` is served to every role.
    pub fn defaults(public_path: &str) -> Self {
        let public_path = format!("/{}", public_path.trim_start_matches('/'));
        let mut policy = Self::new();

        for (role, routes) in [
            (Role::ADMIN, ADMIN_ROUTES),
            (Role::USER, USER_ROUTES),
            (Role::VISITOR, VISITOR_ROUTES),
        ] {
            policy = policy.allow(role, "GET", &public_path);
            for (method, path) in routes {
                policy = policy.allow(role, method, path);
            }
        }

        policy
            .allow_prefix(
                "/v2/",
                Role::ADMIN,
                &["GET", "POST", "PATCH", "PUT", "DELETE", "OPTIONS"],
            )
            .allow_prefix("/v2/my/", Role::USER, &["GET", "POST", "PATCH", "DELETE"])
            .allow_prefix("/v2/public/", Role::USER, &["GET", "POST", "OPTIONS"])
            .allow_prefix("/v2/public/", Role::VISITOR, &["GET", "POST", "OPTIONS"])
    }

    /// Adds an exact allow rule.
    pub fn allow(self, role: &str, method: &str, path: &str) -> Self {
        self.exact_rule(role, method, path, true)
    }

    /// Adds an exact deny rule, which overrides any prefix rule for that path.
    pub fn deny(self, role: &str, method: &str, path: &str) -> Self {
        self.exact_rule(role, method, path, false)
    }

    fn exact_rule(mut self, role: &str, method: &str, path: &str, allowed: bool) -> Self {
        self.exact.push(ExactRule {
            role: role.to_string(),
            method: method.to_string(),
            path: path.to_string(),
            allowed,
        });
        self
    }

    /// Allows `role` to call `methods` on everything below `prefix`.
    pub fn allow_prefix(mut self, prefix: &str, role: &str, methods: &[&str]) -> Self {
        let rules = self.prefixes.entry(prefix.to_string()).or_default();
        for method in methods {
            rules.insert(role_method_key(role, method), true);
        }
        self
    }

    /// Builds the exact-match table.
    pub fn rule_table(&self) -> RuleTable {
        let mut table = RuleTable::new();
        for rule in &self.exact {
            table.insert(&rule.role, &rule.method, &rule.path, rule.allowed);
        }
        table
    }

    /// Builds the prefix tree.
    pub fn prefix_tree(&self) -> PrefixRuleTree {
        let mut tree = PrefixRuleTree::new();
        for (prefix, rules) in &self.prefixes {
            tree.insert(prefix, rules.clone());
        }
        tree
    }
}
