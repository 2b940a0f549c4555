//! Longest-prefix-match allow rules.

use std::collections::HashMap;

/// Decisions for one prefix, keyed by `role:method`.
pub type RoleMethodMap = HashMap<String, bool>;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, Node>,
    /// Set when a prefix ends at this node.
    rules: Option<(String, RoleMethodMap)>,
}

/// A character trie of path prefixes.
///
/// Lookups return the rules of the longest registered prefix of the path,
/// independent of the order in which prefixes were inserted.
#[derive(Debug, Clone, Default)]
pub struct PrefixRuleTree {
    root: Node,
    len: usize,
}

impl PrefixRuleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `prefix`. Re-inserting a prefix replaces its map.
    pub fn insert(&mut self, prefix: &str, rules: RoleMethodMap) {
        let mut node = &mut self.root;
        for ch in prefix.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.rules.is_none() {
            self.len += 1;
        }
        node.rules = Some((prefix.to_string(), rules));
    }

    /// Finds the longest registered prefix of `path`.
    ///
    /// Returns the prefix's rule map and the matched prefix.
    pub fn longest_match(&self, path: &str) -> Option<(&RoleMethodMap, &str)> {
        let mut node = &self.root;
        let mut best = node.rules.as_ref();
        for ch in path.chars() {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    if node.rules.is_some() {
                        best = node.rules.as_ref();
                    }
                }
                None => break,
            }
        }
        best.map(|(prefix, rules)| (rules, prefix.as_str()))
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
