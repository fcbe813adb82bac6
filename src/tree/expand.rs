//! Default expand/collapse policy for the raw payload tree.
//!
//! Rules are evaluated in order and the first match decides:
//! 1. Noisy top-level fields (`content_safety`, `content_filter_results`,
//!    `image_url`) start collapsed.
//! 2. `choices` starts expanded.
//! 3. Nodes at level 3 start collapsed.
//! 4. Everything else starts expanded.
//!
//! Only level 3 is collapsed, so the children of a collapsed level-3 node are
//! already open once the user expands it.

use serde_json::Value;

use super::path::KeyPath;

/// Top-level fields that start collapsed.
pub const KEEP_COLLAPSED: &[&str] = &["content_safety", "content_filter_results", "image_url"];

/// Top-level fields that start expanded.
pub const KEEP_EXPANDED: &[&str] = &["choices"];

/// Nesting depth collapsed by default.
pub const COLLAPSED_LEVEL: usize = 3;

/// One entry in the ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionRule {
    /// Short name, shown by the CLI.
    pub name: &'static str,
    /// Does the rule apply to this node?
    pub matches: fn(&KeyPath, usize) -> bool,
    /// Initial state when it applies.
    pub expand: bool,
}

const RULES: &[ExpansionRule] = &[
    ExpansionRule { name: "keep-collapsed", matches: outermost_in_collapsed, expand: false },
    ExpansionRule { name: "keep-expanded", matches: outermost_in_expanded, expand: true },
    ExpansionRule { name: "collapsed-level", matches: at_collapsed_level, expand: false },
    ExpansionRule { name: "default", matches: always, expand: true },
];

fn outermost_is_one_of(key_path: &KeyPath, names: &[&str]) -> bool {
    key_path
        .outermost()
        .map(|segment| segment.to_string())
        .is_some_and(|key| names.contains(&key.as_str()))
}

fn outermost_in_collapsed(key_path: &KeyPath, _level: usize) -> bool {
    outermost_is_one_of(key_path, KEEP_COLLAPSED)
}

fn outermost_in_expanded(key_path: &KeyPath, _level: usize) -> bool {
    outermost_is_one_of(key_path, KEEP_EXPANDED)
}

fn at_collapsed_level(_key_path: &KeyPath, level: usize) -> bool {
    level == COLLAPSED_LEVEL
}

fn always(_key_path: &KeyPath, _level: usize) -> bool {
    true
}

/// The first rule that applies to a node.
pub fn matching_rule(key_path: &KeyPath, level: usize) -> &'static ExpansionRule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(key_path, level))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Should the node at `key_path` (root-exclusive) and nesting `level` start expanded?
pub fn should_expand_node_initially(key_path: &KeyPath, level: usize) -> bool {
    matching_rule(key_path, level).expand
}

/// The policy in the `(key_path, node, level)` shape the tree viewer expects.
pub fn initial_expansion(key_path: &KeyPath, _node: &Value, level: usize) -> bool {
    should_expand_node_initially(key_path, level)
}
