//! Flattening a JSON value into the rows the tree viewer displays.

use serde_json::Value;

use super::path::{KeyPath, KeySegment};

/// Default number of entries shown per collection.
pub const DEFAULT_COLLECTION_LIMIT: usize = 10;

/// Display options for the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Do not show the root as a row, only its children.
    pub hide_root: bool,
    /// Entries shown per object/array before truncation (0 = unlimited).
    pub collection_limit: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            hide_root: true,
            collection_limit: DEFAULT_COLLECTION_LIMIT,
        }
    }
}

/// What a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Object { len: usize },
    Array { len: usize },
    String,
    Number,
    Bool,
    Null,
    /// Summary of entries cut off by the collection limit.
    More { omitted: usize },
}

impl RowKind {
    /// Can this row be expanded or collapsed?
    pub fn is_collection(&self) -> bool {
        matches!(self, RowKind::Object { .. } | RowKind::Array { .. })
    }
}

/// One visible line of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    /// Path from just below the root (empty for the root row itself).
    pub key_path: KeyPath,
    /// Nesting depth, root = 0.
    pub level: usize,
    /// Key label (`"root"` for the root row).
    pub label: String,
    /// Rendered value or collection summary.
    pub value: String,
    pub kind: RowKind,
    /// Expanded state; always `false` for leaves.
    pub expanded: bool,
}

/// Flatten `data` into the currently visible rows.
///
/// `is_expanded` receives `(key_path, node, level)` and is only called for
/// objects and arrays.
pub fn flatten(
    data: &Value,
    options: &TreeOptions,
    is_expanded: &dyn Fn(&KeyPath, &Value, usize) -> bool,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let root = KeyPath::root();

    if options.hide_root && is_collection(data) {
        push_children(data, &root, 0, options, is_expanded, &mut rows);
    } else {
        push_node("root".to_string(), data, root, 0, options, is_expanded, &mut rows);
    }

    rows
}

fn push_node(
    label: String,
    value: &Value,
    key_path: KeyPath,
    level: usize,
    options: &TreeOptions,
    is_expanded: &dyn Fn(&KeyPath, &Value, usize) -> bool,
    rows: &mut Vec<TreeRow>,
) {
    let kind = row_kind(value);
    let expanded = kind.is_collection() && is_expanded(&key_path, value, level);

    rows.push(TreeRow {
        key_path: key_path.clone(),
        level,
        label,
        value: preview(value),
        kind,
        expanded,
    });

    if expanded {
        push_children(value, &key_path, level, options, is_expanded, rows);
    }
}

fn push_children(
    value: &Value,
    parent: &KeyPath,
    parent_level: usize,
    options: &TreeOptions,
    is_expanded: &dyn Fn(&KeyPath, &Value, usize) -> bool,
    rows: &mut Vec<TreeRow>,
) {
    let entries: Vec<(KeySegment, &Value)> = match value {
        Value::Object(map) => map.iter().map(|(k, v)| (KeySegment::Key(k.clone()), v)).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (KeySegment::Index(i), v)).collect(),
        _ => return,
    };

    let limit = match options.collection_limit {
        0 => entries.len(),
        n => n.min(entries.len()),
    };
    let level = parent_level + 1;

    for (segment, child) in entries.iter().take(limit) {
        let label = segment.to_string();
        push_node(label, child, parent.child(segment.clone()), level, options, is_expanded, rows);
    }

    let omitted = entries.len() - limit;
    if omitted > 0 {
        rows.push(TreeRow {
            key_path: parent.clone(),
            level,
            label: String::new(),
            value: format!("… {} more", omitted),
            kind: RowKind::More { omitted },
            expanded: false,
        });
    }
}

fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn row_kind(value: &Value) -> RowKind {
    match value {
        Value::Object(map) => RowKind::Object { len: map.len() },
        Value::Array(items) => RowKind::Array { len: items.len() },
        Value::String(_) => RowKind::String,
        Value::Number(_) => RowKind::Number,
        Value::Bool(_) => RowKind::Bool,
        Value::Null => RowKind::Null,
    }
}

/// Short text shown after a row's key.
fn preview(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{}} {} {}", map.len(), plural(map.len(), "key", "keys")),
        Value::Array(items) => format!("[] {} {}", items.len(), plural(items.len(), "item", "items")),
        Value::String(s) => format!("{:?}", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_open(_: &KeyPath, _: &Value, _: usize) -> bool {
        true
    }

    fn labels(rows: &[TreeRow]) -> Vec<String> {
        rows.iter().map(|r| format!("{}{}", "  ".repeat(r.level), r.label)).collect()
    }

    #[test]
    fn test_hide_root_shows_only_children() {
        let data = json!({"a": 1, "b": {"c": true}});
        let rows = flatten(&data, &TreeOptions::default(), &all_open);
        assert_eq!(labels(&rows), vec!["  a", "  b", "    c"]);
        assert_eq!(rows[0].level, 1);
        assert_eq!(rows[2].key_path.to_string(), "b.c");
    }

    #[test]
    fn test_visible_root_row() {
        let data = json!({"a": 1});
        let options = TreeOptions { hide_root: false, ..TreeOptions::default() };
        let rows = flatten(&data, &options, &all_open);
        assert_eq!(rows[0].label, "root");
        assert_eq!(rows[0].level, 0);
        assert!(rows[0].key_path.is_empty());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_collapsed_node_hides_children() {
        let data = json!({"a": {"b": 1}, "c": [1, 2]});
        let rows = flatten(&data, &TreeOptions::default(), &|p, _, _| p.to_string() != "a");
        assert_eq!(labels(&rows), vec!["  a", "  c", "    0", "    1"]);
        assert!(!rows[0].expanded);
        assert!(rows[1].expanded);
    }

    #[test]
    fn test_predicate_only_called_for_collections() {
        let data = json!({"s": "x", "n": 1, "o": {}});
        let calls = std::cell::RefCell::new(Vec::new());
        flatten(&data, &TreeOptions::default(), &|p, _, level| {
            calls.borrow_mut().push((p.to_string(), level));
            true
        });
        assert_eq!(calls.into_inner(), vec![("o".to_string(), 1)]);
    }

    #[test]
    fn test_collection_limit_truncates() {
        let data = json!({"items": (0..25).collect::<Vec<_>>()});
        let rows = flatten(&data, &TreeOptions::default(), &all_open);
        // items + 10 entries + summary
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[11].kind, RowKind::More { omitted: 15 });
        assert_eq!(rows[11].value, "… 15 more");
        assert_eq!(rows[11].level, 2);
    }

    #[test]
    fn test_collection_limit_applies_to_root_object() {
        let map: serde_json::Map<String, Value> =
            (0..12).map(|i| (format!("k{:02}", i), json!(i))).collect();
        let rows = flatten(&Value::Object(map), &TreeOptions::default(), &all_open);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[10].kind, RowKind::More { omitted: 2 });
    }

    #[test]
    fn test_unlimited_collection() {
        let data = json!({"items": (0..25).collect::<Vec<_>>()});
        let options = TreeOptions { collection_limit: 0, ..TreeOptions::default() };
        assert_eq!(flatten(&data, &options, &all_open).len(), 26);
    }

    #[test]
    fn test_previews() {
        let data = json!({"s": "hi", "n": 2.5, "b": false, "z": null, "o": {"x": 1}, "a": []});
        let rows = flatten(&data, &TreeOptions::default(), &|_, _, _| false);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["\"hi\"", "2.5", "false", "null", "{} 1 key", "[] 0 items"]);
    }

    #[test]
    fn test_scalar_root_with_hidden_root() {
        let rows = flatten(&json!(42), &TreeOptions::default(), &all_open);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RowKind::Number);
    }
}
