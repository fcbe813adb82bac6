//! The debug payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::truthy::is_truthy;

/// Key holding content that should be rendered instead of the raw tree.
pub const CONTENT_KEY: &str = "content";

/// Key describing how `content` should be interpreted.
pub const CONTENT_TYPE_KEY: &str = "contentType";

/// Open-ended metadata describing how a piece of content was generated.
///
/// Usually an object. Only `content` and `contentType` carry meaning at this
/// layer; every other key, and any non-object value, is displayed as a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebugPayload {
    root: Value,
}

impl DebugPayload {
    /// Create an empty object payload.
    pub fn new() -> Self {
        Self { root: Value::Object(Map::new()) }
    }

    /// Wrap any JSON value.
    pub fn from_value(value: Value) -> Self {
        Self { root: value }
    }

    /// A falsy payload (`null`, `false`, `0`, `""`) counts as no payload.
    pub fn is_present(&self) -> bool {
        is_truthy(&self.root)
    }

    /// Get a field by key. Always `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.as_object().and_then(|map| map.get(key))
    }

    /// Insert or replace a field. Ignored for non-objects.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        match &mut self.root {
            Value::Object(map) => map.insert(key.into(), value),
            _ => None,
        }
    }

    /// The `content` field, only when it is truthy.
    ///
    /// `content: 0`, `""`, `false` or `null` count as absent.
    pub fn content(&self) -> Option<&Value> {
        self.get(CONTENT_KEY).filter(|v| is_truthy(v))
    }

    /// The `contentType` field, passed through unexamined.
    pub fn content_type(&self) -> Option<&Value> {
        self.get(CONTENT_TYPE_KEY)
    }

    /// The whole payload as a JSON value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Number of top-level fields or items; 0 for scalars.
    pub fn len(&self) -> usize {
        match &self.root {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DebugPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for DebugPayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for DebugPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self { root: Value::Object(map) }
    }
}
