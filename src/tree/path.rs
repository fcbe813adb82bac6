//! Key paths into a JSON tree.

use std::fmt;

/// One step into a collection: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySegment {
    /// Object field name.
    Key(String),
    /// Array position.
    Index(usize),
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySegment::Key(k) => f.write_str(k),
            KeySegment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for KeySegment {
    fn from(key: &str) -> Self {
        KeySegment::Key(key.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(key: String) -> Self {
        KeySegment::Key(key)
    }
}

impl From<usize> for KeySegment {
    fn from(index: usize) -> Self {
        KeySegment::Index(index)
    }
}

/// Ordered keys from just below the root down to a node.
///
/// The first segment is the outermost (top-level) field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<KeySegment>);

impl KeyPath {
    /// The empty path (the root itself).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Top-level field this node lives under.
    pub fn outermost(&self) -> Option<&KeySegment> {
        self.0.first()
    }

    /// Path of a child node.
    pub fn child(&self, segment: impl Into<KeySegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[KeySegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<KeySegment>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
