// pgmeta-client: Rust client for the platform pg-meta API
// Copyright 2026 Platform Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Composable query keys
//!
//! A [`QueryKey`] is an ordered list of segments. Keys form families by
//! prefix: invalidating `["projects", "abc", "tables"]` reaches every key
//! that starts with those three segments.

use std::fmt;

/// One segment of a [`QueryKey`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySegment {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<KeySegment>),
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        KeySegment::Str(value.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(value: String) -> Self {
        KeySegment::Str(value)
    }
}

impl From<&String> for KeySegment {
    fn from(value: &String) -> Self {
        KeySegment::Str(value.clone())
    }
}

impl From<i64> for KeySegment {
    fn from(value: i64) -> Self {
        KeySegment::Int(value)
    }
}

impl From<bool> for KeySegment {
    fn from(value: bool) -> Self {
        KeySegment::Bool(value)
    }
}

impl From<Vec<KeySegment>> for KeySegment {
    fn from(value: Vec<KeySegment>) -> Self {
        KeySegment::List(value)
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySegment::Str(s) => write!(f, "{s:?}"),
            KeySegment::Int(i) => write!(f, "{i}"),
            KeySegment::Bool(b) => write!(f, "{b}"),
            KeySegment::List(items) => write_list(f, items),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[KeySegment]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// Key identifying a cached query or, used as a filter, a family of queries
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeySegment>);

impl QueryKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment
    pub fn with(mut self, segment: impl Into<KeySegment>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Appends every segment of `other`
    pub fn extend(mut self, other: impl IntoIterator<Item = KeySegment>) -> Self {
        self.0.extend(other);
        self
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

    /// Returns true if `prefix` is a segment-wise prefix of this key.
    ///
    /// The empty key is a prefix of every key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl FromIterator<KeySegment> for QueryKey {
    fn from_iter<I: IntoIterator<Item = KeySegment>>(iter: I) -> Self {
        QueryKey(iter.into_iter().collect())
    }
}

impl From<Vec<KeySegment>> for QueryKey {
    fn from(segments: Vec<KeySegment>) -> Self {
        QueryKey(segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with() {
        let key = QueryKey::new()
            .with("projects")
            .with("abc")
            .with("tables")
            .with("public");

        assert!(key.starts_with(&QueryKey::new()));
        assert!(key.starts_with(&QueryKey::new().with("projects").with("abc")));
        assert!(key.starts_with(&key.clone()));
        assert!(!key.starts_with(&QueryKey::new().with("projects").with("xyz")));
        assert!(!key.starts_with(&key.clone().with("extra")));
    }

    #[test]
    fn test_segments_compare_by_type() {
        let by_int = QueryKey::new().with(5i64);
        let by_str = QueryKey::new().with("5");
        assert_ne!(by_int, by_str);
        assert!(!by_int.starts_with(&by_str));
    }

    #[test]
    fn test_display() {
        let key = QueryKey::new()
            .with("projects")
            .with(KeySegment::List(vec!["table-editor".into(), 42i64.into()]))
            .with(true);
        assert_eq!(key.to_string(), r#"["projects",["table-editor",42],true]"#);
    }
}
