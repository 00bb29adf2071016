//! Loading style trees from JSON and YAML.
//!
//! The [`Deserialize`] implementation visits maps entry by entry, so the
//! order of keys in the source document is the order of the tree. This
//! matters: declaration and block order in the compiled CSS follow it.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use super::tree::{StyleEntry, StyleTree};
use super::value::StyleValue;

/// Error returned when a style tree document cannot be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The JSON source was malformed or not shaped like a style tree.
    Json(serde_json::Error),
    /// The YAML source was malformed or not shaped like a style tree.
    Yaml(serde_yaml::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(e) => write!(f, "invalid JSON style tree: {}", e),
            LoadError::Yaml(e) => write!(f, "invalid YAML style tree: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Json(e) => Some(e),
            LoadError::Yaml(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        LoadError::Yaml(e)
    }
}

impl StyleTree {
    /// Parses a style tree from JSON text.
    ///
    /// ```rust
    /// use stylesheet_loader::StyleTree;
    ///
    /// let tree = StyleTree::from_json(r#"{ ".a": { "marginTop": 10 } }"#).unwrap();
    /// assert!(tree.get(".a").is_some());
    /// ```
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a style tree from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl<'de> Deserialize<'de> for StyleTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor)
    }
}

impl<'de> Deserialize<'de> for StyleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = StyleTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of selectors or properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StyleTree, A::Error> {
        let mut tree = StyleTree::new();
        while let Some((key, entry)) = map.next_entry::<String, StyleEntry>()? {
            tree.insert(key, entry);
        }
        Ok(tree)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = StyleEntry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a number, or a nested style map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleEntry, E> {
        Ok(StyleEntry::Value(StyleValue::Text(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StyleEntry, E> {
        Ok(StyleEntry::Value(StyleValue::Text(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleEntry, E> {
        Ok(StyleEntry::Value(StyleValue::Number(v as f64)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleEntry, E> {
        Ok(StyleEntry::Value(StyleValue::Number(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StyleEntry, E> {
        Ok(StyleEntry::Value(StyleValue::Number(v)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<StyleEntry, A::Error> {
        TreeVisitor.visit_map(map).map(StyleEntry::Nested)
    }
}
