//! The nested style tree and its fluent builder.

use super::value::StyleValue;

/// One entry of a [`StyleTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A declaration of the enclosing block.
    Value(StyleValue),
    /// A nested selector, qualified by the enclosing selector when compiled.
    Nested(StyleTree),
}

impl From<StyleTree> for StyleEntry {
    fn from(tree: StyleTree) -> Self {
        StyleEntry::Nested(tree)
    }
}

impl From<StyleValue> for StyleEntry {
    fn from(value: StyleValue) -> Self {
        StyleEntry::Value(value)
    }
}

macro_rules! value_entry_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleEntry {
                fn from(value: $ty) -> Self {
                    StyleEntry::Value(value.into())
                }
            }
        )*
    };
}

value_entry_from!(&str, String, i32, i64, u32, u64, usize, f32, f64);

/// A nested description of selectors and declarations.
///
/// At the top level every key is a selector. Inside a selector, entries that
/// hold a value are declarations (camelCase or kebab-case property names) and
/// entries that hold another tree are nested selectors. Which is which is
/// decided by the entry, never by the spelling of the key.
///
/// Entries keep insertion order. Inserting an existing key replaces its entry
/// in place, so the key keeps its original position.
///
/// # Example
///
/// ```rust
/// use stylesheet_loader::StyleTree;
///
/// let styles = StyleTree::new().rule(
///     ".card",
///     StyleTree::new()
///         .decl("backgroundColor", "#2f2f2f")
///         .decl("marginTop", 10)
///         .rule(".title", StyleTree::new().decl("fontWeight", 700)),
/// );
///
/// assert_eq!(styles.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated tree for chaining.
    pub fn decl<V: Into<StyleValue>>(mut self, property: &str, value: V) -> Self {
        self.insert(property, StyleEntry::Value(value.into()));
        self
    }

    /// Adds a nested selector, returning the updated tree for chaining.
    pub fn rule(mut self, selector: &str, tree: StyleTree) -> Self {
        self.insert(selector, StyleEntry::Nested(tree));
        self
    }

    /// Inserts an entry, replacing any existing entry under the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) {
        let key = key.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Returns the number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }
}

impl<K: Into<String>, E: Into<StyleEntry>> FromIterator<(K, E)> for StyleTree {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut tree = StyleTree::new();
        for (key, entry) in iter {
            tree.insert(key, entry);
        }
        tree
    }
}
