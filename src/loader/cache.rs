//! The sheet cache: style nodes owned by a loader, keyed by id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::document::NodeKind;

/// A cached style node together with its resolved write path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSheet<N> {
    pub node: N,
    pub kind: NodeKind,
}

/// Mapping from caller ids to the style nodes the loader owns.
///
/// Holds at most one node per id. Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct SheetCache<N> {
    sheets: HashMap<String, CachedSheet<N>>,
}

impl<N> SheetCache<N> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    /// Looks up the sheet for `id`.
    pub fn get(&self, id: &str) -> Option<&CachedSheet<N>> {
        self.sheets.get(id)
    }

    /// Returns the sheet for `id`, creating it with `create` if absent.
    ///
    /// If `create` fails nothing is inserted.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        id: &str,
        create: impl FnOnce() -> Result<CachedSheet<N>, E>,
    ) -> Result<&CachedSheet<N>, E> {
        match self.sheets.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(create()?)),
        }
    }

    /// Evicts the sheet for `id`, returning it if it was cached.
    pub fn remove(&mut self, id: &str) -> Option<CachedSheet<N>> {
        self.sheets.remove(id)
    }

    /// Returns true if `id` has a cached sheet.
    pub fn contains(&self, id: &str) -> bool {
        self.sheets.contains_key(id)
    }

    /// Returns the number of cached sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if no sheets are cached.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Returns an iterator over all cached ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(|s| s.as_str())
    }

    /// Evicts every sheet.
    pub fn clear(&mut self) {
        self.sheets.clear();
    }
}

impl<N> Default for SheetCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(node: u32) -> CachedSheet<u32> {
        CachedSheet {
            node,
            kind: NodeKind::InnerContent,
        }
    }

    #[test]
    fn test_insert_once_per_id() {
        let mut cache = SheetCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let got = cache
                .get_or_try_insert_with("a", || -> Result<_, ()> {
                    calls += 1;
                    Ok(sheet(1))
                })
                .unwrap();
            assert_eq!(got.node, 1);
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_create_inserts_nothing() {
        let mut cache: SheetCache<u32> = SheetCache::new();
        let result = cache.get_or_try_insert_with("a", || Err("boom"));

        assert_eq!(result.err(), Some("boom"));
        assert!(!cache.contains("a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = SheetCache::new();
        cache.get_or_try_insert_with("a", || Ok::<_, ()>(sheet(1))).unwrap();
        cache.get_or_try_insert_with("b", || Ok::<_, ()>(sheet(2))).unwrap();

        assert_eq!(cache.remove("a").map(|s| s.node), Some(1));
        assert_eq!(cache.remove("a"), None);
        assert_eq!(cache.ids().collect::<Vec<_>>(), vec!["b"]);

        cache.clear();
        assert!(cache.is_empty());
    }
}
