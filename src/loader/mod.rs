//! The style loader: compiled CSS kept injected in a document, one node per id.
//!
//! [`StyleLoader`] owns a [`Document`] and a [`SheetCache`]. Each id maps to
//! at most one style node attached under the document's head container.
//! Writing the same id again updates that node instead of adding another.
//!
//! # Lifecycle
//!
//! An id is either absent or cached. [`StyleLoader::get`] (and everything
//! built on it) moves an absent id to cached by creating and attaching a
//! node. [`StyleLoader::remove`] detaches the node and evicts the id.
//! [`StyleLoader::destroy`] does that for every id.
//!
//! The cache itself is created on first use, so a fresh loader reports
//! [`is_initialized`](StyleLoader::is_initialized) as false until something
//! is fetched.
//!
//! # Example
//!
//! ```rust
//! use stylesheet_loader::{MemoryDocument, StyleLoader, StyleTree};
//!
//! let mut loader = StyleLoader::new(MemoryDocument::new());
//! let tree = StyleTree::new().rule(".btn", StyleTree::new().decl("padding", 4));
//!
//! loader.add("buttons", &tree).unwrap();
//! loader.add("buttons", &tree).unwrap(); // updates, doesn't duplicate
//! assert_eq!(loader.document().head_children().len(), 1);
//!
//! loader.remove("buttons").unwrap();
//! assert!(loader.document().head_children().is_empty());
//! ```

mod cache;

pub use cache::{CachedSheet, SheetCache};

use log::{debug, trace};

use crate::compile::{build_with, CompileOptions};
use crate::document::{Document, DomError, NodeKind};
use crate::tree::StyleTree;

/// Compiles style trees and keeps the results injected in a document.
pub struct StyleLoader<D: Document> {
    document: D,
    options: CompileOptions,
    cache: Option<SheetCache<D::Node>>,
}

impl<D: Document> StyleLoader<D> {
    /// Creates a loader over `document` with default compile options.
    pub fn new(document: D) -> Self {
        Self::with_options(document, CompileOptions::default())
    }

    /// Creates a loader over `document` with explicit compile options.
    pub fn with_options(document: D, options: CompileOptions) -> Self {
        Self {
            document,
            options,
            cache: None,
        }
    }

    /// Compiles `tree` and writes the CSS into the node for `id`.
    pub fn add(&mut self, id: &str, tree: &StyleTree) -> Result<(), DomError> {
        let css = self.build(tree);
        self.set(id, &css)
    }

    /// Compiles `tree` to CSS text using this loader's options.
    ///
    /// Pure: does not touch the document or the cache.
    pub fn build(&self, tree: &StyleTree) -> String {
        build_with(tree, &self.options)
    }

    /// Writes `css` into the node for `id`, creating the node if needed.
    ///
    /// The node's write path was fixed when it was created; exactly one of
    /// the two paths runs.
    pub fn set(&mut self, id: &str, css: &str) -> Result<(), DomError> {
        let sheet = Self::fetch(&mut self.cache, &mut self.document, id)?;
        trace!("writing {} bytes to style node '{}' ({:?})", css.len(), id, sheet.kind);
        match sheet.kind {
            NodeKind::SheetText => self.document.write_sheet_text(&sheet.node, css),
            NodeKind::InnerContent => self.document.write_inner_content(&sheet.node, css),
        }
    }

    /// Returns the node for `id`, creating and attaching one if absent.
    ///
    /// Repeated calls return the same node and attach nothing new.
    pub fn get(&mut self, id: &str) -> Result<&D::Node, DomError> {
        let sheet = Self::fetch(&mut self.cache, &mut self.document, id)?;
        Ok(&sheet.node)
    }

    /// Detaches and evicts the node for `id`.
    ///
    /// Uses the head container's removal when the document supports it,
    /// falling back to the node's parent reference when it doesn't or when
    /// head removal fails. The id is evicted whatever the detach outcome; a
    /// failed detach is still reported. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), DomError> {
        let Some(sheet) = self.cache.as_mut().and_then(|cache| cache.remove(id)) else {
            return Ok(());
        };

        if self.document.supports_head_removal() {
            match self.document.remove_from_head(&sheet.node) {
                Ok(()) => {
                    debug!("removed style node '{}' from head", id);
                    return Ok(());
                }
                Err(e) => debug!("head removal of '{}' failed ({}), trying parent", id, e),
            }
        }

        self.document.remove_from_parent(&sheet.node)?;
        debug!("removed style node '{}' through its parent", id);
        Ok(())
    }

    /// Removes every cached node and resets the cache to empty.
    ///
    /// Every id is attempted even if some fail; the first failure is returned
    /// after the cache has been reset.
    pub fn destroy(&mut self) -> Result<(), DomError> {
        let ids: Vec<String> = self
            .cache
            .as_ref()
            .map(|cache| cache.ids().map(String::from).collect())
            .unwrap_or_default();

        debug!("destroying {} style node(s)", ids.len());
        let mut first_error = None;
        for id in &ids {
            if let Err(e) = self.remove(id) {
                first_error.get_or_insert(e);
            }
        }

        self.cache = Some(SheetCache::new());
        first_error.map_or(Ok(()), Err)
    }

    /// Returns the cached node for `id` without creating one.
    pub fn peek(&self, id: &str) -> Option<&D::Node> {
        self.cache.as_ref()?.get(id).map(|sheet| &sheet.node)
    }

    /// Returns true once the cache has been created.
    pub fn is_initialized(&self) -> bool {
        self.cache.is_some()
    }

    /// Returns true if `id` has a cached node.
    pub fn contains(&self, id: &str) -> bool {
        self.cache.as_ref().is_some_and(|cache| cache.contains(id))
    }

    /// Returns the number of cached nodes.
    pub fn len(&self) -> usize {
        self.cache.as_ref().map_or(0, SheetCache::len)
    }

    /// Returns true if no nodes are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over cached ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cache.iter().flat_map(|cache| cache.ids())
    }

    /// Returns the compile options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Returns the underlying document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Returns the underlying document mutably.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Consumes the loader, returning the document. Attached nodes stay attached.
    pub fn into_document(self) -> D {
        self.document
    }

    // Takes the fields apart so callers can keep using the document while
    // holding the returned sheet.
    fn fetch<'a>(
        cache: &'a mut Option<SheetCache<D::Node>>,
        document: &mut D,
        id: &str,
    ) -> Result<&'a CachedSheet<D::Node>, DomError> {
        cache
            .get_or_insert_with(SheetCache::new)
            .get_or_try_insert_with(id, || {
                let node = document.create_style_node()?;
                let kind = document.node_kind(&node);
                document.append_to_head(&node)?;
                debug!("attached style node '{}' ({:?})", id, kind);
                Ok(CachedSheet { node, kind })
            })
    }
}
