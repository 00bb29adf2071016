//! # stylesheet-loader
//!
//! Compile nested style trees to CSS and keep them injected in a document.
//!
//! A [`StyleTree`] describes selectors and declarations the way a
//! JavaScript style object does: camelCase property names, bare numbers for
//! lengths, nested selectors inside their parent. [`build`] turns it into
//! flat CSS text, and a [`StyleLoader`] writes that text into a `<style>`
//! node per id, updating the node on later calls instead of adding more.
//!
//! ## Quick start
//!
//! ```rust
//! use stylesheet_loader::{MemoryDocument, StyleLoader, StyleTree};
//!
//! let styles = StyleTree::new().rule(
//!     ".card",
//!     StyleTree::new()
//!         .decl("marginTop", 10)
//!         .decl("zIndex", 2)
//!         .rule(".title", StyleTree::new().decl("fontWeight", 700)),
//! );
//!
//! let mut loader = StyleLoader::new(MemoryDocument::new());
//! loader.add("card", &styles).unwrap();
//!
//! assert_eq!(
//!     loader.document().head_css(),
//!     ".card {\n  margin-top: 10px;\n  z-index: 2;\n}\n.card .title {\n  font-weight: 700;\n}\n",
//! );
//! ```
//!
//! ## Compilation rules
//!
//! - Nested selectors are flattened: `.a` containing `.b` yields a `.a .b` block
//! - Property names go from camelCase to kebab-case
//! - Bare numbers get `px` unless the property is unit-less (see [`properties`])
//! - Declaration and block order follow the tree's insertion order
//!
//! ## Documents
//!
//! The loader works against the [`Document`] trait. [`MemoryDocument`] is a
//! headless implementation; enable the `web` feature for the browser DOM.
//!
//! ## Loading trees from files
//!
//! Trees deserialize from JSON or YAML with key order preserved, see
//! [`StyleTree::from_json`] and [`StyleTree::from_yaml`]. The `cli` feature
//! adds a `stylesheet-loader` binary that compiles such files.

pub mod compile;
pub mod document;
pub mod loader;
pub mod tree;

pub use compile::{
    build, build_with, flatten, format_rules, kebab_case, properties, CompileOptions,
    CompiledRule, Declaration,
};
pub use document::{Document, DomError, MemoryDocument, NodeId, NodeKind};
#[cfg(feature = "web")]
pub use document::WebDocument;
pub use loader::{CachedSheet, SheetCache, StyleLoader};
pub use tree::{LoadError, StyleEntry, StyleTree, StyleValue};
