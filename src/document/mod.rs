//! Host document abstraction.
//!
//! The loader never talks to a DOM directly. It goes through [`Document`],
//! which covers the handful of capabilities style injection needs: create a
//! style node, attach it under the head container, write CSS into it and
//! detach it again.
//!
//! Two backends ship with the crate:
//!
//! - [`MemoryDocument`]: a headless, in-memory document. Useful for tests
//!   and for collecting injected CSS outside a browser.
//! - `WebDocument` (feature `web`): the browser DOM via `web-sys`.

mod memory;
#[cfg(feature = "web")]
mod web;

pub use memory::{MemoryDocument, NodeId};
#[cfg(feature = "web")]
pub use web::WebDocument;

use std::fmt;

/// How CSS text is written into a style node.
///
/// Resolved once, when the node is created, and kept alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The node exposes a stylesheet object with a writable text property.
    SheetText,
    /// The node only accepts its text as inner content.
    InnerContent,
}

/// Error raised by a document backend at the host boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The document has no head-like container to attach style nodes to.
    MissingHead,
    /// A node was expected to have a parent but is detached.
    Detached,
    /// The host rejected an operation.
    Host { operation: &'static str, message: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::MissingHead => write!(f, "document has no head container"),
            DomError::Detached => write!(f, "style node has no parent"),
            DomError::Host { operation, message } => {
                write!(f, "{} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for DomError {}

/// The capabilities a host document offers to the loader.
///
/// Node handles are cheap references into the host (an index, a JS object
/// handle); the document owns the nodes themselves.
pub trait Document {
    /// Handle to a style node.
    type Node: Clone + fmt::Debug;

    /// Creates a new, detached style node.
    fn create_style_node(&mut self) -> Result<Self::Node, DomError>;

    /// Reports which write path `node` supports.
    fn node_kind(&self, node: &Self::Node) -> NodeKind;

    /// Appends `node` to the head container.
    fn append_to_head(&mut self, node: &Self::Node) -> Result<(), DomError>;

    /// Whether the head container can remove children itself.
    ///
    /// When false, the loader detaches nodes through
    /// [`remove_from_parent`](Self::remove_from_parent) instead.
    fn supports_head_removal(&self) -> bool {
        true
    }

    /// Removes `node` through the head container.
    fn remove_from_head(&mut self, node: &Self::Node) -> Result<(), DomError>;

    /// Removes `node` through its own parent reference.
    fn remove_from_parent(&mut self, node: &Self::Node) -> Result<(), DomError>;

    /// Writes CSS through the node's stylesheet text property.
    fn write_sheet_text(&mut self, node: &Self::Node, css: &str) -> Result<(), DomError>;

    /// Writes CSS as the node's inner content.
    fn write_inner_content(&mut self, node: &Self::Node, css: &str) -> Result<(), DomError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_error_display() {
        assert!(DomError::MissingHead.to_string().contains("head"));
        let err = DomError::Host {
            operation: "appendChild",
            message: "HierarchyRequestError".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("appendChild"));
        assert!(msg.contains("HierarchyRequestError"));
    }
}
