//! Headless in-memory document.

use log::trace;

use super::{Document, DomError, NodeKind};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MemoryNode {
    kind: Option<NodeKind>,
    sheet_text: String,
    inner_content: String,
    attached: bool,
}

/// A document that lives entirely in memory.
///
/// Nodes are kept in an arena and never freed, so handles stay valid after
/// removal and a detached node's last text can still be inspected. The
/// document counts every attach and detach call, which makes lifecycle
/// behavior observable.
///
/// # Example
///
/// ```rust
/// use stylesheet_loader::{MemoryDocument, StyleLoader, StyleTree};
///
/// let mut loader = StyleLoader::new(MemoryDocument::new());
/// loader
///     .add("theme", &StyleTree::new().rule("body", StyleTree::new().decl("margin", 0)))
///     .unwrap();
///
/// assert_eq!(loader.document().head_css(), "body {\n  margin: 0px;\n}\n");
/// ```
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    head: Vec<NodeId>,
    node_kind: NodeKind,
    head_removal: bool,
    appended: usize,
    head_removals: usize,
    parent_removals: usize,
}

impl MemoryDocument {
    /// Creates a document whose style nodes take inner content.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: Vec::new(),
            node_kind: NodeKind::InnerContent,
            head_removal: true,
            appended: 0,
            head_removals: 0,
            parent_removals: 0,
        }
    }

    /// Sets the kind of style node created from now on.
    pub fn with_node_kind(mut self, kind: NodeKind) -> Self {
        self.node_kind = kind;
        self
    }

    /// Makes the head container unable to remove children, forcing the
    /// parent-reference fallback.
    pub fn without_head_removal(mut self) -> Self {
        self.head_removal = false;
        self
    }

    /// Nodes currently attached to the head, in attach order.
    pub fn head_children(&self) -> &[NodeId] {
        &self.head
    }

    /// Returns true if `node` is attached to the head.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.attached)
    }

    /// Text written through the stylesheet property of `node`.
    pub fn sheet_text(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.sheet_text.as_str())
    }

    /// Text written as inner content of `node`.
    pub fn inner_content(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.inner_content.as_str())
    }

    /// The CSS `node` holds, read through its own write path.
    pub fn css(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| match n.kind {
            Some(NodeKind::SheetText) => n.sheet_text.as_str(),
            _ => n.inner_content.as_str(),
        })
    }

    /// All CSS currently attached to the head, concatenated in attach order.
    pub fn head_css(&self) -> String {
        self.head
            .iter()
            .filter_map(|id| self.css(*id))
            .collect()
    }

    /// Number of style nodes created.
    pub fn created(&self) -> usize {
        self.nodes.len()
    }

    /// Number of append-to-head calls.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Number of successful removals through the head container.
    pub fn head_removals(&self) -> usize {
        self.head_removals
    }

    /// Number of successful removals through a node's parent reference.
    pub fn parent_removals(&self) -> usize {
        self.parent_removals
    }

    fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut MemoryNode, DomError> {
        self.nodes.get_mut(id.0).ok_or_else(|| DomError::Host {
            operation: "lookup",
            message: format!("unknown node {}", id.0),
        })
    }

    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let node = self.node_mut(id)?;
        if !node.attached {
            return Err(DomError::Detached);
        }
        node.attached = false;
        self.head.retain(|child| *child != id);
        Ok(())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn create_style_node(&mut self) -> Result<NodeId, DomError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MemoryNode {
            kind: Some(self.node_kind),
            ..MemoryNode::default()
        });
        Ok(id)
    }

    fn node_kind(&self, node: &NodeId) -> NodeKind {
        self.node(*node)
            .and_then(|n| n.kind)
            .unwrap_or(NodeKind::InnerContent)
    }

    fn append_to_head(&mut self, node: &NodeId) -> Result<(), DomError> {
        let id = *node;
        let entry = self.node_mut(id)?;
        if !entry.attached {
            entry.attached = true;
            self.head.push(id);
        }
        self.appended += 1;
        Ok(())
    }

    fn supports_head_removal(&self) -> bool {
        self.head_removal
    }

    fn remove_from_head(&mut self, node: &NodeId) -> Result<(), DomError> {
        if !self.head_removal {
            return Err(DomError::Host {
                operation: "removeChild",
                message: "head container cannot remove children".to_string(),
            });
        }
        self.detach(*node)?;
        self.head_removals += 1;
        Ok(())
    }

    fn remove_from_parent(&mut self, node: &NodeId) -> Result<(), DomError> {
        self.detach(*node)?;
        self.parent_removals += 1;
        Ok(())
    }

    fn write_sheet_text(&mut self, node: &NodeId, css: &str) -> Result<(), DomError> {
        trace!("memory document: sheet text of {:?} <- {} bytes", node, css.len());
        self.node_mut(*node)?.sheet_text = css.to_string();
        Ok(())
    }

    fn write_inner_content(&mut self, node: &NodeId, css: &str) -> Result<(), DomError> {
        trace!("memory document: inner content of {:?} <- {} bytes", node, css.len());
        self.node_mut(*node)?.inner_content = css.to_string();
        Ok(())
    }
}
