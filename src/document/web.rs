//! Browser DOM backend.

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlHeadElement};

use super::{Document, DomError, NodeKind};

fn host_error(operation: &'static str) -> impl Fn(JsValue) -> DomError {
    move |e| DomError::Host {
        operation,
        message: format!("{:?}", e),
    }
}

/// The browser document, reached through `web-sys`.
///
/// Style nodes are `<style>` elements appended to `document.head`. Browsers
/// that `web-sys` targets accept CSS as the element's text content, so every
/// node reports [`NodeKind::InnerContent`].
pub struct WebDocument {
    document: web_sys::Document,
    head: HtmlHeadElement,
}

impl WebDocument {
    /// Binds to the current window's document.
    pub fn new() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DomError::Host {
                operation: "window.document",
                message: "no document in this context".to_string(),
            })?;
        Self::from_document(document)
    }

    /// Binds to an explicit document.
    pub fn from_document(document: web_sys::Document) -> Result<Self, DomError> {
        let head = document.head().ok_or(DomError::MissingHead)?;
        Ok(Self { document, head })
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn create_style_node(&mut self) -> Result<Element, DomError> {
        self.document
            .create_element("style")
            .map_err(host_error("createElement"))
    }

    fn node_kind(&self, _node: &Element) -> NodeKind {
        NodeKind::InnerContent
    }

    fn append_to_head(&mut self, node: &Element) -> Result<(), DomError> {
        self.head
            .append_child(node)
            .map(|_| ())
            .map_err(host_error("appendChild"))
    }

    fn remove_from_head(&mut self, node: &Element) -> Result<(), DomError> {
        self.head
            .remove_child(node)
            .map(|_| ())
            .map_err(host_error("removeChild"))
    }

    fn remove_from_parent(&mut self, node: &Element) -> Result<(), DomError> {
        let parent = node.parent_node().ok_or(DomError::Detached)?;
        parent
            .remove_child(node)
            .map(|_| ())
            .map_err(host_error("parentNode.removeChild"))
    }

    fn write_sheet_text(&mut self, node: &Element, css: &str) -> Result<(), DomError> {
        // no writable stylesheet text in web-sys; text content is equivalent
        node.set_text_content(Some(css));
        Ok(())
    }

    fn write_inner_content(&mut self, node: &Element, css: &str) -> Result<(), DomError> {
        node.set_text_content(Some(css));
        Ok(())
    }
}
