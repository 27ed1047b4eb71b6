//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes under a fresh root cannot violate the hierarchy.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        self.html_element = self
            .tree
            .element_children(self.tree.root())
            .find(|&id| self.tree.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);
        self.head_element = self.child_with_tag(self.html_element, "head");
        self.body_element = self.child_with_tag(self.html_element, "body");
    }

    fn child_with_tag(&self, parent: NodeId, tag: &str) -> NodeId {
        if !parent.is_valid() {
            return NodeId::NONE;
        }
        self.tree
            .element_children(parent)
            .find(|&id| self.tree.tag_name(id) == Some(tag))
            .unwrap_or(NodeId::NONE)
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by `id` attribute, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&node| self.tree.attribute(node, "id") == Some(id))
    }

    /// Find the `<style id=...>` element in head, creating it if missing
    pub fn ensure_style_element(&mut self, id: &str) -> DomResult<NodeId> {
        if self.head_element.is_valid() {
            let existing = self.tree.element_children(self.head_element).find(|&node| {
                self.tree.tag_name(node) == Some("style") && self.tree.attribute(node, "id") == Some(id)
            });
            if let Some(style) = existing {
                return Ok(style);
            }
        } else {
            self.head_element = self.create_head()?;
        }

        let style = self.tree.create_element("style");
        self.tree.set_attribute(style, "id", id)?;
        self.tree.append_child(self.head_element, style)?;
        tracing::debug!("Created stylesheet element #{}", id);
        Ok(style)
    }

    fn create_head(&mut self) -> DomResult<NodeId> {
        let head = self.tree.create_element("head");
        let parent = if self.html_element.is_valid() {
            self.html_element
        } else {
            self.tree.root()
        };
        self.tree.append_child(parent, head)?;
        Ok(head)
    }

    /// Append CSS text to a stylesheet node
    pub fn append_style_text(&mut self, style: NodeId, css: &str) -> DomResult<()> {
        self.tree.append_text(style, css)
    }

    /// Current text of a stylesheet node
    pub fn style_text(&self, style: NodeId) -> String {
        self.tree.text_content(style)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_skeleton() {
        let doc = Document::new();
        assert_eq!(doc.tree().tag_name(doc.document_element()), Some("html"));
        assert_eq!(doc.tree().tag_name(doc.head()), Some("head"));
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
    }

    #[test]
    fn test_finalize_finds_structure() {
        let mut doc = Document::empty();
        let tree = doc.tree_mut();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html).unwrap();
        tree.append_child(html, body).unwrap();
        doc.finalize();
        assert_eq!(doc.document_element(), html);
        assert_eq!(doc.body(), body);
        assert!(!doc.head().is_valid());
    }

    #[test]
    fn test_ensure_style_element_is_idempotent() {
        let mut doc = Document::new();
        let first = doc.ensure_style_element("dySTYLEInternalCSS").unwrap();
        let second = doc.ensure_style_element("dySTYLEInternalCSS").unwrap();
        assert_eq!(first, second);
        assert_eq!(doc.tree().parent(first), Some(doc.head()));
        assert_eq!(doc.get_element_by_id("dySTYLEInternalCSS"), Some(first));
    }

    #[test]
    fn test_ensure_style_element_creates_head() {
        let mut doc = Document::empty();
        let style = doc.ensure_style_element("css").unwrap();
        assert!(doc.head().is_valid());
        assert!(doc.tree().is_connected(style));
    }

    #[test]
    fn test_style_text_appends() {
        let mut doc = Document::new();
        let style = doc.ensure_style_element("css").unwrap();
        doc.append_style_text(style, ".a{color: red;}").unwrap();
        doc.append_style_text(style, ".b{color: blue;}").unwrap();
        assert_eq!(doc.style_text(style), ".a{color: red;}.b{color: blue;}");
    }
}
