//! DOM Tree (arena-based allocation)

use crate::node::{ElementData, Node, NodeData};
use crate::{ClassList, DomError, DomResult, NodeId};

/// Arena-based DOM tree
///
/// Node 0 is always the document node. Removed nodes stay in the arena but
/// are unlinked, so `is_connected` tells live nodes from detached ones.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id))
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.node(child)?;
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let last = self.node(parent)?.last_child;
        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.node_mut(last)?.next_sibling = child;
        } else {
            self.node_mut(parent)?.first_child = child;
        }
        self.node_mut(parent)?.last_child = child;
        Ok(child)
    }

    /// Remove `child` from `parent`; the node stays in the arena, detached
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(child)
    }

    fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if let Some(p) = self.get_mut(prev) {
            p.next_sibling = next;
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = next;
        }
        if let Some(n) = self.get_mut(next) {
            n.prev_sibling = prev;
        } else if let Some(par) = self.get_mut(parent) {
            par.last_child = prev;
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        while node.is_valid() {
            if node == ancestor {
                return true;
            }
            node = self.get(node).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    /// Parent node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Parent node if it is an element (the document node is not)
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id)
            .filter(|&p| self.get(p).is_some_and(Node::is_element))
    }

    /// Direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Direct element children in order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(|&c| self.is_element(c))
    }

    /// All descendants of `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: self.children(id).collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Element data for `id`
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data for `id`
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::tag_name)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.require_element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Class list of an element
    pub fn class_list(&self, id: NodeId) -> Option<&ClassList> {
        self.element(id).map(ElementData::classes)
    }

    /// Add a class to an element; `Ok(false)` if it was already present
    pub fn add_class(&mut self, id: NodeId, token: &str) -> DomResult<bool> {
        Ok(self.require_element_mut(id)?.add_class(token))
    }

    fn require_element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|d| self.get(d).and_then(Node::as_text))
            .collect()
    }

    /// Append text to an element, extending its last text child if it has one
    pub fn append_text(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        self.require_element_mut(id)?;
        let last = self.node(id)?.last_child;
        if let Some(NodeData::Text(existing)) = self.get_mut(last).map(|n| &mut n.data) {
            existing.push_str(text);
            return Ok(());
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node)?;
        Ok(())
    }

    /// Start tag of an element, e.g. `<div class="a b">`, for diagnostics
    pub fn start_tag(&self, id: NodeId) -> String {
        match self.element(id) {
            Some(elem) => {
                let mut out = String::new();
                write_start_tag(&mut out, elem);
                out
            }
            None => String::new(),
        }
    }

    /// Serialise a node and its subtree as HTML
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(&mut out, id);
        out
    }

    fn write_html(&self, out: &mut String, id: NodeId) {
        let mut stack = vec![Emit::Node(id)];
        while let Some(step) = stack.pop() {
            let id = match step {
                Emit::Node(id) => id,
                Emit::Raw(id) => {
                    if let Some(text) = self.get(id).and_then(Node::as_text) {
                        out.push_str(text);
                    }
                    continue;
                }
                Emit::Close(id) => {
                    if let Some(elem) = self.element(id) {
                        out.push_str("</");
                        out.push_str(elem.tag_name());
                        out.push('>');
                    }
                    continue;
                }
            };
            let Some(node) = self.get(id) else { continue };
            match &node.data {
                NodeData::Document => self.push_children(&mut stack, id, false),
                NodeData::Element(elem) => {
                    write_start_tag(out, elem);
                    if is_void(elem.tag_name()) {
                        continue;
                    }
                    stack.push(Emit::Close(id));
                    let raw_text = matches!(elem.tag_name(), "style" | "script");
                    self.push_children(&mut stack, id, raw_text);
                }
                NodeData::Text(text) => escape_into(out, text, false),
                NodeData::Comment(text) => {
                    out.push_str("<!--");
                    out.push_str(text);
                    out.push_str("-->");
                }
            }
        }
    }

    /// Queue children so they pop in document order
    fn push_children(&self, stack: &mut Vec<Emit>, id: NodeId, raw_text: bool) {
        let children: Vec<NodeId> = self.children(id).collect();
        stack.extend(children.into_iter().rev().map(|child| {
            if raw_text && self.get(child).and_then(Node::as_text).is_some() {
                Emit::Raw(child)
            } else {
                Emit::Node(child)
            }
        }));
    }
}

/// Serialisation step
enum Emit {
    Node(NodeId),
    /// Text child of a raw-text element
    Raw(NodeId),
    Close(NodeId),
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

fn write_start_tag(out: &mut String, elem: &ElementData) {
    out.push('<');
    out.push_str(elem.tag_name());
    for attr in elem.attrs() {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_into(out, &attr.value, true);
        out.push('"');
    }
    out.push('>');
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;
        self.next = node.next_sibling;
        Some(current)
    }
}

/// Pre-order iterator over descendants
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        let children: Vec<NodeId> = self.tree.children(current).collect();
        self.stack.extend(children.into_iter().rev());
        Some(current)
    }
}
