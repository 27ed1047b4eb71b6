//! DOM Node
//!
//! Nodes link to each other through `NodeId`s instead of pointers; the
//! tree owns all of them.

use crate::{ClassList, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::with_data(NodeData::Comment(content.to_string()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Whether this node kind may have children
    pub fn can_have_children(&self) -> bool {
        matches!(self.data, NodeData::Document | NodeData::Element(_))
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
///
/// The `class` attribute is mirrored by `classes`; every mutation of either
/// goes through this type so the two never disagree.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    tag: String,
    /// Attributes in source order
    attrs: Vec<Attribute>,
    /// Parsed class list
    classes: ClassList,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: ClassList::new(),
        }
    }

    /// Lowercase tag name
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute (names are matched case-insensitively, stored lowercase)
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if name == "class" {
            self.classes = ClassList::from_string(value);
        }
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name,
                value: value.to_string(),
            }),
        }
    }

    /// Remove an attribute; returns the old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        if name == "class" {
            self.classes = ClassList::new();
        }
        Some(self.attrs.remove(pos).value)
    }

    /// Attributes in source order
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Parsed class list
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Add a class token, keeping the `class` attribute in sync
    pub fn add_class(&mut self, token: &str) -> bool {
        if !self.classes.add(token) {
            return false;
        }
        self.sync_class_attr();
        true
    }

    /// Remove a class token, keeping the `class` attribute in sync
    pub fn remove_class(&mut self, token: &str) -> bool {
        if !self.classes.remove(token) {
            return false;
        }
        self.sync_class_attr();
        true
    }

    fn sync_class_attr(&mut self) {
        let value = self.classes.value();
        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute {
                name: "class".to_string(),
                value,
            }),
        }
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        let elem = ElementData::new("DIV");
        assert_eq!(elem.tag_name(), "div");
    }

    #[test]
    fn test_class_attr_parses_list() {
        let mut elem = ElementData::new("p");
        elem.set_attr("class", "a  b");
        assert_eq!(elem.classes().len(), 2);
        assert_eq!(elem.get_attr("class"), Some("a  b"));
    }

    #[test]
    fn test_add_class_syncs_attr() {
        let mut elem = ElementData::new("p");
        elem.set_attr("class", "lcsColor_red");
        assert!(elem.add_class("_Color_red"));
        assert_eq!(elem.get_attr("class"), Some("lcsColor_red _Color_red"));
        assert!(!elem.add_class("_Color_red"));
    }

    #[test]
    fn test_add_class_creates_attr() {
        let mut elem = ElementData::new("span");
        assert!(!elem.has_attr("class"));
        elem.add_class("x");
        assert_eq!(elem.get_attr("class"), Some("x"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new("p");
        elem.set_attr("data-dystyle", "false");
        assert_eq!(elem.remove_attr("data-dystyle").as_deref(), Some("false"));
        assert!(!elem.has_attr("data-dystyle"));
    }
}
