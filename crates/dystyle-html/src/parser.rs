//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to our DOM format.

use dystyle_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty();
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root)?;

        // Find html, head, body elements
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom tree to our DOM format
    ///
    /// Walks with an explicit stack so nesting depth is bounded by the heap.
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        let mut stack: Vec<(Handle, NodeId)> = vec![(handle.clone(), parent)];
        while let Some((handle, parent)) = stack.pop() {
            let children_parent = match &handle.data {
                RcNodeData::Document => parent,
                RcNodeData::Text { contents } => {
                    let text = contents.borrow().to_string();
                    if !text.trim().is_empty() {
                        let id = tree.create_text(&text);
                        tree.append_child(parent, id)?;
                    }
                    continue;
                }
                RcNodeData::Comment { contents } => {
                    let id = tree.create_comment(&contents.to_string());
                    tree.append_child(parent, id)?;
                    continue;
                }
                RcNodeData::Element { name, attrs, .. } => {
                    let id = tree.create_element(&name.local);
                    for attr in attrs.borrow().iter() {
                        tree.set_attribute(id, &attr.name.local, &attr.value)?;
                    }
                    tree.append_child(parent, id)?;
                    id
                }
                // Doctypes and processing instructions carry nothing the compiler reads
                RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => continue,
            };
            for child in handle.children.borrow().iter().rev() {
                stack.push((child.clone(), children_parent));
            }
        }
        Ok(())
    }
}
