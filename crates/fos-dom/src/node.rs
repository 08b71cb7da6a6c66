//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the arena rather than
//! pointers, so a node can be moved between parents without reallocation.

use std::collections::HashMap;

use crate::{NamedNodeMap, NodeId, HTML_NAMESPACE};
use crate::events::RegisteredListener;
use crate::properties::PropertyValue;

/// Arena slot: tree links plus the payload
#[derive(Debug)]
pub struct Node {
    pub parent: NodeId,
    pub first_child: NodeId,
    /// Kept so appending does not walk the sibling chain
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

impl From<NodeData> for Node {
    fn from(data: NodeData) -> Self {
        Node {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }
}

impl Node {
    pub fn element(namespace: &str, local_name: &str) -> Self {
        NodeData::Element(ElementData::new(namespace, local_name)).into()
    }

    pub fn text(content: String) -> Self {
        NodeData::Text(content).into()
    }

    pub fn comment(content: String) -> Self {
        NodeData::Comment(content).into()
    }

    /// The tree root; there is exactly one per `DomTree`
    pub fn document() -> Self {
        NodeData::Document.into()
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        self.as_element().is_some()
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        if let NodeData::Element(elem) = &self.data { Some(elem) } else { None }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeData::Element(elem) = &mut self.data { Some(elem) } else { None }
    }

    /// Character data of a text node; comments are not included
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        if let NodeData::Text(text) = &self.data { Some(text) } else { None }
    }

    pub fn node_type(&self) -> NodeType {
        match &self.data {
            NodeData::Document => NodeType::Document,
            NodeData::Element(_) => NodeType::Element,
            NodeData::Text(_) => NodeType::Text,
            NodeData::Comment(_) => NodeType::Comment,
        }
    }
}

/// Node type, with the numeric codes of `Node.nodeType`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
}

#[derive(Debug)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Namespace, name, attributes and listeners of an element
#[derive(Debug)]
pub struct ElementData {
    pub namespace: String,
    /// Case preserved for foreign elements
    pub local_name: String,
    /// In insertion order
    pub attrs: NamedNodeMap,
    /// Property state not reflected to attributes (input value, checkedness)
    pub(crate) state: HashMap<String, PropertyValue>,
    pub(crate) listeners: Vec<RegisteredListener>,
}

impl ElementData {
    pub fn new(namespace: &str, local_name: &str) -> Self {
        ElementData {
            namespace: namespace.into(),
            local_name: local_name.into(),
            attrs: NamedNodeMap::new(),
            state: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn is_html(&self) -> bool {
        self.namespace == HTML_NAMESPACE
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.set_attribute(name, value);
    }

    /// Returns whether the attribute was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        self.attrs.remove_named_item(name).is_some()
    }

    /// `Element.tagName`: uppercased for HTML elements only
    pub fn tag_name(&self) -> String {
        if !self.is_html() {
            return self.local_name.clone();
        }
        self.local_name.to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SVG_NAMESPACE;

    #[test]
    fn test_tag_name_case() {
        let div = ElementData::new(HTML_NAMESPACE, "div");
        assert_eq!(div.tag_name(), "DIV");

        let clip = ElementData::new(SVG_NAMESPACE, "clipPath");
        assert_eq!(clip.tag_name(), "clipPath");
    }

    #[test]
    fn test_node_type_codes() {
        assert_eq!(Node::text("x".into()).node_type() as u16, 3);
        assert_eq!(Node::element(HTML_NAMESPACE, "p").node_type() as u16, 1);
        assert_eq!(Node::document().node_type(), NodeType::Document);
    }

    #[test]
    fn test_attr_roundtrip() {
        let mut elem = ElementData::new(HTML_NAMESPACE, "input");
        elem.set_attr("disabled", "");
        assert_eq!(elem.get_attr("disabled"), Some(""));
        assert!(elem.remove_attr("disabled"));
        assert!(!elem.remove_attr("disabled"));
        assert_eq!(elem.get_attr("disabled"), None);
    }
}
