//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree used as the host for element construction:
//! namespace-aware elements, attributes, inline style, class list,
//! dataset, typed DOM properties and event listeners.

mod node;
mod tree;
mod document;
mod attributes;
mod classlist;
mod dataset;
mod style;
mod events;
mod properties;
mod operations;

pub use node::{Node, NodeData, NodeType, ElementData};
pub use tree::{DomTree, Children};
pub use document::Document;
pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use dataset::DOMStringMap;
pub use style::StyleDeclaration;
pub use events::{Event, EventCallback, ListenerId};
pub use properties::{PropertyValue, PropertyKind, PropertyDef};
pub use operations::{DomError, DomResult};

/// HTML namespace URI
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
