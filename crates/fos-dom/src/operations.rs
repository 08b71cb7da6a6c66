//! DOM Node Operations
//!
//! Errors raised by tree mutation and element access.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found in the arena
    #[error("node {0} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("cannot insert node {child} into {parent}: hierarchy request error")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    /// Operation needs an element
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),
    /// Node type cannot be inserted (e.g. the document node)
    #[error("node {0} cannot be inserted")]
    InvalidNodeType(NodeId),
    /// Node is not a child of the given parent
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    /// Property is not defined for the element
    #[error("element {node} has no property `{name}`")]
    UnknownProperty { node: NodeId, name: String },
}
