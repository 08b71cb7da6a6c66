//! Children normalization
//!
//! Nested children reduce to a flat list of text and node appends.

use anyhow::Result;
use fos_dom::{Document, NodeId};

use crate::Value;

/// One append operation
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Node(NodeId),
}

/// Flatten children in order. `undefined`, `null` and booleans are skipped;
/// every number (including 0) becomes text.
pub fn flatten_children(children: &[Value]) -> Vec<Child> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        flatten_into(child, &mut out);
    }
    out
}

fn flatten_into(value: &Value, out: &mut Vec<Child>) {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) => {}
        Value::Str(text) => out.push(Child::Text(text.clone())),
        Value::Node(id) => out.push(Child::Node(*id)),
        Value::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(Child::Text(other.to_string())),
    }
}

/// Append flattened children to `parent`. Existing nodes are moved.
pub fn append_children(doc: &mut Document, parent: NodeId, children: &[Value]) -> Result<()> {
    for child in flatten_children(children) {
        let node = match child {
            Child::Text(text) => doc.create_text_node(&text),
            Child::Node(node) => node,
        };
        doc.append_child(parent, node)?;
    }
    Ok(())
}
