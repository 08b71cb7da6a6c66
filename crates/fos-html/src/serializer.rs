//! Markup serialization
//!
//! Follows the HTML fragment serialization rules: void elements have no
//! end tag, foreign elements are never self-closed, text is escaped
//! except inside raw text elements.

use fos_dom::{Document, NodeData, NodeId};

/// Elements serialized without an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are written verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext"];

/// Which characters need escaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    Text,
    Attribute,
    Raw,
}

/// Fragment serializer behind `innerHTML` and `outerHTML`
#[derive(Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Markup of the children only
    pub fn serialize_inner(&self, doc: &Document, node_id: NodeId) -> String {
        let mut out = String::new();
        self.write_children(doc, node_id, Escape::Text, &mut out);
        out
    }

    /// Markup of the node itself and its subtree
    pub fn serialize_outer(&self, doc: &Document, node_id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(doc, node_id, Escape::Text, &mut out);
        out
    }

    fn write_node(&self, doc: &Document, node_id: NodeId, text_mode: Escape, out: &mut String) {
        let Some(node) = doc.node(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => self.write_children(doc, node_id, Escape::Text, out),
            NodeData::Text(text) => escape_into(text, text_mode, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(elem) => {
                let name = elem.local_name.as_str();
                out.push('<');
                out.push_str(name);
                for attr in elem.attrs.iter() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_into(&attr.value, Escape::Attribute, out);
                    out.push('"');
                }
                out.push('>');

                let html = elem.is_html();
                if html && VOID_ELEMENTS.contains(&name) {
                    return;
                }
                let mode = if html && RAW_TEXT_ELEMENTS.contains(&name) { Escape::Raw } else { Escape::Text };
                self.write_children(doc, node_id, mode, out);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }

    fn write_children(&self, doc: &Document, parent: NodeId, mode: Escape, out: &mut String) {
        for child in doc.child_nodes(parent) {
            self.write_node(doc, child, mode, out);
        }
    }
}

fn escape_into(value: &str, mode: Escape, out: &mut String) {
    if mode == Escape::Raw {
        out.push_str(value);
        return;
    }
    for c in value.chars() {
        let entity = match (c, mode) {
            ('&', _) => "&amp;",
            ('\u{a0}', _) => "&nbsp;",
            ('<', Escape::Text) => "&lt;",
            ('>', Escape::Text) => "&gt;",
            ('"', Escape::Attribute) => "&quot;",
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push_str(entity);
    }
}

/// `element.innerHTML`
pub fn inner_html(doc: &Document, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(doc, node_id)
}

/// `element.outerHTML`
pub fn outer_html(doc: &Document, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(doc, node_id)
}
