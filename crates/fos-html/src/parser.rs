//! Fragment parsing for innerHTML
//!
//! Uses html5ever's fragment algorithm with the target element as context,
//! so table rows, select options and foreign content parse the way a
//! browser would, then copies the result into a fOS `Document`.

use fos_dom::{Document, NodeId, HTML_NAMESPACE};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_fragment as parse_html_fragment, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;

/// HTML5 fragment parser
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse markup as the content of a `namespace`/`local_name` element,
    /// returning detached nodes owned by `doc` in document order
    pub fn parse_fragment(
        &self,
        doc: &mut Document,
        namespace: &str,
        local_name: &str,
        markup: &str,
    ) -> Result<Vec<NodeId>, HtmlError> {
        tracing::debug!("Parsing HTML fragment ({} bytes) in <{}>", markup.len(), local_name);

        let context = QualName::new(None, Namespace::from(namespace), LocalName::from(local_name));
        let dom = parse_html_fragment(RcDom::default(), Default::default(), context, vec![], false)
            .from_utf8()
            .read_from(&mut markup.as_bytes())?;

        // The fragment algorithm parents the result under a synthetic <html>
        let mut roots = Vec::new();
        for root in dom.document.children.borrow().iter() {
            for child in root.children.borrow().iter() {
                if let Some(id) = self.convert_node(child, doc)? {
                    roots.push(id);
                }
            }
        }

        tracing::debug!("Parsed {} top-level nodes", roots.len());
        Ok(roots)
    }

    /// Convert an RcDom node (and its subtree) into a detached fOS node
    fn convert_node(&self, handle: &Handle, doc: &mut Document) -> Result<Option<NodeId>, HtmlError> {
        let id = match &handle.data {
            RcNodeData::Text { contents } => doc.create_text_node(&contents.borrow()),
            RcNodeData::Comment { contents } => doc.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = doc.create_element_ns(&name.ns, &name.local);
                for attr in attrs.borrow().iter() {
                    let attr_name = match &attr.name.prefix {
                        Some(prefix) => format!("{}:{}", &**prefix, &*attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    doc.set_attribute(id, &attr_name, &attr.value)?;
                }
                for child in handle.children.borrow().iter() {
                    if let Some(child_id) = self.convert_node(child, doc)? {
                        doc.append_child(id, child_id)?;
                    }
                }
                id
            }
            RcNodeData::Document | RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {
                return Ok(None);
            }
        };
        Ok(Some(id))
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse markup as `<body>` content into detached nodes owned by `doc`
pub fn parse_fragment(doc: &mut Document, markup: &str) -> Result<Vec<NodeId>, HtmlError> {
    HtmlParser::new().parse_fragment(doc, HTML_NAMESPACE, "body", markup)
}

/// Parse markup in the context of element `context`; non-elements parse as `<body>` content
pub fn parse_fragment_in(doc: &mut Document, context: NodeId, markup: &str) -> Result<Vec<NodeId>, HtmlError> {
    let (namespace, local_name) = match (doc.namespace_uri(context), doc.local_name(context)) {
        (Some(ns), Some(local)) => (ns.to_string(), local.to_string()),
        _ => (HTML_NAMESPACE.to_string(), "body".to_string()),
    };
    HtmlParser::new().parse_fragment(doc, &namespace, &local_name, markup)
}

/// `element.innerHTML = markup`: replaces the element's children with the parsed nodes
pub fn set_inner_html(doc: &mut Document, node: NodeId, markup: &str) -> Result<(), HtmlError> {
    let nodes = parse_fragment_in(doc, node, markup)?;
    doc.tree_mut().remove_all_children(node)?;
    for child in nodes {
        doc.append_child(node, child)?;
    }
    Ok(())
}
