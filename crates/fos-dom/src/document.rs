//! Document - High-level document API
//!
//! Node factory plus the element accessors used by builders and tests.

use crate::{
    DOMStringMap, DOMTokenList, DomError, DomResult, DomTree, ElementData, Node, NodeId,
    NodeType, StyleDeclaration, HTML_NAMESPACE,
};

/// Document owning every node it creates
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    pub(crate) next_listener_id: u64,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            next_listener_id: 0,
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    // ------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------

    /// `createElement`: HTML namespace, name lower-cased
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let local = tag.to_ascii_lowercase();
        tracing::trace!("createElement <{}>", local);
        self.tree.create_element(HTML_NAMESPACE, &local)
    }

    /// `createElementNS`: name kept as given, prefix dropped
    pub fn create_element_ns(&mut self, namespace: &str, qualified_name: &str) -> NodeId {
        let local = qualified_name
            .split_once(':')
            .map_or(qualified_name, |(_, local)| local);
        tracing::trace!("createElementNS {} <{}>", namespace, local);
        self.tree.create_element(namespace, local)
    }

    /// `createTextNode`
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    /// `createComment`
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.tree.create_comment(text)
    }

    // ------------------------------------------------------------------
    // Tree access
    // ------------------------------------------------------------------

    /// `appendChild`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    /// `removeChild`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.remove_child(parent, child)
    }

    /// Get a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id)
    }

    /// Element data, or an error for non-elements
    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.tree.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    /// Mutable element data, or an error for non-elements
    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.tree
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        self.tree.get(id).map(Node::node_type)
    }

    pub fn parent_node(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id).map(|n| n.first_child).filter(|c| c.is_valid())
    }

    /// `childNodes`
    pub fn child_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.tree.children(id).map(|(id, _)| id).collect()
    }

    /// `children` (element children only)
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .children(id)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.tree
            .children(id)
            .find(|(_, n)| n.is_element())
            .map(|(id, _)| id)
    }

    pub fn child_element_count(&self, id: NodeId) -> usize {
        self.tree.children(id).filter(|(_, n)| n.is_element()).count()
    }

    /// `tagName` (upper-cased for HTML elements)
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        self.element(id).ok().map(ElementData::tag_name)
    }

    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|e| e.local_name.as_str())
    }

    pub fn namespace_uri(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|e| e.namespace.as_str())
    }

    /// Descendant elements with the given local name (`*` matches all)
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&id| {
                self.element(id).is_ok_and(|e| {
                    tag == "*"
                        || if e.is_html() {
                            e.local_name.eq_ignore_ascii_case(tag)
                        } else {
                            e.local_name == tag
                        }
                })
            })
            .collect()
    }

    /// `querySelectorAll` restricted to type selectors
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        self.get_elements_by_tag_name(root, selector.trim())
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// `textContent` getter
    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    /// `textContent` setter: replaces all children with one text node.
    /// The text is stored literally and never parsed.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if let Some(Node { data: crate::NodeData::Text(content), .. }) = self.tree.get_mut(id) {
            *content = text.to_string();
            return Ok(());
        }
        self.tree.remove_all_children(id)?;
        if !text.is_empty() {
            let child = self.tree.create_text(text);
            self.tree.append_child(id, child)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute; removing a missing attribute is not an error
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        self.element_mut(id)?.remove_attr(name);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Class, dataset, style (all reflected through attributes)
    // ------------------------------------------------------------------

    /// `className` getter
    pub fn class_name(&self, id: NodeId) -> &str {
        self.get_attribute(id, "class").unwrap_or("")
    }

    /// `className` setter
    pub fn set_class_name(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        self.set_attribute(id, "class", value)
    }

    /// `classList` snapshot
    pub fn class_list(&self, id: NodeId) -> DOMTokenList {
        DOMTokenList::from_string(self.class_name(id))
    }

    /// `dataset` snapshot
    pub fn dataset(&self, id: NodeId) -> DOMStringMap {
        match self.element(id) {
            Ok(elem) => DOMStringMap::from_attributes(elem.attrs.iter()),
            Err(_) => DOMStringMap::new(),
        }
    }

    /// `dataset[key] = value`
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) -> DomResult<()> {
        self.set_attribute(id, &DOMStringMap::to_attribute_name(key), value)
    }

    /// `style` snapshot
    pub fn style(&self, id: NodeId) -> StyleDeclaration {
        StyleDeclaration::parse(self.get_attribute(id, "style").unwrap_or(""))
    }

    /// `style.cssText = text`, stored verbatim
    pub fn set_style_text(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        self.set_attribute(id, "style", text)
    }

    /// `style[name] = value`
    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let mut style = self.style(id);
        style.set_property(name, value);
        self.write_style(id, &style)
    }

    /// `style.removeProperty(name)`
    pub fn remove_style_property(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let mut style = self.style(id);
        if style.remove_property(name).is_some() {
            self.write_style(id, &style)?;
        }
        Ok(())
    }

    fn write_style(&mut self, id: NodeId, style: &StyleDeclaration) -> DomResult<()> {
        if style.is_empty() {
            self.remove_attribute(id, "style")
        } else {
            self.set_attribute(id, "style", &style.css_text())
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
