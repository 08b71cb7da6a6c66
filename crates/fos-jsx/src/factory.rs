//! Element Factory
//!
//! `create_element` turns a tag, props and children into a node in the
//! caller's document. String tags go through namespace resolution, prop
//! application and children append; components render themselves; an
//! existing node is passed through. A `ref` callback then receives the
//! result exactly once.

use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use fos_dom::{Document, NodeId};

use crate::children::append_children;
use crate::namespace::{resolve_with, CreationMode};
use crate::props::apply_props_with;
use crate::{Config, Props, Value};

/// Function component
pub trait Component {
    /// Render into `doc`. `props` always carries a `children` list.
    fn render(&self, doc: &mut Document, props: Props) -> Result<NodeId>;
}

impl<F> Component for F
where
    F: Fn(&mut Document, Props) -> Result<NodeId>,
{
    fn render(&self, doc: &mut Document, props: Props) -> Result<NodeId> {
        self(doc, props)
    }
}

/// What to construct
#[derive(Clone)]
pub enum Tag {
    /// Element tag name
    Name(String),
    /// Function component
    Component(Rc<dyn Component>),
    /// Existing node, returned as is
    Node(NodeId),
}

impl Tag {
    /// Wrap a function component
    pub fn component<F>(render: F) -> Self
    where
        F: Fn(&mut Document, Props) -> Result<NodeId> + 'static,
    {
        Self::Component(Rc::new(render))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Node(id) => f.debug_tuple("Node").field(id).finish(),
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<NodeId> for Tag {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<Rc<dyn Component>> for Tag {
    fn from(component: Rc<dyn Component>) -> Self {
        Self::Component(component)
    }
}

/// Element construction engine
#[derive(Debug, Clone, Default)]
pub struct Jsx {
    config: Config,
}

impl Jsx {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a node from a tag, props and children
    pub fn create_element(
        &self,
        doc: &mut Document,
        tag: impl Into<Tag>,
        mut props: Props,
        children: Vec<Value>,
    ) -> Result<NodeId> {
        let ref_callback = props.remove("ref");

        let node = match tag.into() {
            Tag::Component(component) => {
                props.insert("children", Value::List(children));
                tracing::debug!("rendering component with {} props", props.len());
                component.render(doc, props)?
            }
            Tag::Node(node) => node,
            Tag::Name(name) => self.build_element(doc, &name, &props, &children)?,
        };

        if let Some(Value::Ref(callback)) = ref_callback {
            callback(doc, node);
        }
        Ok(node)
    }

    fn build_element(&self, doc: &mut Document, tag: &str, props: &Props, children: &[Value]) -> Result<NodeId> {
        let explicit_namespace = props.get("namespaceURI").and_then(Value::as_str);
        let resolution = resolve_with(tag, explicit_namespace, self.config.svg);

        let node = match resolution.mode {
            CreationMode::Html => doc.create_element(tag),
            CreationMode::Namespaced => doc.create_element_ns(resolution.namespace_uri, tag),
        };
        tracing::trace!("created <{}> as node {} in {}", tag, node, resolution.namespace_uri);

        apply_props_with(doc, node, props, &self.config)?;
        append_children(doc, node, children)?;
        Ok(node)
    }
}

/// Build a node with the default configuration
pub fn create_element<T: Into<Tag>>(doc: &mut Document, tag: T, props: Props, children: Vec<Value>) -> Result<NodeId> {
    Jsx::default().create_element(doc, tag, props, children)
}
