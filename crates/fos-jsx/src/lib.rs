//! fOS JSX - Declarative element construction
//!
//! Builds real `fos-dom` nodes from a tag, a prop bag and nested children
//! in one synchronous call. There is no virtual tree: every call creates,
//! decorates and attaches nodes directly.
//!
//! # Example
//! ```rust,ignore
//! use fos_jsx::{h, props, children, Value};
//! use fos_dom::Document;
//!
//! let mut doc = Document::new();
//! let button = h(&mut doc, "button", props! {
//!     "class" => vec!["btn", "primary"],
//!     "disabled" => false,
//!     "onClick" => Value::listener(|_, _| println!("clicked")),
//! }, children!["Save"])?;
//! ```

mod config;
mod factory;
mod value;
pub mod children;
pub mod class;
pub mod namespace;
pub mod props;
pub mod tags;

pub use config::Config;
pub use factory::{create_element, Component, Jsx, Tag};
pub use factory::create_element as h;
pub use value::{Props, RefCallback, Value};
pub use tags::{TagFn, TagTable, DOM};
pub use fos_dom::{HTML_NAMESPACE, SVG_NAMESPACE};

// Re-export host crates for callers that only depend on this one
pub use fos_dom as dom;
pub use fos_html as html;

/// Build a [`Props`] bag in insertion order
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $( props.insert($key, $value); )+
        props
    }};
}

/// Build a children list, converting each item into a [`Value`]
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($child)),*];
        children
    }};
}
