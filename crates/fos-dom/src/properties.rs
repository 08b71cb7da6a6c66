//! Typed DOM Properties
//!
//! IDL properties of HTML elements (`spellcheck`, `tabIndex`, `htmlFor`,
//! `value`...). Most reflect an attribute with a typed getter; a few keep
//! state on the element that is not visible as an attribute.

use std::fmt;

use crate::{Document, DomError, DomResult, ElementData, NodeId};

/// Typed property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl PropertyValue {
    /// Boolean conversion used by boolean-typed properties
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
        }
    }

    fn as_integer(&self) -> i64 {
        match self {
            Self::Bool(b) => i64::from(*b),
            Self::Number(n) if n.is_finite() => n.trunc() as i64,
            Self::Number(_) => 0,
            Self::Str(s) => s.trim().parse::<f64>().map_or(0, |n| n.trunc() as i64),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// How a property maps onto the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// String reflecting the named attribute
    Reflect(&'static str),
    /// Presence of the named attribute
    Boolean(&'static str),
    /// Integer reflecting the named attribute
    Integer(&'static str),
    /// `"true"`/`"false"` enumerated attribute read back as a boolean
    TrueFalse(&'static str),
    /// Internal element state, not reflected (input value, checkedness)
    State,
}

impl PropertyKind {
    /// Attribute written by this property, if any
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Reflect(a) | Self::Boolean(a) | Self::Integer(a) | Self::TrueFalse(a) => Some(a),
            Self::State => None,
        }
    }
}

/// Property definition
#[derive(Debug)]
pub struct PropertyDef {
    pub name: &'static str,
    /// Elements that own the property; empty means every HTML element
    pub tags: &'static [&'static str],
    pub kind: PropertyKind,
}

const FORM_CONTROLS: &[&str] = &["button", "fieldset", "input", "optgroup", "option", "select", "textarea"];
const MEDIA: &[&str] = &["audio", "video"];

macro_rules! prop {
    ($name:literal, $kind:expr) => {
        PropertyDef { name: $name, tags: &[], kind: $kind }
    };
    ($name:literal, $tags:expr, $kind:expr) => {
        PropertyDef { name: $name, tags: $tags, kind: $kind }
    };
}

use PropertyKind::{Boolean, Integer, Reflect, State, TrueFalse};

/// Known properties. First match by (name, tag) wins.
pub static PROPERTIES: &[PropertyDef] = &[
    // HTMLElement
    prop!("id", Reflect("id")),
    prop!("title", Reflect("title")),
    prop!("lang", Reflect("lang")),
    prop!("dir", Reflect("dir")),
    prop!("accessKey", Reflect("accesskey")),
    prop!("slot", Reflect("slot")),
    prop!("hidden", Boolean("hidden")),
    prop!("inert", Boolean("inert")),
    prop!("tabIndex", Integer("tabindex")),
    prop!("spellcheck", TrueFalse("spellcheck")),
    prop!("draggable", TrueFalse("draggable")),
    prop!("contentEditable", Reflect("contenteditable")),
    // Links and resources
    prop!("href", &["a", "area", "base", "link"], Reflect("href")),
    prop!("target", &["a", "area", "base", "form"], Reflect("target")),
    prop!("rel", &["a", "area", "link"], Reflect("rel")),
    prop!("download", &["a", "area"], Reflect("download")),
    prop!("src", &["audio", "embed", "iframe", "img", "input", "script", "source", "track", "video"], Reflect("src")),
    prop!("alt", &["area", "img", "input"], Reflect("alt")),
    prop!("width", &["canvas", "embed", "iframe", "img", "input", "video"], Integer("width")),
    prop!("height", &["canvas", "embed", "iframe", "img", "input", "video"], Integer("height")),
    // Forms
    prop!("name", &["button", "fieldset", "form", "iframe", "input", "meta", "output", "select", "textarea"], Reflect("name")),
    prop!("type", &["button", "input", "link", "ol", "script", "source", "style"], Reflect("type")),
    prop!("value", &["input", "select", "textarea"], State),
    prop!("value", &["button", "data", "li", "meter", "option", "output", "param", "progress"], Reflect("value")),
    prop!("defaultValue", &["input"], Reflect("value")),
    prop!("checked", &["input"], State),
    prop!("defaultChecked", &["input"], Boolean("checked")),
    prop!("disabled", FORM_CONTROLS, Boolean("disabled")),
    prop!("selected", &["option"], Boolean("selected")),
    prop!("multiple", &["input", "select"], Boolean("multiple")),
    prop!("required", &["input", "select", "textarea"], Boolean("required")),
    prop!("readOnly", &["input", "textarea"], Boolean("readonly")),
    prop!("autofocus", FORM_CONTROLS, Boolean("autofocus")),
    prop!("placeholder", &["input", "textarea"], Reflect("placeholder")),
    prop!("maxLength", &["input", "textarea"], Integer("maxlength")),
    prop!("minLength", &["input", "textarea"], Integer("minlength")),
    prop!("pattern", &["input"], Reflect("pattern")),
    prop!("min", &["input", "meter"], Reflect("min")),
    prop!("max", &["input", "meter", "progress"], Reflect("max")),
    prop!("step", &["input"], Reflect("step")),
    prop!("accept", &["input"], Reflect("accept")),
    prop!("rows", &["textarea"], Integer("rows")),
    prop!("cols", &["textarea"], Integer("cols")),
    prop!("htmlFor", &["label", "output"], Reflect("for")),
    prop!("action", &["form"], Reflect("action")),
    prop!("method", &["form"], Reflect("method")),
    prop!("noValidate", &["form"], Boolean("novalidate")),
    // Tables
    prop!("colSpan", &["td", "th"], Integer("colspan")),
    prop!("rowSpan", &["td", "th"], Integer("rowspan")),
    // Interactive and media
    prop!("open", &["details", "dialog"], Boolean("open")),
    prop!("controls", MEDIA, Boolean("controls")),
    prop!("autoplay", MEDIA, Boolean("autoplay")),
    prop!("loop", MEDIA, Boolean("loop")),
    prop!("muted", MEDIA, State),
];

/// Look up the property `name` for an element
pub fn lookup(elem: &ElementData, name: &str) -> Option<&'static PropertyDef> {
    if !elem.is_html() {
        return None;
    }
    PROPERTIES
        .iter()
        .find(|def| def.name == name && (def.tags.is_empty() || def.tags.contains(&elem.local_name.as_str())))
}

impl Document {
    /// Whether the element exposes a settable property `name`
    pub fn has_property(&self, node: NodeId, name: &str) -> bool {
        self.element(node).is_ok_and(|elem| lookup(elem, name).is_some())
    }

    /// Assign a typed property
    pub fn set_property(&mut self, node: NodeId, name: &str, value: PropertyValue) -> DomResult<()> {
        let elem = self.element_mut(node)?;
        let def = lookup(elem, name).ok_or_else(|| DomError::UnknownProperty {
            node,
            name: name.to_string(),
        })?;

        match def.kind {
            Reflect(attr) => elem.set_attr(attr, &value.to_string()),
            Integer(attr) => elem.set_attr(attr, &value.as_integer().to_string()),
            Boolean(attr) => {
                if value.truthy() {
                    elem.set_attr(attr, "");
                } else {
                    elem.remove_attr(attr);
                }
            }
            TrueFalse(attr) => elem.set_attr(attr, if value.truthy() { "true" } else { "false" }),
            State => {
                let value = match name {
                    "checked" | "muted" => PropertyValue::Bool(value.truthy()),
                    _ => PropertyValue::Str(value.to_string()),
                };
                elem.state.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Read a typed property; `None` when the element has no such property
    pub fn get_property(&self, node: NodeId, name: &str) -> Option<PropertyValue> {
        let elem = self.element(node).ok()?;
        let def = lookup(elem, name)?;
        let value = match def.kind {
            Reflect(attr) => PropertyValue::Str(elem.get_attr(attr).unwrap_or("").to_string()),
            Integer(attr) => {
                let n = elem.get_attr(attr).and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0);
                PropertyValue::Number(n as f64)
            }
            Boolean(attr) => PropertyValue::Bool(elem.get_attr(attr).is_some()),
            // Unset spellcheck/draggable fall back to the element default
            TrueFalse(attr) => PropertyValue::Bool(match elem.get_attr(attr) {
                Some(v) if v.eq_ignore_ascii_case("false") => false,
                Some(v) if v.eq_ignore_ascii_case("true") || v.is_empty() => true,
                _ => attr == "spellcheck" || (attr == "draggable" && matches!(elem.local_name.as_str(), "img" | "a")),
            }),
            State => match elem.state.get(name) {
                Some(v) => v.clone(),
                None => match name {
                    "checked" => PropertyValue::Bool(elem.get_attr("checked").is_some()),
                    "muted" => PropertyValue::Bool(false),
                    _ => PropertyValue::Str(elem.get_attr("value").unwrap_or("").to_string()),
                },
            },
        };
        Some(value)
    }

    /// Reset a property to its default (removes the reflected attribute or state)
    pub fn reset_property(&mut self, node: NodeId, name: &str) -> DomResult<()> {
        let elem = self.element_mut(node)?;
        let Some(def) = lookup(elem, name) else {
            return Ok(());
        };
        match def.kind.attribute() {
            Some(attr) => {
                elem.remove_attr(attr);
            }
            None => {
                elem.state.remove(name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SVG_NAMESPACE;

    #[test]
    fn test_spellcheck_is_boolean() {
        let mut doc = Document::new();
        for tag in ["input", "textarea"] {
            let el = doc.create_element(tag);
            doc.set_property(el, "spellcheck", PropertyValue::Bool(false)).unwrap();
            assert_eq!(doc.get_property(el, "spellcheck"), Some(PropertyValue::Bool(false)));
            assert_eq!(doc.get_attribute(el, "spellcheck"), Some("false"));

            doc.set_property(el, "spellcheck", PropertyValue::Bool(true)).unwrap();
            assert_eq!(doc.get_property(el, "spellcheck"), Some(PropertyValue::Bool(true)));
        }
    }

    #[test]
    fn test_property_scoped_to_tags() {
        let mut doc = Document::new();
        let label = doc.create_element("label");
        let div = doc.create_element("div");
        assert!(doc.has_property(label, "htmlFor"));
        assert!(!doc.has_property(div, "htmlFor"));
        assert!(doc.has_property(div, "title"));

        doc.set_property(label, "htmlFor", PropertyValue::Str("name".into())).unwrap();
        assert_eq!(doc.get_attribute(label, "for"), Some("name"));

        assert!(doc.set_property(div, "htmlFor", PropertyValue::Str("x".into())).is_err());
    }

    #[test]
    fn test_svg_has_no_html_properties() {
        let mut doc = Document::new();
        let rect = doc.create_element_ns(SVG_NAMESPACE, "rect");
        assert!(!doc.has_property(rect, "title"));
    }

    #[test]
    fn test_state_not_reflected() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_property(input, "value", PropertyValue::Str("typed".into())).unwrap();
        doc.set_property(input, "checked", PropertyValue::Number(1.0)).unwrap();

        assert!(!doc.has_attribute(input, "value"));
        assert_eq!(doc.get_property(input, "value"), Some(PropertyValue::Str("typed".into())));
        assert_eq!(doc.get_property(input, "checked"), Some(PropertyValue::Bool(true)));

        doc.reset_property(input, "value").unwrap();
        assert_eq!(doc.get_property(input, "value"), Some(PropertyValue::Str(String::new())));
    }

    #[test]
    fn test_integer_and_boolean_reflection() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_property(div, "tabIndex", PropertyValue::Str("3".into())).unwrap();
        doc.set_property(div, "hidden", PropertyValue::Bool(true)).unwrap();

        assert_eq!(doc.get_attribute(div, "tabindex"), Some("3"));
        assert_eq!(doc.get_attribute(div, "hidden"), Some(""));
        assert_eq!(doc.get_property(div, "tabIndex"), Some(PropertyValue::Number(3.0)));

        doc.set_property(div, "hidden", PropertyValue::Bool(false)).unwrap();
        assert!(!doc.has_attribute(div, "hidden"));
    }
}
