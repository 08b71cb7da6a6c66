//! Attribute Application
//!
//! Each prop key is handled by the first matching rule of `RULES`. Rules
//! are plain functions over the host `Document`; the last one matches every
//! key, so dispatch never falls through.

use anyhow::Result;
use fos_dom::{Document, NodeId, PropertyValue};

use crate::class::class_name;
use crate::{Config, Props, Value};

/// Attributes whose presence means `true`
pub static BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen", "async", "autofocus", "autoplay", "checked", "controls",
    "default", "defer", "disabled", "formnovalidate", "hidden", "inert", "ismap",
    "itemscope", "loop", "multiple", "muted", "nomodule", "novalidate", "open",
    "playsinline", "readonly", "required", "reversed", "selected",
];

/// Keys assigned through a typed DOM property: (key, property, fallback attribute)
pub static TYPED_PROPERTIES: &[(&str, &str, &str)] = &[
    ("spellCheck", "spellcheck", "spellcheck"),
    ("htmlFor", "htmlFor", "for"),
    ("tabIndex", "tabIndex", "tabindex"),
    ("contentEditable", "contentEditable", "contenteditable"),
    ("draggable", "draggable", "draggable"),
    ("value", "value", "value"),
    ("readOnly", "readOnly", "readonly"),
];

/// Keys consumed by the factory, never applied
const RESERVED: &[&str] = &["ref", "namespaceURI", "children"];

type MatchFn = fn(&str, &Value) -> bool;
type ApplyFn = fn(&mut Document, NodeId, &str, &Value, &Config) -> Result<()>;

/// One prop normalization rule
#[derive(Clone, Copy)]
pub struct PropRule {
    pub name: &'static str,
    matches: MatchFn,
    apply: ApplyFn,
}

impl PropRule {
    pub fn matches(&self, key: &str, value: &Value) -> bool {
        (self.matches)(key, value)
    }

    pub fn apply(&self, doc: &mut Document, node: NodeId, key: &str, value: &Value, config: &Config) -> Result<()> {
        (self.apply)(doc, node, key, value, config)
    }
}

impl std::fmt::Debug for PropRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropRule").field("name", &self.name).finish_non_exhaustive()
    }
}

const GENERIC: PropRule = PropRule {
    name: "attribute",
    matches: |_, _| true,
    apply: apply_generic,
};

/// Rules in priority order
pub static RULES: &[PropRule] = &[
    PropRule {
        name: "reserved",
        matches: |key, _| RESERVED.contains(&key),
        apply: |_, _, _, _, _| Ok(()),
    },
    PropRule {
        name: "class",
        matches: |key, _| key == "class" || key == "className",
        apply: apply_class,
    },
    PropRule {
        name: "style",
        matches: |key, _| key == "style",
        apply: apply_style,
    },
    PropRule {
        name: "dataset",
        matches: |key, _| key == "dataset",
        apply: apply_dataset,
    },
    PropRule {
        name: "innerHTML",
        matches: |key, _| key == "innerHTML",
        apply: apply_inner_html,
    },
    PropRule {
        name: "text",
        matches: |key, _| key == "innerText" || key == "textContent",
        apply: apply_text,
    },
    PropRule {
        name: "event",
        matches: |key, value| key.len() > 2 && key.starts_with("on") && matches!(value, Value::Listener(_)),
        apply: apply_event,
    },
    PropRule {
        name: "boolean",
        matches: |key, value| matches!(value, Value::Bool(_)) && is_boolean_attribute(key),
        apply: apply_boolean,
    },
    PropRule {
        name: "property",
        matches: |key, _| typed_property(key).is_some(),
        apply: apply_typed_property,
    },
    PropRule {
        name: "data",
        matches: |key, _| key.starts_with("data-"),
        apply: apply_data_attribute,
    },
    GENERIC,
];

/// The rule that handles `key` with `value`
pub fn rule_for(key: &str, value: &Value) -> &'static PropRule {
    RULES.iter().find(|rule| rule.matches(key, value)).unwrap_or(&GENERIC)
}

/// Known boolean attribute, case-insensitive
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.iter().any(|attr| attr.eq_ignore_ascii_case(name))
}

fn typed_property(key: &str) -> Option<(&'static str, &'static str)> {
    TYPED_PROPERTIES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, property, attribute)| (property, attribute))
}

/// Apply props with the default configuration
pub fn apply_props(doc: &mut Document, node: NodeId, props: &Props) -> Result<()> {
    apply_props_with(doc, node, props, &Config::default())
}

/// Apply every prop, in order, through its rule
pub fn apply_props_with(doc: &mut Document, node: NodeId, props: &Props, config: &Config) -> Result<()> {
    for (key, value) in props.iter() {
        let rule = rule_for(key, value);
        tracing::trace!("prop '{}' via {} rule on node {}", key, rule.name, node);
        rule.apply(doc, node, key, value, config)?;
    }
    Ok(())
}

fn to_property_value(value: &Value) -> PropertyValue {
    match value {
        Value::Bool(b) => PropertyValue::Bool(*b),
        Value::Number(n) => PropertyValue::Number(*n),
        other => PropertyValue::Str(other.to_string()),
    }
}

/// Presence semantics: `true` sets `""`, `false` removes
fn set_presence(doc: &mut Document, node: NodeId, name: &str, present: bool) -> Result<()> {
    if present {
        doc.set_attribute(node, name, "")?;
    } else {
        doc.remove_attribute(node, name)?;
    }
    Ok(())
}

fn apply_class(doc: &mut Document, node: NodeId, _key: &str, value: &Value, _: &Config) -> Result<()> {
    if value.is_nullish() {
        doc.remove_attribute(node, "class")?;
    } else {
        doc.set_class_name(node, &class_name(value))?;
    }
    Ok(())
}

fn apply_style(doc: &mut Document, node: NodeId, _key: &str, value: &Value, _: &Config) -> Result<()> {
    match value {
        Value::Undefined | Value::Null => doc.remove_attribute(node, "style")?,
        Value::Map(declarations) => {
            for (name, value) in declarations.iter() {
                match value {
                    Value::Undefined | Value::Null | Value::Bool(false) => doc.remove_style_property(node, name)?,
                    value => doc.set_style_property(node, name, &value.to_string())?,
                }
            }
        }
        Value::Listener(_) | Value::Ref(_) => {}
        text => doc.set_style_text(node, &text.to_string())?,
    }
    Ok(())
}

fn apply_dataset(doc: &mut Document, node: NodeId, _key: &str, value: &Value, _: &Config) -> Result<()> {
    let Value::Map(entries) = value else {
        return Ok(());
    };
    for (key, value) in entries.iter() {
        if !value.is_nullish() {
            doc.set_data(node, key, &value.to_string())?;
        }
    }
    Ok(())
}

fn apply_inner_html(doc: &mut Document, node: NodeId, _key: &str, value: &Value, _: &Config) -> Result<()> {
    let markup = if value.is_nullish() { String::new() } else { value.to_string() };
    tracing::debug!("innerHTML on node {} ({} bytes)", node, markup.len());
    fos_html::set_inner_html(doc, node, &markup)?;
    Ok(())
}

fn apply_text(doc: &mut Document, node: NodeId, _key: &str, value: &Value, _: &Config) -> Result<()> {
    let text = if value.is_nullish() { String::new() } else { value.to_string() };
    doc.set_text_content(node, &text)?;
    Ok(())
}

fn apply_event(doc: &mut Document, node: NodeId, key: &str, value: &Value, config: &Config) -> Result<()> {
    let Value::Listener(callback) = value else {
        return Ok(());
    };
    let name = &key[2..];
    let event_type = if config.lowercase_events {
        name.to_ascii_lowercase()
    } else {
        name.to_string()
    };
    doc.add_event_listener(node, &event_type, callback.clone())?;
    Ok(())
}

fn apply_typed_property(doc: &mut Document, node: NodeId, key: &str, value: &Value, config: &Config) -> Result<()> {
    let Some((property, attribute)) = typed_property(key) else {
        return apply_generic(doc, node, key, value, config);
    };
    if value.is_callback() {
        return Ok(());
    }

    if doc.has_property(node, property) {
        if value.is_nullish() {
            doc.reset_property(node, property)?;
        } else {
            doc.set_property(node, property, to_property_value(value))?;
        }
        return Ok(());
    }

    // No such property on this element (SVG, or a tag without it)
    match value {
        Value::Undefined | Value::Null => doc.remove_attribute(node, attribute)?,
        Value::Bool(b) if is_boolean_attribute(attribute) => set_presence(doc, node, attribute, *b)?,
        value => doc.set_attribute(node, attribute, &value.to_string())?,
    }
    Ok(())
}

fn apply_data_attribute(doc: &mut Document, node: NodeId, key: &str, value: &Value, _: &Config) -> Result<()> {
    match value {
        Value::Undefined | Value::Null => doc.remove_attribute(node, key)?,
        Value::Listener(_) | Value::Ref(_) => {}
        value => doc.set_attribute(node, key, &value.to_string())?,
    }
    Ok(())
}

/// The attribute is always written; a same-named host property (input
/// checkedness, media muted) is kept in step with it
fn apply_boolean(doc: &mut Document, node: NodeId, key: &str, value: &Value, _: &Config) -> Result<()> {
    let name = key.to_ascii_lowercase();
    let present = value.truthy();
    set_presence(doc, node, &name, present)?;
    if doc.has_property(node, &name) {
        doc.set_property(node, &name, PropertyValue::Bool(present))?;
    }
    Ok(())
}

fn apply_generic(doc: &mut Document, node: NodeId, key: &str, value: &Value, _: &Config) -> Result<()> {
    match value {
        Value::Undefined | Value::Null => doc.remove_attribute(node, key)?,
        Value::Listener(_) | Value::Ref(_) => {
            tracing::trace!("ignoring callback for non-event key '{}'", key);
        }
        value if doc.has_property(node, key) => doc.set_property(node, key, to_property_value(value))?,
        Value::Bool(b) if !key.starts_with("aria-") => set_presence(doc, node, key, *b)?,
        value => doc.set_attribute(node, key, &value.to_string())?,
    }
    Ok(())
}
