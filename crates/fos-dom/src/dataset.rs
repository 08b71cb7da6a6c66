//! dataset
//!
//! `data-*` attributes viewed as a camelCase keyed map.

use crate::Attr;

const PREFIX: &str = "data-";

/// Read-only view of an element's `data-*` attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMStringMap {
    entries: Vec<(String, String)>,
}

impl DOMStringMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `data-*` attributes, in attribute order
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = &'a Attr>) -> Self {
        let mut map = Self::new();
        for attr in attrs {
            if let Some(rest) = attr.name.strip_prefix(PREFIX) {
                map.entries.push((camelize(rest), attr.value.clone()));
            }
        }
        map
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `userId` -> `data-user-id`
    pub fn to_attribute_name(key: &str) -> String {
        let mut name = String::from(PREFIX);
        for c in key.chars() {
            if c.is_ascii_uppercase() {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        }
        name
    }
}

/// `user-id` -> `userId`; a dash before a non-letter is kept
fn camelize(rest: &str) -> String {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
