//! Element Attributes
//!
//! Attributes are kept in the order they were first set; replacing a value
//! keeps the original slot, so serialized markup is stable across updates.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Ordered attribute list of an element
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    entries: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|attr| attr.name == name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Set a value; an existing attribute keeps its position
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => self.entries[i].value = value.to_string(),
            None => self.entries.push(Attr {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Remove an attribute, returning it if it was set
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        self.position(name).map(|i| self.entries.remove(i))
    }

    /// Attributes in order
    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.entries.iter()
    }
}
