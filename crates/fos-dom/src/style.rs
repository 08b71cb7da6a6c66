//! CSSStyleDeclaration
//!
//! Inline style view over the `style` attribute. Declarations keep their
//! order; property names are stored in kebab-case.

/// Inline style declaration block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name: value; name: value` style text
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if !name.is_empty() && !value.is_empty() {
                style.set_property(name, value);
            }
        }
        style
    }

    /// Set a property; accepts camelCase (`backgroundColor`) or kebab-case names.
    /// An empty value removes the property.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let name = normalize_property_name(name);
        if value.is_empty() {
            self.remove_property(&name);
            return;
        }
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some(decl) => decl.1 = value.to_string(),
            None => self.declarations.push((name, value.to_string())),
        }
    }

    /// Remove a property, returning its previous value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = normalize_property_name(name);
        let index = self.declarations.iter().position(|(n, _)| *n == name)?;
        Some(self.declarations.remove(index).1)
    }

    /// Get a property value ("" when unset, like `getPropertyValue`)
    pub fn get_property_value(&self, name: &str) -> &str {
        let name = normalize_property_name(name);
        self.declarations
            .iter()
            .find(|(n, _)| *n == name)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Number of declarations
    pub fn length(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize back to style text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Map a scripting-style property name to its CSS name.
///
/// Custom properties (`--x`) and names already containing `-` are left as is.
pub fn normalize_property_name(name: &str) -> String {
    if name.starts_with("--") || name.contains('-') {
        return name.to_string();
    }
    if name == "cssFloat" {
        return "float".to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    // Vendor prefixes: WebkitTransform -> -webkit-transform, msTransform -> -ms-transform
    let ms_prefixed = name
        .strip_prefix("ms")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()));
    if ms_prefixed || name.starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_text() {
        let style = StyleDeclaration::parse("display: none; margin: 1px;");
        assert_eq!(style.get_property_value("display"), "none");
        assert_eq!(style.get_property_value("margin"), "1px");
        assert_eq!(style.length(), 2);
    }

    #[test]
    fn test_camel_case_names() {
        let mut style = StyleDeclaration::new();
        style.set_property("backgroundColor", "red");
        assert_eq!(style.get_property_value("background-color"), "red");
        assert_eq!(style.css_text(), "background-color: red;");
    }

    #[test]
    fn test_normalize_names() {
        assert_eq!(normalize_property_name("display"), "display");
        assert_eq!(normalize_property_name("borderTopWidth"), "border-top-width");
        assert_eq!(normalize_property_name("WebkitTransform"), "-webkit-transform");
        assert_eq!(normalize_property_name("msTransform"), "-ms-transform");
        assert_eq!(normalize_property_name("cssFloat"), "float");
        assert_eq!(normalize_property_name("--main-color"), "--main-color");
    }

    #[test]
    fn test_empty_value_removes() {
        let mut style = StyleDeclaration::parse("color: red; width: 2px");
        style.set_property("color", "");
        assert_eq!(style.css_text(), "width: 2px;");
    }
}
