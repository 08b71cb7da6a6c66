//! Tag Functions
//!
//! One function per known HTML and SVG tag, plus the `DOM` table that
//! looks them up by tag name. Each takes the call arguments as a list:
//! a leading map is the props, everything else is children.
//!
//! ```rust,ignore
//! let heading = tags::h3(&mut doc, children!["Hello World"])?;
//! let link = tags::a(&mut doc, children![props! { "href" => "/" }, "home"])?;
//! let node = DOM.call(&mut doc, "div", children!["Hello ", "world", "!"])?;
//! ```

use anyhow::{anyhow, Result};
use fos_dom::{Document, NodeId};

use crate::{create_element, Props, Tag, Value};

/// Signature shared by every tag function
pub type TagFn = fn(&mut Document, Vec<Value>) -> Result<NodeId>;

/// Split call arguments into props and children
fn split_args(mut args: Vec<Value>) -> (Props, Vec<Value>) {
    if let Some(Value::Map(_)) = args.first() {
        if let Value::Map(props) = args.remove(0) {
            return (props, args);
        }
    }
    (Props::new(), args)
}

fn build(doc: &mut Document, tag: &str, args: Vec<Value>) -> Result<NodeId> {
    let (props, children) = split_args(args);
    create_element(doc, Tag::Name(tag.to_string()), props, children)
}

macro_rules! define_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", $tag, ">` element")]
            pub fn $name(doc: &mut Document, args: Vec<Value>) -> Result<NodeId> {
                build(doc, $tag, args)
            }
        )*

        static ENTRIES: &[(&str, TagFn)] = &[$(($tag, $name as TagFn)),*];
    };
}

define_tags! {
    // HTML
    a => "a", abbr => "abbr", address => "address", area => "area", article => "article",
    aside => "aside", audio => "audio", b => "b", base => "base", bdi => "bdi", bdo => "bdo",
    blockquote => "blockquote", body => "body", br => "br", button => "button",
    canvas => "canvas", caption => "caption", cite => "cite", code => "code", col => "col",
    colgroup => "colgroup", data => "data", datalist => "datalist", dd => "dd", del => "del",
    details => "details", dfn => "dfn", dialog => "dialog", div => "div", dl => "dl",
    dt => "dt", em => "em", embed => "embed", fieldset => "fieldset",
    figcaption => "figcaption", figure => "figure", footer => "footer", form => "form",
    h1 => "h1", h2 => "h2", h3 => "h3", h4 => "h4", h5 => "h5", h6 => "h6", head => "head",
    header => "header", hgroup => "hgroup", hr => "hr", html => "html", i => "i",
    iframe => "iframe", img => "img", input => "input", ins => "ins", kbd => "kbd",
    label => "label", legend => "legend", li => "li", link => "link", main => "main",
    map => "map", mark => "mark", menu => "menu", meta => "meta", meter => "meter",
    nav => "nav", noscript => "noscript", object => "object", ol => "ol",
    optgroup => "optgroup", option => "option", output => "output", p => "p", param => "param",
    picture => "picture", pre => "pre", progress => "progress", q => "q", rp => "rp",
    rt => "rt", ruby => "ruby", s => "s", samp => "samp", script => "script",
    search => "search", section => "section", select => "select", slot => "slot",
    small => "small", source => "source", span => "span", strong => "strong", style => "style",
    sub => "sub", summary => "summary", sup => "sup", table => "table", tbody => "tbody",
    td => "td", template => "template", textarea => "textarea", tfoot => "tfoot", th => "th",
    thead => "thead", time => "time", title => "title", tr => "tr", track => "track", u => "u",
    ul => "ul", var => "var", video => "video", wbr => "wbr",
    // SVG
    animate => "animate", circle => "circle", clip_path => "clipPath", defs => "defs",
    desc => "desc", ellipse => "ellipse", fe_blend => "feBlend",
    fe_color_matrix => "feColorMatrix", fe_component_transfer => "feComponentTransfer",
    fe_composite => "feComposite", fe_convolve_matrix => "feConvolveMatrix",
    fe_diffuse_lighting => "feDiffuseLighting", fe_displacement_map => "feDisplacementMap",
    fe_distant_light => "feDistantLight", fe_flood => "feFlood", fe_func_a => "feFuncA",
    fe_func_b => "feFuncB", fe_func_g => "feFuncG", fe_func_r => "feFuncR",
    fe_gaussian_blur => "feGaussianBlur", fe_image => "feImage", fe_merge => "feMerge",
    fe_merge_node => "feMergeNode", fe_morphology => "feMorphology", fe_offset => "feOffset",
    fe_point_light => "fePointLight", fe_specular_lighting => "feSpecularLighting",
    fe_spot_light => "feSpotLight", fe_tile => "feTile", fe_turbulence => "feTurbulence",
    filter => "filter", foreign_object => "foreignObject", g => "g", image => "image",
    line => "line", linear_gradient => "linearGradient", marker => "marker", mask => "mask",
    metadata => "metadata", path => "path", pattern => "pattern", polygon => "polygon",
    polyline => "polyline", radial_gradient => "radialGradient", rect => "rect", stop => "stop",
    svg => "svg", switch => "switch", symbol => "symbol", text => "text",
    text_path => "textPath", tspan => "tspan", r#use => "use", view => "view",
}

/// Tag functions by DOM tag name
pub struct TagTable {
    entries: &'static [(&'static str, TagFn)],
}

impl TagTable {
    /// Function for `name` (case-sensitive, DOM spelling)
    pub fn get(&self, name: &str) -> Option<TagFn> {
        self.entries.iter().find(|(tag, _)| *tag == name).map(|&(_, f)| f)
    }

    /// Call the function for `name`
    pub fn call(&self, doc: &mut Document, name: &str, args: Vec<Value>) -> Result<NodeId> {
        let f = self.get(name).ok_or_else(|| anyhow!("no tag function for <{name}>"))?;
        f(doc, args)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every tag name, HTML first
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(tag, _)| tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for TagTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagTable").field("len", &self.entries.len()).finish()
    }
}

/// Every tag function, keyed by tag name
pub static DOM: TagTable = TagTable { entries: ENTRIES };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::SVG_TAGS;
    use fos_dom::{NodeType, SVG_NAMESPACE};

    #[test]
    fn test_props_are_optional() {
        let mut doc = Document::new();
        let h3 = h3(&mut doc, vec!["Hello World".into()]).unwrap();

        assert_eq!(doc.child_nodes(h3).len(), 1);
        assert_eq!(doc.child_element_count(h3), 0);
        let first = doc.first_child(h3).unwrap();
        assert_eq!(doc.node_type(first), Some(NodeType::Text));
        assert_eq!(doc.text_content(h3), "Hello World");
    }

    #[test]
    fn test_leading_map_is_props() {
        let mut doc = Document::new();
        let mut props = Props::new();
        props.insert("href", "/home");
        let link = a(&mut doc, vec![props.into(), "home".into()]).unwrap();

        assert_eq!(doc.get_attribute(link, "href"), Some("/home"));
        assert_eq!(doc.text_content(link), "home");
    }

    #[test]
    fn test_map_after_first_is_child_text() {
        let mut doc = Document::new();
        let mut props = Props::new();
        props.insert("k", "v");
        let span = span(&mut doc, vec!["x".into(), props.into()]).unwrap();
        assert_eq!(doc.text_content(span), "xk=v");
    }

    #[test]
    fn test_table_covers_svg_tags() {
        let mut doc = Document::new();
        for tag in SVG_TAGS {
            let node = DOM.call(&mut doc, tag, vec![]).unwrap();
            assert_eq!(doc.namespace_uri(node), Some(SVG_NAMESPACE), "tag {tag}");
            assert_eq!(doc.local_name(node), Some(*tag));
        }
    }

    #[test]
    fn test_snake_case_functions_keep_dom_names() {
        let mut doc = Document::new();
        let clip = clip_path(&mut doc, vec![]).unwrap();
        let used = r#use(&mut doc, vec![]).unwrap();
        assert_eq!(doc.local_name(clip), Some("clipPath"));
        assert_eq!(doc.local_name(used), Some("use"));
    }

    #[test]
    fn test_table_lookup() {
        assert!(DOM.contains("div"));
        assert!(DOM.contains("feGaussianBlur"));
        assert!(!DOM.contains("fe_gaussian_blur"));
        assert!(DOM.get("blink").is_none());
        assert_eq!(DOM.names().count(), DOM.len());

        let mut doc = Document::new();
        assert!(DOM.call(&mut doc, "blink", vec![]).is_err());
    }
}
