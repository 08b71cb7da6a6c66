//! Namespace Resolution
//!
//! Picks the namespace a tag is created in and whether the element is
//! created with `createElement` or `createElementNS`.

use fos_dom::{HTML_NAMESPACE, SVG_NAMESPACE};

/// Tag names created in the SVG namespace
pub static SVG_TAGS: &[&str] = &[
    "animate", "circle", "clipPath", "defs", "desc", "ellipse",
    "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite",
    "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap", "feDistantLight",
    "feFlood", "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur",
    "feImage", "feMerge", "feMergeNode", "feMorphology", "feOffset", "fePointLight",
    "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence", "filter",
    "foreignObject", "g", "image", "line", "linearGradient", "marker", "mask",
    "metadata", "path", "pattern", "polygon", "polyline", "radialGradient",
    "rect", "stop", "svg", "switch", "symbol", "text", "textPath", "tspan", "use",
    "view",
];

/// Element creation primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMode {
    /// `createElement` (HTML, name lower-cased)
    Html,
    /// `createElementNS` (name kept as written)
    Namespaced,
}

/// Resolved namespace for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub namespace_uri: &'a str,
    pub mode: CreationMode,
}

/// Whether `tag` is a known SVG element name (case-sensitive)
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAGS.contains(&tag)
}

/// Resolve with SVG lookup enabled
pub fn resolve<'a>(tag: &str, explicit_namespace: Option<&'a str>) -> Resolution<'a> {
    resolve_with(tag, explicit_namespace, true)
}

/// Resolve a tag. An explicit namespace always wins; known SVG tags map to
/// the SVG namespace when `svg` is set; everything else is HTML.
pub fn resolve_with<'a>(tag: &str, explicit_namespace: Option<&'a str>, svg: bool) -> Resolution<'a> {
    if let Some(namespace_uri) = explicit_namespace {
        return Resolution {
            namespace_uri,
            mode: CreationMode::Namespaced,
        };
    }
    if svg && is_svg_tag(tag) {
        return Resolution {
            namespace_uri: SVG_NAMESPACE,
            mode: CreationMode::Namespaced,
        };
    }
    Resolution {
        namespace_uri: HTML_NAMESPACE,
        mode: CreationMode::Html,
    }
}
