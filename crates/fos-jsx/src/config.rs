//! Engine Configuration

/// Element construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Resolve known SVG tag names to the SVG namespace.
    /// When disabled, SVG elements need an explicit `namespaceURI` prop.
    pub svg: bool,

    /// Lower-case the event name taken from `on<Event>` keys
    pub lowercase_events: bool,
}

impl Config {
    /// HTML-only configuration
    pub fn html_only() -> Self {
        Self {
            svg: false,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svg: true,
            lowercase_events: true,
        }
    }
}
