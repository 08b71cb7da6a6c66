//! fOS HTML
//!
//! Markup parsing into the fOS DOM (built on html5ever) and HTML
//! serialization for `innerHTML` / `outerHTML`.

mod parser;
mod serializer;

pub use parser::{parse_fragment, parse_fragment_in, set_inner_html, HtmlParser};
pub use serializer::{inner_html, outer_html, HtmlSerializer};

use fos_dom::DomError;

/// Errors raised while parsing markup into a document
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dom(#[from] DomError),
}
