//! HTML emitter
//!
//!     mappings:   FlashML tag and attribute names to HTML names
//!     serializer: the document body, one element per line with indentation
//!     template:   the page shell (doctype, head, embedded stylesheet and script)
//!
//! Every element gets a `class` attribute holding its FlashML tag name, which is what the
//! embedded stylesheet and script select on.

pub mod mappings;
pub mod serializer;
pub mod template;

pub use serializer::render_body;
pub use template::render_page;

use super::registry::{FormatError, Formatter};
use crate::flashml::ast::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Value of `<html lang>`
    pub lang: String,
    /// Text of `<title>`
    pub title: String,
    /// Spaces per nesting level in the body
    pub indent: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            title: "Documento FlashML".to_string(),
            indent: 2,
        }
    }
}

pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_page(doc, &self.options))
    }

    fn description(&self) -> &str {
        "Complete HTML page with the embedded FlashML theme"
    }
}
