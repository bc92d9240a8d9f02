//! Page shell around the rendered body

use super::serializer::{escape_attribute, escape_text, render_nodes};
use super::HtmlOptions;
use crate::flashml::ast::Document;

const STYLESHEET: &str = include_str!("assets/flashml.css");
const SCRIPT: &str = include_str!("assets/flashml.js");

/// Render a complete HTML page for `doc`
pub fn render_page(doc: &Document, options: &HtmlOptions) -> String {
    let unit = " ".repeat(options.indent);
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n");
    page.push_str(&format!(
        "<html lang=\"{}\">\n",
        escape_attribute(&options.lang)
    ));
    page.push_str("<head>\n");
    page.push_str(&format!("{unit}<meta charset=\"UTF-8\">\n"));
    page.push_str(&format!(
        "{unit}<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n"
    ));
    page.push_str(&format!(
        "{unit}<title>{}</title>\n",
        escape_text(&options.title)
    ));
    page.push_str(&format!("{unit}<style>\n{STYLESHEET}{unit}</style>\n"));
    page.push_str(&format!("{unit}<script>\n{SCRIPT}{unit}</script>\n"));
    page.push_str("</head>\n");
    page.push_str("<body>\n");
    page.push_str(&render_nodes(&doc.children, options.indent, 1));
    page.push_str("</body>\n");
    page.push_str("</html>\n");
    page
}
