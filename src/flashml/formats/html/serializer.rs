//! Body serializer
//!
//! Layout rules, per element:
//!
//!     - the media tag renders as `<img attrs />` and its children are ignored
//!     - an element whose only child is text renders on one line: `<h1 class="titulo">Hi</h1>`
//!     - an empty element renders as `<tag attrs></tag>`
//!     - otherwise the children go on their own lines, one level deeper, and the closing tag
//!       lines up with the opening one
//!
//! In the block layout, text is trimmed onto its own line and whitespace-only text is dropped.
//! Comments become `<!-- text -->` lines. Their text is escaped like element text, so a `-->`
//! inside a comment cannot close it early.

use super::mappings::{html_attribute, html_tag, CLASS_ATTRIBUTE, MEDIA_TAG};
use crate::flashml::ast::{Document, Element, Node};

/// Render the document body with `indent` spaces per level, starting at column 0
pub fn render_body(doc: &Document, indent: usize) -> String {
    render_nodes(&doc.children, indent, 0)
}

/// Render a list of sibling nodes in block layout at `level`
pub fn render_nodes(nodes: &[Node], indent: usize, level: usize) -> String {
    let mut renderer = Renderer {
        unit: " ".repeat(indent),
        output: String::new(),
    };
    renderer.block(nodes, level);
    renderer.output
}

struct Renderer {
    unit: String,
    output: String,
}

impl Renderer {
    fn pad(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.unit);
        }
    }

    fn block(&mut self, nodes: &[Node], level: usize) {
        for node in nodes {
            self.node(node, level);
        }
    }

    fn node(&mut self, node: &Node, level: usize) {
        match node {
            Node::Element(element) => self.element(element, level),
            Node::Text(text) => {
                let content = text.text.trim();
                if !content.is_empty() {
                    self.pad(level);
                    self.output.push_str(&escape_text(content));
                    self.output.push('\n');
                }
            }
            Node::Comment(comment) => {
                self.pad(level);
                self.output.push_str("<!-- ");
                self.output.push_str(&escape_text(comment.text.trim()));
                self.output.push_str(" -->\n");
            }
        }
    }

    fn element(&mut self, element: &Element, level: usize) {
        let tag = html_tag(&element.tag_name);
        let attributes = render_attributes(element);

        self.pad(level);
        if element.tag_name == MEDIA_TAG {
            self.output.push_str(&format!("<{}{} />\n", tag, attributes));
            return;
        }

        self.output.push_str(&format!("<{}{}>", tag, attributes));
        match element.children.as_slice() {
            [] => {}
            [Node::Text(text)] => self.output.push_str(&escape_text(&text.text)),
            children => {
                self.output.push('\n');
                self.block(children, level + 1);
                self.pad(level);
            }
        }
        self.output.push_str(&format!("</{}>\n", tag));
    }
}

/// Renamed source attributes in order, then the class hook
fn render_attributes(element: &Element) -> String {
    let mut rendered = String::new();
    for (name, value) in element.attributes.iter() {
        rendered.push_str(&format!(
            " {}=\"{}\"",
            html_attribute(name),
            escape_attribute(value)
        ));
    }
    rendered.push_str(&format!(
        " {}=\"{}\"",
        CLASS_ATTRIBUTE,
        escape_attribute(&element.tag_name)
    ));
    rendered
}

pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
