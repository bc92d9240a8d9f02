//! Tree walk checking a document against the tag grammar
//!
//! The walk is depth-first in document order. Per element it reports, in this order: an unknown
//! tag (and then skips the element's subtree), a disallowed parent, each missing required
//! attribute in grammar order, then each disallowed attribute in the order it was written.
//! Nothing short-circuits: every problem in the tree is collected.

use super::diagnostics::Diagnostic;
use super::grammar::{rule_for, ROOT_TAG};
use crate::flashml::ast::{Document, Element, Node};

/// Validate a document, returning every diagnostic found (empty when the document is valid)
pub fn validate(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let has_root = doc.elements().any(|element| element.tag_name == ROOT_TAG);
    if !has_root {
        diagnostics.push(Diagnostic::missing_root(ROOT_TAG));
    }

    for child in &doc.children {
        check_node(child, None, &mut diagnostics);
    }
    diagnostics
}

fn check_node(node: &Node, parent: Option<&str>, diagnostics: &mut Vec<Diagnostic>) {
    match node {
        Node::Element(element) => check_element(element, parent, diagnostics),
        Node::Text(_) | Node::Comment(_) => {}
    }
}

fn check_element(element: &Element, parent: Option<&str>, diagnostics: &mut Vec<Diagnostic>) {
    let tag = element.tag_name.as_str();
    let position = element.position;

    let Some(rule) = rule_for(tag) else {
        diagnostics.push(Diagnostic::unknown_tag(tag, position));
        return;
    };

    if !rule.allows_parent(parent) {
        diagnostics.push(Diagnostic::disallowed_parent(tag, parent, position));
    }

    for required in &rule.required_attributes {
        if !element.attributes.contains(required) {
            diagnostics.push(Diagnostic::missing_attribute(tag, required, position));
        }
    }

    for name in element.attributes.names() {
        if !rule.allows_attribute(name) {
            diagnostics.push(Diagnostic::disallowed_attribute(tag, name, position));
        }
    }

    for child in &element.children {
        check_node(child, Some(tag), diagnostics);
    }
}
