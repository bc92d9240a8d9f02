//! AST traits - Common interfaces for uniform node access

use super::node::{CommentNode, Document, Element, Node, TextNode};
use super::range::Position;

/// Common interface for all AST nodes
pub trait AstNode {
    /// Node kind name, used by debug formats ("Document", "Element", ...)
    fn node_type(&self) -> &'static str;

    /// One-line human readable summary of the node
    fn display_label(&self) -> String;

    /// Position of the token that produced the node
    fn position(&self) -> Position;
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("Document ({} items)", self.children.len())
    }

    fn position(&self) -> Position {
        Position::default()
    }
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        "Element"
    }

    fn display_label(&self) -> String {
        if self.attributes.is_empty() {
            format!("@{}", self.tag_name)
        } else {
            let attributes = self
                .attributes
                .iter()
                .map(|(name, value)| format!("{}=\"{}\"", name, value))
                .collect::<Vec<_>>()
                .join(" ");
            format!("@{} {}", self.tag_name, attributes)
        }
    }

    fn position(&self) -> Position {
        self.position
    }
}

impl AstNode for TextNode {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.text.trim().to_string()
    }

    fn position(&self) -> Position {
        self.position
    }
}

impl AstNode for CommentNode {
    fn node_type(&self) -> &'static str {
        "Comment"
    }

    fn display_label(&self) -> String {
        self.text.trim().to_string()
    }

    fn position(&self) -> Position {
        self.position
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Element(element) => element.node_type(),
            Node::Text(text) => text.node_type(),
            Node::Comment(comment) => comment.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Element(element) => element.display_label(),
            Node::Text(text) => text.display_label(),
            Node::Comment(comment) => comment.display_label(),
        }
    }

    fn position(&self) -> Position {
        Node::position(self)
    }
}
