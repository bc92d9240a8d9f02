//! AST Snapshot - a normalized, format-agnostic view of the tree
//!
//! Debug serializers (the treeviz format) consume snapshots instead of walking the AST
//! themselves, so the traversal lives in one place.

use super::node::{Document, Node};
use super::range::Position;
use super::traits::AstNode;
use serde::Serialize;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The type of node ("Document", "Element", "Text", "Comment")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    pub position: Position,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String, position: Position) -> Self {
        Self {
            node_type,
            label,
            position,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build a snapshot of a node and all its descendants
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    let snapshot = AstSnapshot::new(
        node.node_type().to_string(),
        node.display_label(),
        AstNode::position(node),
    );
    match node {
        Node::Element(element) => {
            snapshot.with_children(element.children.iter().map(snapshot_from_node).collect())
        }
        Node::Text(_) | Node::Comment(_) => snapshot,
    }
}

/// Build a snapshot for the whole document
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    AstSnapshot::new(
        doc.node_type().to_string(),
        doc.display_label(),
        doc.position(),
    )
    .with_children(doc.children.iter().map(snapshot_from_node).collect())
}
