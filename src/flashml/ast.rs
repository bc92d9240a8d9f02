//! Abstract syntax tree for FlashML documents
//!
//! The tree is a closed set of node kinds: a [Document] root owning a sequence of [Node]s, where
//! each node is an [Element], a [TextNode] or a [CommentNode]. The root is its own type so a
//! document can never be nested inside another node.
//!
//! Nodes are built once by the parser and only read afterwards: the validator and every emitter
//! take `&Document`.

pub mod node;
pub mod range;
pub mod snapshot;
pub mod traits;

pub use node::{Attributes, CommentNode, Document, Element, Node, TextNode};
pub use range::{Position, SourceLocation};
pub use snapshot::{snapshot_from_document, snapshot_from_node, AstSnapshot};
pub use traits::AstNode;
