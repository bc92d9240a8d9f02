//! AST node types
//!
//! [Element]s own their children; the [Document] owns the whole tree. Attributes keep the order
//! in which names first appeared in the source, which is also the order the emitters write them.

use super::range::Position;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Root of a parsed FlashML document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Iterate over the elements directly under the root
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Total number of nodes in the tree, the document itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of `Element` nodes anywhere in the tree
    pub fn element_count(&self) -> usize {
        self.children.iter().map(Node::element_count).sum()
    }

    /// Depth of the tree; a document with no children has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}

/// A child node of a document or element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(TextNode),
    Comment(CommentNode),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Node::Element(element) => element.position,
            Node::Text(text) => text.position,
            Node::Comment(comment) => comment.position,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Element(element) => {
                1 + element.children.iter().map(Node::node_count).sum::<usize>()
            }
            Node::Text(_) | Node::Comment(_) => 1,
        }
    }

    pub fn element_count(&self) -> usize {
        match self {
            Node::Element(element) => {
                1 + element.children.iter().map(Node::element_count).sum::<usize>()
            }
            Node::Text(_) | Node::Comment(_) => 0,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Element(element) => {
                1 + element.children.iter().map(Node::depth).max().unwrap_or(0)
            }
            Node::Text(_) | Node::Comment(_) => 1,
        }
    }
}

/// A tag with attributes and children, produced from a matched `@tag` / `@/tag` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    pub position: Position,
}

impl Element {
    pub fn new(tag_name: impl Into<String>, position: Position) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            position,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// Free text between tags, kept verbatim (including surrounding whitespace)
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub position: Position,
}

impl TextNode {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// The content of a `## ... ##` comment
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub text: String,
    pub position: Position,
}

impl CommentNode {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Attribute map with unique names, in first-insertion order
///
/// Inserting a name that is already present replaces its value in place, so a repeated
/// attribute keeps its original position and the last value wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, returning the previous value if there was one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
