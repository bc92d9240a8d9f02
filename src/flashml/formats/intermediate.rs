//! Intermediate record
//!
//! A self-contained, tagged tree mirroring the AST one node for one node:
//!
//!     {"kind": "document", "children": [...]}
//!     {"kind": "element", "tagName": "...", "attributes": {...}, "children": [...]}
//!     {"kind": "text", "text": "..."}      text is trimmed; all-whitespace text becomes ""
//!     {"kind": "comment", "text": "..."}   raw comment text
//!
//! Attributes keep source order. The record is a terminal artifact: the HTML emitter works from
//! the AST, not from this tree.

use super::registry::{FormatError, Formatter};
use crate::flashml::ast::{Attributes, Document, Node};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IntermediateNode {
    Document {
        children: Vec<IntermediateNode>,
    },
    Element {
        #[serde(rename = "tagName")]
        tag_name: String,
        attributes: Attributes,
        children: Vec<IntermediateNode>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl IntermediateNode {
    fn children(&self) -> &[IntermediateNode] {
        match self {
            IntermediateNode::Document { children } | IntermediateNode::Element { children, .. } => {
                children
            }
            IntermediateNode::Text { .. } | IntermediateNode::Comment { .. } => &[],
        }
    }

    /// Number of records in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(IntermediateNode::node_count)
            .sum::<usize>()
    }

    /// Depth of this subtree; a record with no children has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(IntermediateNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Build the intermediate record for a whole document
pub fn to_intermediate(doc: &Document) -> IntermediateNode {
    IntermediateNode::Document {
        children: doc.children.iter().map(node_to_intermediate).collect(),
    }
}

fn node_to_intermediate(node: &Node) -> IntermediateNode {
    match node {
        Node::Element(element) => IntermediateNode::Element {
            tag_name: element.tag_name.clone(),
            attributes: element.attributes.clone(),
            children: element.children.iter().map(node_to_intermediate).collect(),
        },
        Node::Text(text) => IntermediateNode::Text {
            text: text.text.trim().to_string(),
        },
        Node::Comment(comment) => IntermediateNode::Comment {
            text: comment.text.clone(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateOptions {
    /// Indented, multi-line JSON
    pub pretty: bool,
}

impl Default for IntermediateOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serialize the intermediate record of `doc` as JSON
pub fn to_json(doc: &Document, options: &IntermediateOptions) -> Result<String, FormatError> {
    record_to_json(&to_intermediate(doc), options)
}

pub fn record_to_json(
    record: &IntermediateNode,
    options: &IntermediateOptions,
) -> Result<String, FormatError> {
    let result = if options.pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    result.map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub fn to_yaml(doc: &Document) -> Result<String, FormatError> {
    serde_yaml::to_string(&to_intermediate(doc))
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub struct IntermediateJsonFormatter {
    options: IntermediateOptions,
}

impl IntermediateJsonFormatter {
    pub fn new(options: IntermediateOptions) -> Self {
        Self { options }
    }
}

impl Formatter for IntermediateJsonFormatter {
    fn name(&self) -> &str {
        "intermediate-json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json(doc, &self.options)
    }

    fn description(&self) -> &str {
        "Intermediate record as JSON (the compile artifact)"
    }
}

pub struct IntermediateYamlFormatter;

impl Formatter for IntermediateYamlFormatter {
    fn name(&self) -> &str {
        "intermediate-yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_yaml(doc)
    }

    fn description(&self) -> &str {
        "Intermediate record as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashml::ast::{CommentNode, Element, Position, TextNode};
    use crate::flashml::testing::Sample;
    use serde_json::json;

    fn sample_doc() -> Document {
        let at = Position::default();
        Document::with_children(vec![
            Node::Comment(CommentNode::new(" nota ", at)),
            Node::Element(
                Element::new("personaje", at)
                    .with_attribute("nombre", "Barry")
                    .with_attribute("actor", "Grant")
                    .with_children(vec![
                        Node::Text(TextNode::new("  Hola  ", at)),
                        Node::Text(TextNode::new(" \n ", at)),
                    ]),
            ),
        ])
    }

    #[test]
    fn test_record_shape() {
        let value = serde_json::to_value(to_intermediate(&sample_doc())).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "document",
                "children": [
                    {"kind": "comment", "text": " nota "},
                    {
                        "kind": "element",
                        "tagName": "personaje",
                        "attributes": {"nombre": "Barry", "actor": "Grant"},
                        "children": [
                            {"kind": "text", "text": "Hola"},
                            {"kind": "text", "text": ""}
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_attributes_keep_source_order_in_json() {
        let json = to_json(&sample_doc(), &IntermediateOptions { pretty: false }).unwrap();
        let nombre = json.find("\"nombre\"").unwrap();
        let actor = json.find("\"actor\"").unwrap();
        assert!(nombre < actor);
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_keeps_non_ascii_text() {
        let doc = Document::with_children(vec![Node::Text(TextNode::new(
            "¡más rápido!",
            Position::default(),
        ))]);
        let json = to_json(&doc, &IntermediateOptions::default()).unwrap();
        assert!(json.contains("¡más rápido!"));
    }

    #[test]
    fn test_counts_match_the_ast() {
        for sample in Sample::all() {
            let doc = sample.parse();
            let record = to_intermediate(&doc);
            assert_eq!(record.node_count(), doc.node_count(), "{}", sample.file_name());
            assert_eq!(record.depth(), doc.depth(), "{}", sample.file_name());
        }
    }

    #[test]
    fn test_yaml_is_tagged() {
        let yaml = to_yaml(&sample_doc()).unwrap();
        assert!(yaml.starts_with("kind: document\n"));
        assert!(yaml.contains("tagName: personaje"));
    }
}
