//! Fluent assertion API for AST nodes

use crate::flashml::ast::{Document, Element, Node};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.doc.children, expected, "document");
        self
    }

    /// Assert the child at `index` is an element, then run element assertions on it
    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let context = format!("document.children[{}]", index);
        assertion(expect_element(&self.doc.children, index, context));
        self
    }

    /// Assert the child at `index` is a text node with exactly this text
    pub fn text(self, index: usize, expected: &str) -> Self {
        expect_text(&self.doc.children, index, expected, "document");
        self
    }

    /// Assert the child at `index` is a comment with exactly this text
    pub fn comment(self, index: usize, expected: &str) -> Self {
        expect_comment(&self.doc.children, index, expected, "document");
        self
    }
}

pub struct ElementAssertion<'a> {
    element: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.element.tag_name, expected,
            "{}: expected tag '{}', found '{}'",
            self.context, expected, self.element.tag_name
        );
        self
    }

    pub fn attribute(self, name: &str, expected: &str) -> Self {
        match self.element.attributes.get(name) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: attribute '{}' expected '{}', found '{}'",
                self.context, name, expected, actual
            ),
            None => panic!(
                "{}: missing attribute '{}' (has: [{}])",
                self.context,
                name,
                self.element.attributes.names().collect::<Vec<_>>().join(", ")
            ),
        }
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        assert_eq!(
            self.element.attributes.len(),
            expected,
            "{}: expected {} attributes, found {}",
            self.context,
            expected,
            self.element.attributes.len()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.element.children, expected, &self.context);
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let context = format!("{}.children[{}]", self.context, index);
        assertion(expect_element(&self.element.children, index, context));
        self
    }

    pub fn text(self, index: usize, expected: &str) -> Self {
        expect_text(&self.element.children, index, expected, &self.context);
        self
    }

    pub fn comment(self, index: usize, expected: &str) -> Self {
        expect_comment(&self.element.children, index, expected, &self.context);
        self
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|node| match node {
            Node::Element(element) => format!("@{}", element.tag_name),
            Node::Text(text) => format!("Text({:?})", text.text),
            Node::Comment(comment) => format!("Comment({:?})", comment.text),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn child_at<'a>(children: &'a [Node], index: usize, context: &str) -> &'a Node {
    children.get(index).unwrap_or_else(|| {
        panic!(
            "{}: child index {} out of bounds ({} children: [{}])",
            context,
            index,
            children.len(),
            summarize(children)
        )
    })
}

fn assert_child_count(children: &[Node], expected: usize, context: &str) {
    assert_eq!(
        children.len(),
        expected,
        "{}: expected {} children, found {}: [{}]",
        context,
        expected,
        children.len(),
        summarize(children)
    );
}

fn expect_element(children: &[Node], index: usize, context: String) -> ElementAssertion<'_> {
    match child_at(children, index, &context) {
        Node::Element(element) => ElementAssertion { element, context },
        other => panic!("{}: expected an element, found {}", context, summarize(std::slice::from_ref(other))),
    }
}

fn expect_text(children: &[Node], index: usize, expected: &str, context: &str) {
    match child_at(children, index, context) {
        Node::Text(text) => assert_eq!(
            text.text, expected,
            "{}.children[{}]: text mismatch",
            context, index
        ),
        other => panic!(
            "{}.children[{}]: expected text, found {}",
            context,
            index,
            summarize(std::slice::from_ref(other))
        ),
    }
}

fn expect_comment(children: &[Node], index: usize, expected: &str, context: &str) {
    match child_at(children, index, context) {
        Node::Comment(comment) => assert_eq!(
            comment.text, expected,
            "{}.children[{}]: comment mismatch",
            context, index
        ),
        other => panic!(
            "{}.children[{}]: expected comment, found {}",
            context,
            index,
            summarize(std::slice::from_ref(other))
        ),
    }
}
