//! Recursive-descent parser
//!
//! Grammar, over parser tokens:
//!
//!     document  := node* EndOfInput
//!     node      := element | Text | Comment
//!     element   := TagOpen(X) (AttributeName AttributeValue)* node* TagClose(X)
//!
//! Matching a closing tag is a name comparison at each level. An inner element is fully parsed
//! (closing tag included) before the outer loop resumes looking for its own closing tag, so
//! repeated tag names nest correctly without an explicit stack.
//!
//! Nesting is capped at [MAX_NESTING_DEPTH] elements. Every later phase walks the tree
//! recursively, so the cap bounds their stack use as well.

use crate::flashml::ast::{CommentNode, Document, Element, Node, Position, TextNode};
use crate::flashml::error::SyntaxError;
use crate::flashml::lexing::{Token, TokenKind};
use std::iter::Peekable;
use std::vec::IntoIter;

/// Deepest element nesting accepted by the parser
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    end_of_input: Token,
    /// Number of elements currently open
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end_position = tokens
            .last()
            .map(|token| token.position)
            .unwrap_or_default();
        Self {
            tokens: tokens.into_iter().peekable(),
            end_of_input: Token::new(TokenKind::EndOfInput, "", end_position),
            depth: 0,
        }
    }

    /// The lookahead token; a stream without an explicit terminator ends here
    fn current(&mut self) -> &Token {
        self.tokens.peek().unwrap_or(&self.end_of_input)
    }

    fn current_kind(&mut self) -> TokenKind {
        self.current().kind
    }

    fn advance(&mut self) -> Token {
        self.tokens
            .next()
            .unwrap_or_else(|| self.end_of_input.clone())
    }

    /// Consume the current token if it has the expected kind
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.current_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(Some(kind)))
        }
    }

    fn unexpected(&mut self, expected: Option<TokenKind>) -> SyntaxError {
        let found = self.current();
        SyntaxError::UnexpectedToken {
            expected,
            found: found.kind,
            value: found.value.clone(),
            position: found.position,
        }
    }

    pub fn parse_document(mut self) -> Result<Document, SyntaxError> {
        let mut document = Document::new();
        while self.current_kind() != TokenKind::EndOfInput {
            document.children.push(self.parse_node()?);
        }
        Ok(document)
    }

    fn parse_node(&mut self) -> Result<Node, SyntaxError> {
        match self.current_kind() {
            TokenKind::TagOpen => self.parse_element().map(Node::Element),
            TokenKind::Text => {
                let token = self.advance();
                Ok(Node::Text(TextNode::new(token.value, token.position)))
            }
            TokenKind::Comment => {
                let token = self.advance();
                Ok(Node::Comment(CommentNode::new(token.value, token.position)))
            }
            _ => Err(self.unexpected(None)),
        }
    }

    fn parse_element(&mut self) -> Result<Element, SyntaxError> {
        let open = self.expect(TokenKind::TagOpen)?;
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                tag: open.value,
                limit: MAX_NESTING_DEPTH,
                position: open.position,
            });
        }
        let mut element = Element::new(open.value, open.position);

        while self.current_kind() == TokenKind::AttributeName {
            let name = self.advance();
            let value = self.expect(TokenKind::AttributeValue)?;
            element.attributes.insert(name.value, value.value);
        }

        self.depth += 1;
        loop {
            let current = self.current();
            if current.closes(&element.tag_name) {
                break;
            }
            if current.is(TokenKind::EndOfInput) {
                return Err(missing_closing_tag(&element, current.position));
            }
            let child = self.parse_node()?;
            element.children.push(child);
        }

        self.depth -= 1;
        self.expect(TokenKind::TagClose)?;
        Ok(element)
    }
}

fn missing_closing_tag(element: &Element, position: Position) -> SyntaxError {
    SyntaxError::MissingClosingTag {
        tag: element.tag_name.clone(),
        opened_at: element.position,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashml::lexing::tokenize;
    use crate::flashml::parsing::parse;
    use crate::flashml::testing::assert_ast;

    fn parse_source(source: &str) -> Result<Document, SyntaxError> {
        parse(tokenize(source).expect("source to tokenize"))
    }

    #[test]
    fn test_empty_document() {
        let doc = parse_source("").unwrap();
        assert_ast(&doc).child_count(0);
    }

    #[test]
    fn test_missing_end_of_input_token_is_tolerated() {
        let tokens = vec![Token::new(TokenKind::Text, "Hola", Position::new(1, 1))];
        let doc = parse(tokens).unwrap();
        assert_ast(&doc).child_count(1);
    }

    #[test]
    fn test_nested_elements() {
        let doc = parse_source("@velocista@@titulo@Hi@/titulo@@/velocista@").unwrap();

        assert_ast(&doc).child_count(1).element(0, |velocista| {
            velocista.tag("velocista").child_count(1).element(0, |titulo| {
                titulo.tag("titulo").child_count(1).text(0, "Hi");
            });
        });
    }

    #[test]
    fn test_attributes_last_duplicate_wins() {
        let doc = parse_source(
            r#"@personaje nombre="Barry" actor="Grant Gustin" nombre="Wally" @/personaje"#,
        )
        .unwrap();

        assert_ast(&doc).element(0, |personaje| {
            personaje
                .attribute_count(2)
                .attribute("nombre", "Wally")
                .attribute("actor", "Grant Gustin")
                .child_count(0);
        });
    }

    #[test]
    fn test_repeated_tag_names_nest() {
        let doc = parse_source("@poder @poder rayo @/poder @/poder").unwrap();

        assert_ast(&doc).child_count(1).element(0, |outer| {
            outer.tag("poder").child_count(1).element(0, |inner| {
                inner.tag("poder").text(0, "rayo ");
            });
        });
    }

    #[test]
    fn test_mixed_content_order() {
        let doc =
            parse_source("@dialogo ¡Soy @rapido el más rápido @/rapido del mundo! @/dialogo")
                .unwrap();

        assert_ast(&doc).element(0, |dialogo| {
            dialogo
                .child_count(3)
                .text(0, "¡Soy ")
                .element(1, |rapido| {
                    rapido.tag("rapido").text(0, "el más rápido ");
                })
                .text(2, "del mundo! ");
        });
    }

    #[test]
    fn test_comments_become_nodes() {
        let doc = parse_source("## inicio ## @velocista ## dentro ## @/velocista").unwrap();

        assert_ast(&doc)
            .child_count(2)
            .comment(0, " inicio ")
            .element(1, |velocista| {
                velocista.comment(0, " dentro ");
            });
    }

    #[test]
    fn test_missing_closing_tag() {
        let err = parse_source("@velocista @titulo Hola @/velocista").unwrap_err();

        // The velocista closer is a stray token inside the still-open titulo
        assert!(matches!(
            err,
            SyntaxError::UnexpectedToken {
                found: TokenKind::TagClose,
                ..
            }
        ));

        let err = parse_source("@velocista @titulo Hola").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::MissingClosingTag {
                tag: "titulo".to_string(),
                opened_at: Position::new(1, 12),
                position: Position::new(1, 24),
            }
        );
    }

    #[test]
    fn test_stray_closing_tag() {
        let err = parse_source("@/velocista").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                expected: None,
                found: TokenKind::TagClose,
                value: "velocista".to_string(),
                position: Position::new(1, 1),
            }
        );
    }

    #[test]
    fn test_attribute_name_without_value() {
        let err = parse_source("@imagen src= @/imagen").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                expected: Some(TokenKind::AttributeValue),
                found: TokenKind::TagClose,
                value: "imagen".to_string(),
                position: Position::new(1, 14),
            }
        );
    }

    #[test]
    fn test_attribute_outside_tag_head() {
        let err = parse_source(r#"nombre="Barry""#).unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::UnexpectedToken {
                found: TokenKind::AttributeName,
                ..
            }
        ));
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let source = format!(
            "{}{}",
            "@poder ".repeat(MAX_NESTING_DEPTH),
            "@/poder ".repeat(MAX_NESTING_DEPTH)
        );
        let doc = parse_source(&source).unwrap();
        assert_eq!(doc.element_count(), MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_nesting_past_the_limit_is_an_error() {
        let source = format!(
            "{}{}",
            "@poder ".repeat(MAX_NESTING_DEPTH + 1),
            "@/poder ".repeat(MAX_NESTING_DEPTH + 1)
        );
        let err = parse_source(&source).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::NestingTooDeep {
                tag: "poder".to_string(),
                limit: MAX_NESTING_DEPTH,
                position: Position::new(1, 7 * MAX_NESTING_DEPTH + 1),
            }
        );
    }

    #[test]
    fn test_element_count_matches_tag_pairs() {
        let doc = parse_source(
            "@velocista @temporada numero=\"1\" @episodio @titulo Piloto @/titulo @/episodio @/temporada @/velocista",
        )
        .unwrap();
        assert_eq!(doc.element_count(), 4);
    }
}
