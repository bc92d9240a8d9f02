//! Token definitions for FlashML
//!
//! Two layers of tokens are involved in lexing:
//!
//!     Raw Tokens:
//!         Character-class level tokens produced by the logos lexer ([RawToken]). They carry no
//!         value; the scanner slices values out of the source using their byte spans. All raw
//!         token patterns are disjoint, so every input character belongs to exactly one of them.
//!
//!     Tokens:
//!         The tokens the parser consumes ([Token]): tags, attribute names and values, text,
//!         comments and a final end-of-input marker. They are assembled by the
//!         [scanner](super::scanner) from raw tokens.

use crate::flashml::ast::Position;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Character-level tokens produced by logos
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[token("@")]
    At,

    #[token("/")]
    Slash,

    #[token("##")]
    CommentDelimiter,

    // A lone hash is ordinary text
    #[token("#")]
    Hash,

    #[token("=")]
    Equals,

    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    #[regex(r"\s+")]
    Whitespace,

    // Identifier characters: tag names and attribute names are runs of these
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    // Everything else, including non-ASCII letters and punctuation
    #[regex(r#"[^@/#="'\sA-Za-z0-9_]+"#)]
    Other,
}

impl RawToken {
    pub fn is_quote(&self) -> bool {
        matches!(self, RawToken::DoubleQuote | RawToken::SingleQuote)
    }

    /// True for the raw tokens that end a run of text
    pub fn ends_text(&self) -> bool {
        matches!(self, RawToken::At | RawToken::CommentDelimiter)
    }
}

/// The kinds of tokens the parser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    TagOpen,
    TagClose,
    AttributeName,
    AttributeValue,
    Text,
    Comment,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::TagOpen => "opening tag",
            TokenKind::TagClose => "closing tag",
            TokenKind::AttributeName => "attribute name",
            TokenKind::AttributeValue => "attribute value",
            TokenKind::Text => "text",
            TokenKind::Comment => "comment",
            TokenKind::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// A token with its value and the position where it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True if this is a closing tag for `tag_name`
    pub fn closes(&self, tag_name: &str) -> bool {
        self.kind == TokenKind::TagClose && self.value == tag_name
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{} at {}", self.kind, self.position),
            _ => write!(f, "{} '{}' at {}", self.kind, self.value, self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_tag_characters() {
        assert_eq!(
            raw("@/titulo"),
            vec![RawToken::At, RawToken::Slash, RawToken::Word]
        );
    }

    #[test]
    fn test_comment_delimiter_is_longest_match() {
        assert_eq!(
            raw("### #"),
            vec![
                RawToken::CommentDelimiter,
                RawToken::Hash,
                RawToken::Whitespace,
                RawToken::Hash
            ]
        );
    }

    #[test]
    fn test_attribute_characters() {
        assert_eq!(
            raw("nombre=\"Barry\" alt='x'"),
            vec![
                RawToken::Word,
                RawToken::Equals,
                RawToken::DoubleQuote,
                RawToken::Word,
                RawToken::DoubleQuote,
                RawToken::Whitespace,
                RawToken::Word,
                RawToken::Equals,
                RawToken::SingleQuote,
                RawToken::Word,
                RawToken::SingleQuote,
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_other() {
        assert_eq!(
            raw("¡Soy más!"),
            vec![
                RawToken::Other,
                RawToken::Word,
                RawToken::Whitespace,
                RawToken::Word,
                RawToken::Other,
                RawToken::Word,
                RawToken::Other,
            ]
        );
    }

    #[test]
    fn test_token_closes() {
        let close = Token::new(TokenKind::TagClose, "titulo", Position::default());
        assert!(close.closes("titulo"));
        assert!(!close.closes("episodio"));
        assert!(!Token::new(TokenKind::TagOpen, "titulo", Position::default()).closes("titulo"));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::TagOpen, "velocista", Position::new(1, 1));
        assert_eq!(token.to_string(), "opening tag 'velocista' at 1:1");
        let eof = Token::new(TokenKind::EndOfInput, "", Position::new(3, 1));
        assert_eq!(eof.to_string(), "end of input at 3:1");
    }
}
