//! Lexing for FlashML
//!
//!     Lexing happens in two steps:
//!
//!     1. [base_tokenization] runs the logos lexer and produces raw, character-class tokens with
//!        byte spans.
//!     2. The [scanner] walks the raw stream and applies the FlashML dispatch rules (tags,
//!        comments, attribute names, quoted values, text), producing the [Token]s the parser
//!        consumes. Token values are slices of the source; positions are computed from spans.
//!
//!     The token vector always ends with exactly one [TokenKind::EndOfInput] token carrying the
//!     final position.

pub mod base_tokenization;
pub mod scanner;
pub mod tokens;

pub use scanner::Scanner;
pub use tokens::{RawToken, Token, TokenKind};

use crate::flashml::error::LexError;

/// Convert FlashML source into parser tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan()
}
