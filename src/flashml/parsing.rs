//! Parsing for FlashML
//!
//!     A recursive-descent parser with a single token of lookahead turns the token vector into a
//!     [Document]. Element nesting is enforced structurally: every [Element] in the result came
//!     from an opening tag and a closing tag with the same name.
//!
//!     The parser only checks syntax. Whether a tag exists, where it may appear and which
//!     attributes it takes are questions for [validation](crate::flashml::validation).

pub mod parser;

pub use parser::{Parser, MAX_NESTING_DEPTH};

use crate::flashml::ast::Document;
use crate::flashml::error::SyntaxError;
use crate::flashml::lexing::Token;

/// Parse a token vector into a document
pub fn parse(tokens: Vec<Token>) -> Result<Document, SyntaxError> {
    Parser::new(tokens).parse_document()
}
