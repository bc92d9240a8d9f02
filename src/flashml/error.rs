//! Error types for the compilation pipeline
//!
//! There are three failure categories, in phase order:
//!
//!     Lexical ([LexError]) and syntactic ([SyntaxError]) errors are fatal: the first one aborts
//!     the compilation unit and no AST is produced.
//!
//!     Semantic problems are [Diagnostic]s. They are collected, never fatal on their own, but a
//!     non-empty list blocks both emitters; [CompileError::Semantic] carries the full list.

use crate::flashml::ast::Position;
use crate::flashml::lexing::TokenKind;
use crate::flashml::validation::Diagnostic;
use std::fmt;

/// Errors raised while scanning source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A `##` comment with no closing `##` before the end of input
    UnterminatedComment { start: Position, position: Position },
    /// A quoted attribute value with no matching closing quote
    UnterminatedAttributeValue {
        quote: char,
        start: Position,
        position: Position,
    },
    /// An `@` that is not followed by a tag name
    MissingTagName { position: Position },
}

impl LexError {
    /// Where scanning stopped
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedComment { position, .. }
            | LexError::UnterminatedAttributeValue { position, .. }
            | LexError::MissingTagName { position } => *position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedComment { start, position } => write!(
                f,
                "closing '##' not found for the comment opened at {} (end of input at {})",
                start, position
            ),
            LexError::UnterminatedAttributeValue {
                quote,
                start,
                position,
            } => write!(
                f,
                "closing quote {} not found for the attribute value opened at {} (end of input at {})",
                quote, start, position
            ),
            LexError::MissingTagName { position } => {
                write!(f, "expected a tag name after '@' at {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised while building the AST from tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A token that cannot appear where it was found
    UnexpectedToken {
        expected: Option<TokenKind>,
        found: TokenKind,
        value: String,
        position: Position,
    },
    /// Input ended before the closing tag of an open element
    MissingClosingTag {
        tag: String,
        opened_at: Position,
        position: Position,
    },
    /// An opening tag nested deeper than the parser accepts
    NestingTooDeep {
        tag: String,
        limit: usize,
        position: Position,
    },
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::MissingClosingTag { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken {
                expected: Some(expected),
                found,
                value,
                position,
            } => write!(
                f,
                "expected {}, found {} '{}' at {}",
                expected, found, value, position
            ),
            SyntaxError::UnexpectedToken {
                expected: None,
                found,
                value,
                position,
            } => write!(f, "unexpected {} '{}' at {}", found, value, position),
            SyntaxError::MissingClosingTag {
                tag,
                opened_at,
                position,
            } => write!(
                f,
                "missing closing tag for '{}' opened at {} (end of input at {})",
                tag, opened_at, position
            ),
            SyntaxError::NestingTooDeep {
                tag,
                limit,
                position,
            } => write!(
                f,
                "'{}' at {} is nested more than {} elements deep",
                tag, position, limit
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Why a compilation unit produced no output
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Lexical(LexError),
    Syntax(SyntaxError),
    Semantic(Vec<Diagnostic>),
}

impl CompileError {
    /// Human readable messages, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            CompileError::Lexical(err) => vec![format!("lexical error: {}", err)],
            CompileError::Syntax(err) => vec![format!("syntax error: {}", err)],
            CompileError::Semantic(diagnostics) => diagnostics
                .iter()
                .map(|diagnostic| diagnostic.to_string())
                .collect(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lexical(err) => write!(f, "lexical error: {}", err),
            CompileError::Syntax(err) => write!(f, "syntax error: {}", err),
            CompileError::Semantic(diagnostics) => {
                write!(f, "{} semantic error(s)", diagnostics.len())?;
                for diagnostic in diagnostics {
                    write!(f, "\n  - {}", diagnostic)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lexical(err) => Some(err),
            CompileError::Syntax(err) => Some(err),
            CompileError::Semantic(_) => None,
        }
    }
}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lexical(err)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}
