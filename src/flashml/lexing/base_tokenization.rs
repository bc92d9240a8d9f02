//! Base tokenization for the flashml lexer
//!
//! This is the entry point where source strings become raw token streams, using the logos
//! lexer. The [scanner](super::scanner) assembles parser tokens from this stream.

use super::tokens::RawToken;
use logos::Logos;
use std::ops::Range;

/// Tokenize source text into raw tokens paired with their byte spans
///
/// Raw token patterns cover every character, so logos should never report an error; if it
/// does, the span is kept as [RawToken::Other] so no input is ever dropped.
pub fn tokenize(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(RawToken::Other), lexer.span()));
    }

    tokens
}
