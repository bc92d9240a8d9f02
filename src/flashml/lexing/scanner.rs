//! Scanner: raw tokens to parser tokens
//!
//! After skipping whitespace, the scanner dispatches on the next raw token, in priority order:
//!
//!     1. `@` starts a tag; `@/` a closing tag. The tag name is the following word.
//!     2. `##` starts a comment that runs up to the next `##`.
//!     3. A word starting with a letter or `_` and immediately followed by `=` is an attribute
//!        name (the `=` is consumed with it).
//!     4. A quote starts an attribute value that runs up to the matching quote.
//!     5. Anything else starts text, which runs up to the next `@` or `##`.
//!
//! A word that is not followed by `=` is not consumed by rule 3: the scanner falls through to
//! rule 5 and the word becomes the start of a text token, so no input is lost.
//!
//! Tag terminators
//!
//!     An `@` written right after a tag name, or right after the closing quote of an attribute
//!     value, ends the tag head and is dropped. This allows the compact form
//!     `@velocista@@titulo@Hi@/titulo@@/velocista@`. An `@` followed by `/` is always the start
//!     of a closing tag instead.

use super::base_tokenization;
use super::tokens::{RawToken, Token, TokenKind};
use crate::flashml::ast::SourceLocation;
use crate::flashml::error::LexError;
use std::ops::Range;

pub struct Scanner<'a> {
    source: &'a str,
    raw: Vec<(RawToken, Range<usize>)>,
    cursor: usize,
    location: SourceLocation<'a>,
    tokens: Vec<Token>,
    /// Kind and end byte offset of the last emitted token
    last: Option<(TokenKind, usize)>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            raw: base_tokenization::tokenize(source),
            cursor: 0,
            location: SourceLocation::new(source),
            tokens: Vec::new(),
            last: None,
        }
    }

    /// Scan the whole source, stopping at the first lexical error
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace();
            let Some((raw, span)) = self.raw.get(self.cursor).cloned() else {
                break;
            };

            match raw {
                RawToken::At if self.at_tag_terminator(&span) => self.cursor += 1,
                RawToken::At => self.scan_tag(span)?,
                RawToken::CommentDelimiter => self.scan_comment(span)?,
                RawToken::Word if self.at_attribute_name() => self.scan_attribute_name(span),
                raw if raw.is_quote() => self.scan_attribute_value(raw, span)?,
                _ => self.scan_text(span),
            }
        }

        let end = self.location.end_position();
        self.tokens.push(Token::new(TokenKind::EndOfInput, "", end));
        Ok(self.tokens)
    }

    fn kind_at(&self, index: usize) -> Option<RawToken> {
        self.raw.get(index).map(|(raw, _)| *raw)
    }

    fn skip_whitespace(&mut self) {
        while self.kind_at(self.cursor) == Some(RawToken::Whitespace) {
            self.cursor += 1;
        }
    }

    fn emit(&mut self, kind: TokenKind, value: &str, start: usize, end: usize) {
        let position = self.location.byte_to_position(start);
        self.tokens.push(Token::new(kind, value, position));
        self.last = Some((kind, end));
    }

    /// Index of the next raw token of `kind` after the cursor
    fn find_after_cursor(&self, kind: RawToken) -> Option<usize> {
        self.raw
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, (raw, _))| *raw == kind)
            .map(|(index, _)| index)
    }

    fn at_tag_terminator(&self, span: &Range<usize>) -> bool {
        let follows_tag_head = matches!(
            self.last,
            Some((TokenKind::TagOpen | TokenKind::TagClose | TokenKind::AttributeValue, end))
                if end == span.start
        );
        follows_tag_head && self.kind_at(self.cursor + 1) != Some(RawToken::Slash)
    }

    fn at_attribute_name(&self) -> bool {
        let Some((RawToken::Word, span)) = self.raw.get(self.cursor) else {
            return false;
        };
        let starts_identifier = self.source[span.clone()]
            .starts_with(|c: char| c.is_ascii_alphabetic() || c == '_');
        starts_identifier && self.kind_at(self.cursor + 1) == Some(RawToken::Equals)
    }

    fn scan_tag(&mut self, span: Range<usize>) -> Result<(), LexError> {
        let source = self.source;
        self.cursor += 1;

        let closing = self.kind_at(self.cursor) == Some(RawToken::Slash);
        if closing {
            self.cursor += 1;
        }

        match self.raw.get(self.cursor).cloned() {
            Some((RawToken::Word, name_span)) => {
                self.cursor += 1;
                let kind = if closing {
                    TokenKind::TagClose
                } else {
                    TokenKind::TagOpen
                };
                self.emit(kind, &source[name_span.clone()], span.start, name_span.end);
                Ok(())
            }
            _ => Err(LexError::MissingTagName {
                position: self.location.byte_to_position(span.start),
            }),
        }
    }

    fn scan_comment(&mut self, span: Range<usize>) -> Result<(), LexError> {
        let source = self.source;
        match self.find_after_cursor(RawToken::CommentDelimiter) {
            Some(index) => {
                let close = self.raw[index].1.clone();
                self.emit(
                    TokenKind::Comment,
                    &source[span.end..close.start],
                    span.start,
                    close.end,
                );
                self.cursor = index + 1;
                Ok(())
            }
            None => Err(LexError::UnterminatedComment {
                start: self.location.byte_to_position(span.start),
                position: self.location.end_position(),
            }),
        }
    }

    fn scan_attribute_name(&mut self, span: Range<usize>) {
        let source = self.source;
        // The word is followed by `=`, checked by at_attribute_name
        let equals_end = self.raw[self.cursor + 1].1.end;
        self.emit(
            TokenKind::AttributeName,
            &source[span.clone()],
            span.start,
            equals_end,
        );
        self.cursor += 2;
    }

    fn scan_attribute_value(&mut self, quote: RawToken, span: Range<usize>) -> Result<(), LexError> {
        let source = self.source;
        match self.find_after_cursor(quote) {
            Some(index) => {
                let close = self.raw[index].1.clone();
                self.emit(
                    TokenKind::AttributeValue,
                    &source[span.end..close.start],
                    span.start,
                    close.end,
                );
                self.cursor = index + 1;
                Ok(())
            }
            None => Err(LexError::UnterminatedAttributeValue {
                quote: if quote == RawToken::DoubleQuote { '"' } else { '\'' },
                start: self.location.byte_to_position(span.start),
                position: self.location.end_position(),
            }),
        }
    }

    fn scan_text(&mut self, span: Range<usize>) {
        let source = self.source;
        let start = span.start;
        let mut end = span.end;
        self.cursor += 1;

        while let Some((raw, next)) = self.raw.get(self.cursor) {
            if raw.ends_text() {
                break;
            }
            end = next.end;
            self.cursor += 1;
        }

        self.emit(TokenKind::Text, &source[start..end], start, end);
    }
}
