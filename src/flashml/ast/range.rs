//! Position tracking for source code locations
//!
//! The scanner works on byte offsets (logos spans), while every token and diagnostic reports a
//! human `line:column` position. [SourceLocation] converts between the two.
//!
//! - Lines and columns are 1-based: the first character of a file is at `1:1`.
//! - Columns count characters, not bytes, so multi-byte UTF-8 text reports the column a reader
//!   would see in an editor.
//! - Byte-to-position conversion is a binary search over line starts. The column of the last
//!   lookup is cached, so increasing offsets on one line only count the characters in between
//!   and a scan over a single long line stays linear.

use serde::Serialize;
use std::cell::Cell;
use std::fmt;

/// A position in source code (line and column, both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    /// Last lookup as (line index, byte offset, 0-based column)
    last: Cell<Option<(usize, usize, usize)>>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
            last: Cell::new(None),
        }
    }

    /// Convert a byte offset to a line/column position
    ///
    /// Offsets past the end of the source clamp to the end-of-input position.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let (from, base) = match self.last.get() {
            Some((last_line, last_offset, last_column))
                if last_line == line && last_offset <= byte_offset =>
            {
                (last_offset, last_column)
            }
            _ => (self.line_starts[line], 0),
        };
        let column = base
            + self
                .source
                .get(from..byte_offset)
                .map(|between| between.chars().count())
                .unwrap_or(byte_offset - from);
        self.last.set(Some((line, byte_offset, column)));

        Position::new(line + 1, column + 1)
    }

    /// Position just past the last character of the source
    pub fn end_position(&self) -> Position {
        self.byte_to_position(self.source.len())
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn test_first_character_is_one_one() {
        let location = SourceLocation::new("@velocista");
        assert_eq!(location.byte_to_position(0), Position::new(1, 1));
    }

    #[test]
    fn test_newline_resets_column() {
        let source = "ab\ncd\n\nef";
        let location = SourceLocation::new(source);

        assert_eq!(location.byte_to_position(1), Position::new(1, 2));
        assert_eq!(location.byte_to_position(2), Position::new(1, 3)); // the newline itself
        assert_eq!(location.byte_to_position(3), Position::new(2, 1));
        assert_eq!(location.byte_to_position(6), Position::new(3, 1));
        assert_eq!(location.byte_to_position(7), Position::new(4, 1));
        assert_eq!(location.line_count(), 4);
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        // "¡" and "á" are two bytes each
        let source = "¡Sí! más";
        let location = SourceLocation::new(source);
        let offset = source.find('m').unwrap();

        assert_eq!(location.byte_to_position(offset), Position::new(1, 6));
    }

    #[test]
    fn test_end_position() {
        assert_eq!(SourceLocation::new("").end_position(), Position::new(1, 1));
        assert_eq!(SourceLocation::new("abc").end_position(), Position::new(1, 4));
        assert_eq!(SourceLocation::new("abc\n").end_position(), Position::new(2, 1));
    }

    #[test]
    fn test_out_of_order_lookups_match_fresh_ones() {
        let source = "@velocista ¡rápido!\n  @titulo más @/titulo";
        let location = SourceLocation::new(source);
        let offsets: Vec<usize> = source.char_indices().map(|(offset, _)| offset).collect();

        let forward: Vec<_> = offsets
            .iter()
            .map(|&offset| location.byte_to_position(offset))
            .collect();
        let backward: Vec<_> = offsets
            .iter()
            .rev()
            .map(|&offset| location.byte_to_position(offset))
            .collect();
        let fresh: Vec<_> = offsets
            .iter()
            .map(|&offset| SourceLocation::new(source).byte_to_position(offset))
            .collect();

        assert_eq!(forward, fresh);
        assert_eq!(backward.into_iter().rev().collect::<Vec<_>>(), fresh);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let location = SourceLocation::new("ab");
        assert_eq!(location.byte_to_position(99), Position::new(1, 3));
    }
}
