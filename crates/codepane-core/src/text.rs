//! Span/offset helpers shared by the mapper, change detector and editor.
//!
//! All offsets are character offsets (Unicode scalar values), the unit selection offsets use.

use unicode_segmentation::UnicodeSegmentation;

/// Zero-based line and column (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column in characters within the line.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A selection in character offsets; `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    /// Anchor offset.
    pub start: usize,
    /// Active offset.
    pub end: usize,
}

impl Selection {
    /// Create a selection.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Lower bound.
    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    /// Upper bound.
    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    /// Clamp both ends to `len`.
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// Split text into lines on `'\n'`; `N` newlines always give `N + 1` lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Number of lines in `text`, the length [`split_lines`] would return.
pub fn line_count(text: &str) -> usize {
    count_newlines(text) + 1
}

/// Number of `'\n'` characters in `text`.
pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character offset `char_offset` (clamped to the end).
pub fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(i, _)| i)
}

/// Replace the characters in `[start, end)` with `insert`.
pub fn replace_range(text: &str, start: usize, end: usize, insert: &str) -> String {
    let (start, end) = (start.min(end), start.max(end));
    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);

    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..start_byte]);
    out.push_str(insert);
    out.push_str(&text[end_byte..]);
    out
}

/// Leading whitespace width of a line, in characters.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Offset of the grapheme boundary before `offset`, or `None` at the start of the text.
///
/// A `"\r\n"` pair or an emoji sequence is removed by a single Backspace.
pub fn prev_grapheme_offset(text: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    let before = &text[..byte_index(text, offset)];
    let last = before.graphemes(true).next_back()?;
    Some(offset - char_len(last))
}

/// Offset of the grapheme boundary after `offset`, or `None` at the end of the text.
pub fn next_grapheme_offset(text: &str, offset: usize) -> Option<usize> {
    let after = &text[byte_index(text, offset)..];
    let next = after.graphemes(true).next()?;
    Some(offset + char_len(next))
}
