//! Line index
//!
//! Converts between character offsets and `(line, column)` positions using a Rope, giving
//! O(log N) lookups on large view texts.

use crate::Position;
use ropey::Rope;

/// Logical line index over a text - implemented using a Rope.
///
/// Only `'\n'` is treated as a line break, matching how the rest of the kernel splits lines.
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an index over an empty text.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the position of a character offset (clamped to the end of the text).
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(line);

        Position::new(line, char_offset - line_start)
    }

    /// Get the character offset of a position; line and column are clamped.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(line);
        line_start + column.min(self.line_len(line))
    }

    /// Character offset of the first character of `line`.
    pub fn line_start_offset(&self, line: usize) -> usize {
        self.position_to_char_offset(line, 0)
    }

    /// Character offset just past the last character of `line` (before its newline).
    pub fn line_end_offset(&self, line: usize) -> usize {
        self.position_to_char_offset(line, usize::MAX)
    }

    /// Length of `line` in characters, excluding the newline.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let start = self.rope.line_to_char(line);
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - start - 1
        } else {
            self.rope.len_chars() - start
        }
    }

    /// Total line count (an empty text has one line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Text of `line` without its newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Text between two character offsets (clamped, order-insensitive).
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        self.rope.slice(start..end).to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
