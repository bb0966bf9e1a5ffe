//! Change detector
//!
//! Turns an edit event (a key press or a paste) into a [`ChangeDescriptor`]: what kind of change
//! it is, which full-document lines it touches and how the line counts move. Pure computation.

use crate::fold_store::FoldStore;
use crate::line_index::LineIndex;
use crate::text::{
    Selection, char_len, count_newlines, next_grapheme_offset, prev_grapheme_offset,
    replace_range,
};
use tracing::trace;

/// A key reaching the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Anything that does not edit text (arrows, modifiers...).
    Other,
}

/// An edit event reported by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// A key press.
    Key(Key),
    /// A paste of the given text.
    Paste(String),
}

/// Kind of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// Text was only added.
    Insertion,
    /// Text was only removed.
    Deletion,
    /// Text was removed and added.
    Replacement,
}

/// A replacement of the view characters `[start, end)` by `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEdit {
    /// Start character offset.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Replacement text.
    pub text: String,
}

impl ViewEdit {
    /// Replace the selected characters with `text`.
    pub fn replace_selection(selection: Selection, text: impl Into<String>) -> Self {
        Self {
            start: selection.min(),
            end: selection.max(),
            text: text.into(),
        }
    }

    /// Resolve `event` against the view text and selection.
    ///
    /// Returns `None` when the event does not edit text: Backspace at offset 0, Delete at the
    /// end, an empty paste over an empty selection, or a non-editing key. Tab and Shift+Tab are
    /// left to the editor, which knows the configured indent.
    pub fn from_event(event: &EditEvent, view: &str, selection: Selection) -> Option<Self> {
        let selection = selection.clamped(char_len(view));
        let edit = match event {
            EditEvent::Key(Key::Char(ch)) => Self::replace_selection(selection, ch.to_string()),
            EditEvent::Key(Key::Enter) => Self::replace_selection(selection, "\n"),
            EditEvent::Key(Key::Backspace) if selection.is_empty() => {
                let caret = selection.start;
                Self {
                    start: prev_grapheme_offset(view, caret)?,
                    end: caret,
                    text: String::new(),
                }
            }
            EditEvent::Key(Key::Delete) if selection.is_empty() => {
                let caret = selection.start;
                Self {
                    start: caret,
                    end: next_grapheme_offset(view, caret)?,
                    text: String::new(),
                }
            }
            EditEvent::Key(Key::Backspace | Key::Delete) => {
                Self::replace_selection(selection, String::new())
            }
            EditEvent::Paste(data) => Self::replace_selection(selection, data.clone()),
            EditEvent::Key(Key::Tab | Key::ShiftTab | Key::Other) => return None,
        };

        if edit.is_noop() {
            return None;
        }
        Some(edit)
    }

    /// Whether the edit changes nothing.
    pub fn is_noop(&self) -> bool {
        self.start == self.end && self.text.is_empty()
    }

    /// Apply the edit to `view`.
    pub fn apply(&self, view: &str) -> String {
        replace_range(view, self.start, self.end, &self.text)
    }

    /// Caret offset right after the inserted text.
    pub fn caret_after(&self) -> usize {
        self.start + char_len(&self.text)
    }
}

/// Structured description of one edit, in full-document line coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDescriptor {
    /// Kind of change.
    pub change_type: ChangeType,
    /// Full line where the edit starts.
    pub start_line: usize,
    /// Full line where the removed range ends (equals `start_line` for insertions).
    pub end_line: usize,
    /// Character offset of the edit in the view text.
    pub start_pos: usize,
    /// Inserted text.
    pub data: String,
    /// Removed view text.
    pub removed: String,
    /// View line count delta.
    pub line_count_change: isize,
    /// Full line count delta.
    pub logical_count_change: isize,
}

impl ChangeDescriptor {
    /// Describe `edit` applied to `view` under `store`; `None` for a no-op edit.
    pub fn from_view_edit(edit: &ViewEdit, view: &str, store: &FoldStore) -> Option<Self> {
        if edit.is_noop() {
            return None;
        }

        let index = LineIndex::from_text(view);
        let (start, end) = (edit.start.min(edit.end), edit.start.max(edit.end));
        let first = index.char_offset_to_position(start).line;
        let last = index.char_offset_to_position(end).line;
        let start_line = store.view_line_to_full(first);
        let end_line = store.view_line_to_full(last);

        let removed = index.slice(start, end);
        let inserted = count_newlines(&edit.text) as isize;

        let change_type = match (edit.text.is_empty(), removed.is_empty()) {
            (false, true) => ChangeType::Insertion,
            (true, false) => ChangeType::Deletion,
            _ => ChangeType::Replacement,
        };

        let change = Self {
            change_type,
            start_line,
            end_line,
            start_pos: start,
            data: edit.text.clone(),
            removed,
            line_count_change: inserted - (last - first) as isize,
            logical_count_change: inserted - (end_line - start_line) as isize,
        };
        trace!(
            change_type = ?change.change_type,
            start_line = change.start_line,
            end_line = change.end_line,
            line_delta = change.line_count_change,
            logical_delta = change.logical_count_change,
            "change detected"
        );
        Some(change)
    }

    /// Number of newlines inserted.
    pub fn inserted_lines(&self) -> usize {
        count_newlines(&self.data)
    }

    /// Number of view newlines removed.
    pub fn removed_lines(&self) -> usize {
        count_newlines(&self.removed)
    }

    /// Split a replacement into a deletion followed by an insertion at the same place.
    ///
    /// Other changes are returned as-is.
    pub fn split(&self) -> Vec<ChangeDescriptor> {
        if self.change_type != ChangeType::Replacement {
            return vec![self.clone()];
        }

        let inserted = self.inserted_lines() as isize;
        let deletion = Self {
            change_type: ChangeType::Deletion,
            data: String::new(),
            line_count_change: -(self.removed_lines() as isize),
            logical_count_change: -((self.end_line - self.start_line) as isize),
            ..self.clone()
        };
        let insertion = Self {
            change_type: ChangeType::Insertion,
            end_line: self.start_line,
            removed: String::new(),
            line_count_change: inserted,
            logical_count_change: inserted,
            ..self.clone()
        };
        vec![deletion, insertion]
    }
}

/// Resolve `event` and describe it. `None` when the event does not edit text.
pub fn detect(
    event: &EditEvent,
    view: &str,
    selection: Selection,
    store: &FoldStore,
) -> Option<ChangeDescriptor> {
    let edit = ViewEdit::from_event(event, view, selection)?;
    ChangeDescriptor::from_view_edit(&edit, view, store)
}
