//! The editable surface contract.
//!
//! The kernel never assumes a rendering technology. A surface holds the view text and a
//! selection; the editor reads and writes both through [`TextSurface`].

use crate::text::{Selection, char_len};

/// A text control with a selection in character offsets.
pub trait TextSurface {
    /// Current view text.
    fn text(&self) -> &str;

    /// Replace the whole view text.
    fn set_text(&mut self, text: String);

    /// Current selection.
    fn selection(&self) -> Selection;

    /// Set the selection; implementations clamp it to the text.
    fn set_selection(&mut self, selection: Selection);
}

/// In-memory surface used by hosts without a real text control, and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSurface {
    text: String,
    selection: Selection,
}

impl BufferSurface {
    /// Create a surface with the caret at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: Selection::default(),
        }
    }

    /// Builder: set the initial selection.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.set_selection(selection);
        self
    }
}

impl TextSurface for BufferSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.selection = self.selection.clamped(char_len(&self.text));
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(char_len(&self.text));
    }
}
