//! Clipboard collaborator.
//!
//! OS integration lives in the host. A failed write is reported to the caller, which logs it and
//! carries on: no text mutation may depend on it.

/// Clipboard access failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The host refused access.
    #[error("clipboard access denied")]
    Denied,
    /// The clipboard is not available.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Plain-text clipboard.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Read the clipboard contents.
    fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
    deny_writes: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with [`ClipboardError::Denied`].
    pub fn denying() -> Self {
        Self {
            contents: String::new(),
            deny_writes: true,
        }
    }

    /// Current contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny_writes {
            return Err(ClipboardError::Denied);
        }
        self.contents = text.to_string();
        Ok(())
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }
}
