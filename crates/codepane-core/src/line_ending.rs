//! Newline handling at the editor's edges.
//!
//! Fold keys, view lines and change descriptors all count `'\n'` only, so a stray `'\r'` would
//! shift every line mapping. [`Editor::new`](crate::Editor::new) normalizes the loaded text and
//! every paste goes through [`LineEnding::normalize`]. The ending found on load is kept and
//! applied again by [`Editor::full_text_with_line_ending`](crate::Editor::full_text_with_line_ending).

/// Newline sequence a document was loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `"\n"`, also what the editor works in.
    #[default]
    Lf,
    /// `"\r\n"`.
    Crlf,
}

impl LineEnding {
    /// Ending to write back for a loaded text: CRLF as soon as one `"\r\n"` appears.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Text the editor can hold: CRLF pairs and lone CRs become `'\n'`.
    pub fn normalize(text: &str) -> String {
        if !text.contains('\r') {
            return text.to_string();
        }
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Full document text as it should be saved.
    pub fn for_saving(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}
