//! Gutter model: line numbers, fold markers and indentation guides per view line.
//!
//! Line numbers are full-document numbers, so they jump over folded blocks.

use crate::fold_store::FoldStore;
use crate::mapper::expand;
use crate::text::split_lines;
use crate::toggle::is_fold_header;
use codepane_lang::FoldStrategy;
use unicode_width::UnicodeWidthStr;

/// Fold glyph shown next to a line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldMarker {
    /// Not a block header.
    None,
    /// An open block header.
    Expanded,
    /// A folded header hiding `hidden` full lines.
    Collapsed {
        /// Full lines hidden below the header, nested blocks included.
        hidden: usize,
    },
}

/// One gutter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterLine {
    /// View line index.
    pub view_line: usize,
    /// Full line index (display `full_line + 1`).
    pub full_line: usize,
    /// Fold glyph.
    pub marker: FoldMarker,
    /// Number of indentation guides drawn before the number.
    pub guides: usize,
    /// Display column where a collapsed placeholder goes, for folded headers.
    pub placeholder_column: Option<usize>,
}

/// Build the gutter for a view text.
///
/// A guide opens after a line ending in `{` (unless folded) or `(`, and closes before a line
/// starting with `}` or `)`.
pub fn gutter_lines(view_text: &str, store: &FoldStore, strategy: FoldStrategy) -> Vec<GutterLine> {
    let expanded = expand(view_text, store);
    let full_lines = expanded.full_lines();
    let view_lines = split_lines(view_text);

    let mut depth = 0usize;
    let mut out = Vec::with_capacity(view_lines.len());

    for (view_line, line) in view_lines.iter().enumerate() {
        let full_line = expanded.view_to_full[view_line];
        let folded = store.contains(full_line);

        let marker = if folded {
            FoldMarker::Collapsed {
                hidden: store.total_span(full_line),
            }
        } else if is_fold_header(&full_lines, full_line, strategy) {
            FoldMarker::Expanded
        } else {
            FoldMarker::None
        };

        out.push(GutterLine {
            view_line,
            full_line,
            marker,
            guides: depth,
            placeholder_column: folded.then(|| line.trim_end().width() + 1),
        });

        let trimmed = line.trim();
        if (trimmed.ends_with('{') && !folded) || trimmed.ends_with('(') {
            depth += 1;
        }
        let next = view_lines.get(view_line + 1).map(|l| l.trim_start());
        if next.is_some_and(|l| l.starts_with('}') || l.starts_with(')')) {
            depth = depth.saturating_sub(1);
        }
    }
    out
}
