//! Fold toggle engine
//!
//! Finds block boundaries (brace depth or indentation) and folds/unfolds a block by moving its
//! lines between the view text and the [`FoldStore`].

use crate::fold_store::FoldStore;
use crate::mapper::expand;
use crate::text::{indent_width, split_lines};
use codepane_lang::FoldStrategy;
use tracing::debug;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldAction {
    /// The block under `header` was hidden.
    Folded {
        /// Header line (full coordinates).
        header: usize,
        /// Number of view lines removed.
        hidden: usize,
    },
    /// The block under `header` was shown again.
    Unfolded {
        /// Header line (full coordinates).
        header: usize,
        /// Number of view lines restored.
        restored: usize,
    },
}

/// Result of a successful [`toggle_fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// New view text.
    pub text: String,
    /// New fold store.
    pub store: FoldStore,
    /// What happened.
    pub action: FoldAction,
}

/// Last line of the block opened by `lines[header]`, or `None` when it does not open one.
///
/// * Braces: depth starts at the header's unmatched `{` count; the block ends on the line where
///   it returns to 0.
/// * Indentation: the block extends while lines are blank or indented deeper than the header.
///   Trailing blank lines are not part of it.
pub fn find_block_end(lines: &[&str], header: usize, strategy: FoldStrategy) -> Option<usize> {
    let header_line = lines.get(header)?;

    match strategy {
        FoldStrategy::Braces => {
            let mut depth = 0usize;
            for ch in header_line.chars() {
                match ch {
                    '{' => depth += 1,
                    '}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            if depth == 0 {
                return None;
            }

            for (i, line) in lines.iter().enumerate().skip(header + 1) {
                for ch in line.chars() {
                    match ch {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                return Some(i);
                            }
                        }
                        _ => {}
                    }
                }
            }
            None
        }
        FoldStrategy::Indentation => {
            if header_line.trim().is_empty() {
                return None;
            }
            let base = indent_width(header_line);
            let mut end = None;
            for (i, line) in lines.iter().enumerate().skip(header + 1) {
                if line.trim().is_empty() {
                    continue;
                }
                if indent_width(line) <= base {
                    break;
                }
                end = Some(i);
            }
            end
        }
    }
}

/// Whether `lines[line]` opens a foldable block.
pub fn is_fold_header(lines: &[&str], line: usize, strategy: FoldStrategy) -> bool {
    find_block_end(lines, line, strategy).is_some()
}

/// Insert `hidden` right after view line `view_line`. `None` when the line does not exist.
pub fn unfold_lines(text: &str, view_line: usize, hidden: &[String]) -> Option<String> {
    let mut lines = split_lines(text);
    if view_line >= lines.len() {
        return None;
    }
    let at = view_line + 1;
    lines.splice(at..at, hidden.iter().map(String::as_str));
    Some(lines.join("\n"))
}

/// Fold or unfold the block whose header is view line `view_line` / full line `header_key`.
///
/// Returns `None` (and changes nothing) when the line is out of range, when `header_key` does not
/// match `view_line`, or when no block boundary is found.
pub fn toggle_fold(
    view_line: usize,
    header_key: usize,
    view_text: &str,
    store: &FoldStore,
    strategy: FoldStrategy,
) -> Option<ToggleOutcome> {
    if let Some(hidden) = store.get(header_key) {
        let Some(text) = unfold_lines(view_text, view_line, hidden) else {
            debug!(view_line, header_key, "unfold target line out of range");
            return None;
        };
        let mut store = store.clone();
        store.remove(header_key);
        return Some(ToggleOutcome {
            text,
            store,
            action: FoldAction::Unfolded {
                header: header_key,
                restored: hidden.len(),
            },
        });
    }

    let expanded = expand(view_text, store);
    if expanded.full_line(view_line) != Some(header_key) {
        debug!(view_line, header_key, "fold header does not match the view line");
        return None;
    }

    let full_lines = expanded.full_lines();
    let Some(block_end) = find_block_end(&full_lines, header_key, strategy) else {
        debug!(header_key, ?strategy, "no block boundary; nothing to fold");
        return None;
    };

    let mut kept = Vec::new();
    let mut hidden = Vec::new();
    for (line, full) in split_lines(view_text).into_iter().zip(&expanded.view_to_full) {
        if *full > header_key && *full <= block_end {
            hidden.push(line.to_string());
        } else {
            kept.push(line);
        }
    }

    let hidden_count = hidden.len();
    let mut store = store.clone();
    if !store.insert(header_key, hidden) {
        debug!(header_key, "block has no visible body; nothing to fold");
        return None;
    }

    Some(ToggleOutcome {
        text: kept.join("\n"),
        store,
        action: FoldAction::Folded {
            header: header_key,
            hidden: hidden_count,
        },
    })
}
