//! View ↔ full mapper
//!
//! Reconstructs the fully expanded document from the view text and the [`FoldStore`], and
//! strips it back down again. The full document only ever exists transiently.

use crate::fold_store::FoldStore;
use crate::text::{line_count, split_lines};
use tracing::warn;

/// Result of [`expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedView {
    /// The document with every fold opened.
    pub full_text: String,
    /// `view_to_full[i]` is the full line index of view line `i`.
    pub view_to_full: Vec<usize>,
}

impl ExpandedView {
    /// Lines of the full document.
    pub fn full_lines(&self) -> Vec<&str> {
        split_lines(&self.full_text)
    }

    /// Full line index of `view_line`, if it exists.
    pub fn full_line(&self, view_line: usize) -> Option<usize> {
        self.view_to_full.get(view_line).copied()
    }
}

/// Splice every fold's hidden lines back under its header.
///
/// Keys are processed in ascending order. When key `k` is reached every line before `k` is
/// already in full form, so its payload goes in at index `k + 1`. Keys that do not fit the text
/// are skipped and treated as unfolded.
pub fn expand(view_text: &str, store: &FoldStore) -> ExpandedView {
    if store.is_empty() {
        let count = line_count(view_text);
        return ExpandedView {
            full_text: view_text.to_string(),
            view_to_full: (0..count).collect(),
        };
    }

    // Each working line remembers the view line it came from.
    let mut working: Vec<(&str, Option<usize>)> = split_lines(view_text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| (line, Some(i)))
        .collect();
    let view_line_count = working.len();

    for (key, hidden) in store.iter() {
        if key >= working.len() {
            warn!(key, lines = working.len(), "fold key past the end of the document; skipped");
            continue;
        }
        let at = key + 1;
        working.splice(at..at, hidden.iter().map(|line| (line.as_str(), None)));
    }

    let mut view_to_full = vec![0; view_line_count];
    for (full, (_, origin)) in working.iter().enumerate() {
        if let Some(view) = origin {
            view_to_full[*view] = full;
        }
    }

    let full_text = working
        .iter()
        .map(|(line, _)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    ExpandedView {
        full_text,
        view_to_full,
    }
}

/// Remove every line hidden by a top-level fold from a full document.
///
/// Inverse of [`expand`]: `collapse(&expand(v, s).full_text, s) == v`.
pub fn collapse(full_text: &str, store: &FoldStore) -> String {
    if store.is_empty() {
        return full_text.to_string();
    }

    let spans = store.top_level();
    let mut spans = spans.iter().peekable();
    let mut kept = Vec::new();

    for (i, line) in split_lines(full_text).into_iter().enumerate() {
        while spans.peek().is_some_and(|(key, span)| key + span < i) {
            spans.next();
        }
        let hidden = spans
            .peek()
            .is_some_and(|(key, span)| i > *key && i <= key + span);
        if !hidden {
            kept.push(line);
        }
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_store_is_identity() {
        let view = expand("a\nb\nc", &FoldStore::new());
        assert_eq!(view.full_text, "a\nb\nc");
        assert_eq!(view.view_to_full, vec![0, 1, 2]);
    }

    #[test]
    fn test_expand_two_folds() {
        let store = FoldStore::from_iter([
            (0, lines(&["  x=1;", "}"])),
            (4, lines(&["  y=2;", "}"])),
        ]);
        let view = expand("function f() {\n\nfunction g() {\ntail", &store);

        assert_eq!(
            view.full_text,
            "function f() {\n  x=1;\n}\n\nfunction g() {\n  y=2;\n}\ntail"
        );
        assert_eq!(view.view_to_full, vec![0, 3, 4, 7]);
    }

    #[test]
    fn test_expand_nested_fold() {
        let store = FoldStore::from_iter([(0, lines(&["  if {", "  }", "}"])), (1, lines(&["    a"]))]);
        let view = expand("fn {\nend", &store);

        assert_eq!(view.full_text, "fn {\n  if {\n    a\n  }\n}\nend");
        assert_eq!(view.view_to_full, vec![0, 5]);
        for (i, full) in view.view_to_full.iter().enumerate() {
            assert_eq!(store.view_line_to_full(i), *full);
        }
    }

    #[test]
    fn test_collapse_inverts_expand() {
        let store = FoldStore::from_iter([(0, lines(&["  if {", "  }", "}"])), (1, lines(&["    a"]))]);
        let view = "fn {\nend";
        assert_eq!(collapse(&expand(view, &store).full_text, &store), view);
    }

    #[test]
    fn test_out_of_range_key_is_skipped() {
        let store = FoldStore::from_iter([(7, lines(&["x"]))]);
        let view = expand("a\nb", &store);
        assert_eq!(view.full_text, "a\nb");
        assert_eq!(view.view_to_full, vec![0, 1]);
    }
}
