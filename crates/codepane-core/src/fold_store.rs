//! Fold store
//!
//! The single source of truth for what is folded. Keys are **full-document** line indices of fold
//! headers; the value is the list of lines that sat directly below the header (in view form) when
//! the block was folded.
//!
//! A fold nested inside another keeps its own entry. Its header line then lives inside the
//! enclosing payload, and the spans below account for it recursively. Folding or unfolding never
//! re-keys an entry; only text edits and line swaps do.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A broken fold store invariant, reported by [`FoldStore::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FoldStoreError {
    /// A fold hides no lines.
    #[error("fold at line {key} has an empty payload")]
    EmptyPayload {
        /// Header line (full coordinates).
        key: usize,
    },
    /// A top-level fold header does not map to an existing view line.
    #[error("fold at line {key} has no header in a {view_line_count}-line view")]
    HeaderOutOfRange {
        /// Header line (full coordinates).
        key: usize,
        /// Line count of the view text.
        view_line_count: usize,
    },
}

/// Ordered mapping `header line -> hidden lines`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoldStore {
    blocks: BTreeMap<usize, Vec<String>>,
}

impl FoldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of folded blocks (nested ones included).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether nothing is folded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether `key` is a folded header.
    pub fn contains(&self, key: usize) -> bool {
        self.blocks.contains_key(&key)
    }

    /// Hidden lines of the fold at `key`.
    pub fn get(&self, key: usize) -> Option<&[String]> {
        self.blocks.get(&key).map(Vec::as_slice)
    }

    /// Store a fold. Empty payloads are rejected and return `false`.
    pub fn insert(&mut self, key: usize, hidden: Vec<String>) -> bool {
        if hidden.is_empty() {
            return false;
        }
        self.blocks.insert(key, hidden);
        true
    }

    /// Remove a fold, returning its hidden lines.
    pub fn remove(&mut self, key: usize) -> Option<Vec<String>> {
        self.blocks.remove(&key)
    }

    /// Remove every fold.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Folded header lines in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.keys().copied()
    }

    /// `(header, hidden lines)` in ascending header order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.blocks.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of full lines hidden under `key`, nested folded blocks included.
    ///
    /// Returns 0 when `key` is not folded.
    pub fn total_span(&self, key: usize) -> usize {
        let Some(hidden) = self.blocks.get(&key) else {
            return 0;
        };

        let mut end = key + hidden.len();
        let mut covered = key;
        for &nested in self.blocks.range(key + 1..).map(|(k, _)| k) {
            if nested > end {
                break;
            }
            if nested <= covered {
                // Already counted by a deeper span.
                continue;
            }
            let span = self.total_span(nested);
            end += span;
            covered = nested + span;
        }
        end - key
    }

    /// `(header, total span)` of every fold whose header is visible, in ascending order.
    pub fn top_level(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut covered_until: Option<usize> = None;
        for key in self.keys() {
            if covered_until.is_some_and(|end| key <= end) {
                continue;
            }
            let span = self.total_span(key);
            out.push((key, span));
            covered_until = Some(key + span);
        }
        out
    }

    /// Number of lines of the full document for a view with `view_line_count` lines.
    pub fn full_line_count(&self, view_line_count: usize) -> usize {
        view_line_count + self.top_level().iter().map(|(_, span)| span).sum::<usize>()
    }

    /// Full line index of view line `view_line`.
    pub fn view_line_to_full(&self, view_line: usize) -> usize {
        let mut full = view_line;
        for (key, span) in self.top_level() {
            if key < full {
                full += span;
            } else {
                break;
            }
        }
        full
    }

    /// View line index of full line `full_line`, or `None` when the line is hidden.
    pub fn full_line_to_view(&self, full_line: usize) -> Option<usize> {
        let mut hidden_before = 0;
        for (key, span) in self.top_level() {
            if full_line <= key {
                break;
            }
            if full_line <= key + span {
                return None;
            }
            hidden_before += span;
        }
        Some(full_line - hidden_before)
    }

    /// Move every key `>= line` by `delta`; keys that would become negative are dropped.
    pub fn shift_keys_from(&mut self, line: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        let moved = self.blocks.split_off(&line);
        for (key, hidden) in moved {
            match key.checked_add_signed(delta) {
                Some(new_key) => {
                    if self.blocks.contains_key(&new_key) {
                        debug!(key, new_key, "shifted fold collides with an existing one; dropped");
                    } else {
                        self.blocks.insert(new_key, hidden);
                    }
                }
                None => debug!(key, delta, "fold shifted before the first line; dropped"),
            }
        }
    }

    /// Re-key folds after the adjacent blocks headed by `upper` and `lower` swap places.
    ///
    /// `upper` and `lower` are full line indices of two consecutive visible lines. Each header
    /// moves together with its hidden lines and every fold nested inside them.
    pub fn swap_adjacent(&mut self, upper: usize, lower: usize) {
        let upper_span = self.total_span(upper);
        let lower_span = self.total_span(lower);
        let upper_range = upper..=upper + upper_span;
        let lower_range = lower..=lower + lower_span;

        let blocks = std::mem::take(&mut self.blocks);
        for (key, hidden) in blocks {
            let new_key = if upper_range.contains(&key) {
                key + lower_span + 1
            } else if lower_range.contains(&key) {
                key - (upper_span + 1)
            } else {
                key
            };
            self.blocks.insert(new_key, hidden);
        }
    }

    /// Check the store against a view with `view_line_count` lines.
    pub fn validate(&self, view_line_count: usize) -> Result<(), FoldStoreError> {
        if let Some((key, _)) = self.blocks.iter().find(|(_, hidden)| hidden.is_empty()) {
            return Err(FoldStoreError::EmptyPayload { key: *key });
        }

        let mut hidden_before = 0;
        for (key, span) in self.top_level() {
            if key - hidden_before >= view_line_count {
                return Err(FoldStoreError::HeaderOutOfRange {
                    key,
                    view_line_count,
                });
            }
            hidden_before += span;
        }
        Ok(())
    }
}

impl FromIterator<(usize, Vec<String>)> for FoldStore {
    fn from_iter<T: IntoIterator<Item = (usize, Vec<String>)>>(iter: T) -> Self {
        let mut store = Self::new();
        for (key, hidden) in iter {
            store.insert(key, hidden);
        }
        store
    }
}
