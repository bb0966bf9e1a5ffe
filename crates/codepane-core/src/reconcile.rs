//! Fold reconciler
//!
//! Derives the fold store that is valid after an edit. Each fold is checked against the rules
//! below in order; the first match wins.
//!
//! 1. No full line count change: the old store is returned unchanged.
//! 2. The shift is the view line delta for growing edits and the full line delta otherwise.
//! 3. An insertion starting on a folded header unfolds that block into the surface.
//! 4. A fold whose header line is where a deletion starts is dropped.
//! 5. A deletion covering a fold's whole span drops it.
//! 6. Folds before the edit stay; the others move by the shift ([`FoldStore::shift_keys_from`]).
//!    A key that would turn negative or land on a kept fold is discarded.
//!
//! Replacements are reconciled as a deletion followed by an insertion.

use crate::change::{ChangeDescriptor, ChangeType};
use crate::fold_store::FoldStore;
use crate::surface::TextSurface;
use crate::toggle::unfold_lines;
use tracing::{debug, warn};

/// Compute the fold store after `change`.
///
/// `surface` must already show the edited view text; an auto-unfold writes to it.
pub fn reconcile<S>(change: &ChangeDescriptor, old: &FoldStore, surface: &mut S) -> FoldStore
where
    S: TextSurface + ?Sized,
{
    if change.change_type == ChangeType::Replacement {
        return change
            .split()
            .iter()
            .fold(old.clone(), |store, part| reconcile_one(part, &store, &mut *surface));
    }
    reconcile_one(change, old, surface)
}

fn reconcile_one<S>(change: &ChangeDescriptor, old: &FoldStore, surface: &mut S) -> FoldStore
where
    S: TextSurface + ?Sized,
{
    let logical = change.logical_count_change;
    if logical == 0 {
        return old.clone();
    }

    let inserted = change.inserted_lines();
    let start = change.start_line;
    let end = change.end_line;
    let is_insertion = change.change_type == ChangeType::Insertion;
    let is_deletion = change.change_type == ChangeType::Deletion;

    let mut shift = if logical > 0 {
        change.line_count_change
    } else {
        logical
    };

    let mut kept: Vec<(usize, &[String])> = Vec::with_capacity(old.len());
    for (key, hidden) in old.iter() {
        if is_insertion && start == key {
            auto_unfold(key, hidden, inserted, old, &mut *surface);
            shift = inserted as isize;
            continue;
        }

        if start >= key && start + inserted <= key {
            debug!(key, "edit starts on the folded header; fold dropped");
            continue;
        }

        if is_deletion && start <= key && end + 1 >= key + hidden.len() && end > key {
            debug!(key, start, end, "deletion spans the folded block; fold dropped");
            continue;
        }

        kept.push((key, hidden));
    }

    // The shift may change while walking (auto-unfold), so keys move once the walk is done.
    let mut store: FoldStore = kept
        .into_iter()
        .map(|(key, hidden)| (key, hidden.to_vec()))
        .collect();
    store.shift_keys_from(start, shift);
    store
}

fn auto_unfold<S>(key: usize, hidden: &[String], inserted: usize, old: &FoldStore, surface: &mut S)
where
    S: TextSurface + ?Sized,
{
    let Some(header_view) = old.full_line_to_view(key) else {
        warn!(key, "edited fold header is hidden; cannot unfold");
        return;
    };

    let selection = surface.selection();
    match unfold_lines(surface.text(), header_view + inserted, hidden) {
        Some(text) => {
            surface.set_text(text);
            surface.set_selection(selection);
            debug!(key, lines = hidden.len(), "edit on folded header; block unfolded");
        }
        None => warn!(key, header_view, "auto-unfold target out of range"),
    }
}
