//! Snapshot-based undo/redo.
//!
//! Every snapshot holds the view text, the fold store and the selection, and is restored as a
//! unit. Typing is recorded with a debounce: the first input moves the manager to
//! [`HistoryState::Recording`], later inputs push the deadline back, and [`HistoryManager::poll`]
//! commits once the deadline passes. Structural operations commit immediately.

use crate::fold_store::FoldStore;
use crate::text::Selection;
use std::cell::Cell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default debounce between the last input and its snapshot.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default number of undo steps kept.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// A restorable editor state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// View text.
    pub text: String,
    /// Folds (deep copy).
    pub folds: FoldStore,
    /// Selection anchor.
    pub selection_start: usize,
    /// Selection end.
    pub selection_end: usize,
}

impl Snapshot {
    /// Build a snapshot.
    pub fn new(text: impl Into<String>, folds: FoldStore, selection: Selection) -> Self {
        Self {
            text: text.into(),
            folds,
            selection_start: selection.start,
            selection_end: selection.end,
        }
    }

    /// The captured selection.
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_start, self.selection_end)
    }

    fn same_content(&self, other: &Snapshot) -> bool {
        self.text == other.text && self.folds == other.folds
    }
}

/// Debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing pending.
    Idle,
    /// Input is pending; a snapshot is due at `deadline`.
    Recording {
        /// When the pending input gets committed.
        deadline: Instant,
    },
}

/// Marks a restore in progress; the flag clears when the guard drops, also on unwind.
#[derive(Debug)]
pub struct RestoreGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Linear undo/redo over [`Snapshot`]s.
#[derive(Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// The last committed state.
    present: Snapshot,
    max_history: usize,
    debounce: Duration,
    state: HistoryState,
    /// Clean point, measured as an undo stack depth.
    clean_index: Option<usize>,
    restoring: Cell<bool>,
}

impl HistoryManager {
    /// Create a manager whose present state is `initial`.
    pub fn new(initial: Snapshot, max_history: usize, debounce: Duration) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            present: initial,
            max_history: max_history.max(1),
            debounce,
            state: HistoryState::Idle,
            clean_index: Some(0),
            restoring: Cell::new(false),
        }
    }

    /// Create a manager with the default limits.
    pub fn with_defaults(initial: Snapshot) -> Self {
        Self::new(initial, DEFAULT_MAX_HISTORY, DEFAULT_DEBOUNCE)
    }

    /// Current debounce state.
    pub fn state(&self) -> HistoryState {
        self.state
    }

    /// Whether an input is waiting to be committed.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, HistoryState::Recording { .. })
    }

    /// Whether a snapshot is being restored.
    pub fn is_undoing_or_redoing(&self) -> bool {
        self.restoring.get()
    }

    /// Raise the restore flag until the returned guard is dropped.
    pub fn begin_restore(&self) -> RestoreGuard<'_> {
        self.restoring.set(true);
        RestoreGuard {
            flag: &self.restoring,
        }
    }

    /// The last committed snapshot.
    pub fn present(&self) -> &Snapshot {
        &self.present
    }

    /// Whether there is something to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is something to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo steps.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo steps.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Whether the present state is the one last marked clean.
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.undo_stack.len()) && !self.is_recording()
    }

    /// Mark the present state clean (e.g. after saving).
    pub fn mark_clean(&mut self) {
        self.clean_index = Some(self.undo_stack.len());
    }

    /// Take `selection` as the caret of the present state when nothing is pending.
    ///
    /// Called right before an edit so undo brings the caret back to where the edit started.
    /// While recording, the present state already holds the caret from before the first input.
    pub fn sync_selection(&mut self, selection: Selection) {
        if self.is_recording() || self.is_undoing_or_redoing() {
            return;
        }
        self.present.selection_start = selection.start;
        self.present.selection_end = selection.end;
    }

    /// Note a qualifying input: start recording or push the deadline back.
    pub fn record_input(&mut self, now: Instant) {
        if self.is_undoing_or_redoing() {
            return;
        }
        self.state = HistoryState::Recording {
            deadline: now + self.debounce,
        };
    }

    /// Commit the pending input if its deadline has passed. Returns whether a snapshot was taken.
    pub fn poll<F>(&mut self, now: Instant, current: F) -> bool
    where
        F: FnOnce() -> Snapshot,
    {
        match self.state {
            HistoryState::Recording { deadline } if now >= deadline => self.commit(current()),
            _ => false,
        }
    }

    /// Commit the pending input right away, if any.
    pub fn flush<F>(&mut self, current: F) -> bool
    where
        F: FnOnce() -> Snapshot,
    {
        if self.is_recording() {
            self.commit(current())
        } else {
            false
        }
    }

    /// Make `current` the present state, pushing the previous one onto the undo stack.
    ///
    /// Ignored while restoring and when neither text nor folds changed; in the latter case the
    /// selection of the present snapshot is still refreshed.
    pub fn commit(&mut self, current: Snapshot) -> bool {
        if self.is_undoing_or_redoing() {
            return false;
        }
        self.state = HistoryState::Idle;

        if current.same_content(&self.present) {
            self.present = current;
            return false;
        }

        self.clear_redo();
        let previous = std::mem::replace(&mut self.present, current);
        self.push_undo(previous);
        debug!(depth = self.undo_stack.len(), "history snapshot committed");
        true
    }

    /// Step back. `current` becomes the first redo step; returns the snapshot to restore.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.is_undoing_or_redoing() {
            return None;
        }
        let previous = self.undo_stack.pop_back()?;
        self.state = HistoryState::Idle;
        self.redo_stack.push(current);
        self.present = previous.clone();
        Some(previous)
    }

    /// Step forward. `current` goes back onto the undo stack; returns the snapshot to restore.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.is_undoing_or_redoing() {
            return None;
        }
        let next = self.redo_stack.pop()?;
        self.state = HistoryState::Idle;
        self.push_undo(current);
        self.present = next.clone();
        Some(next)
    }

    /// Forget all history; `present` becomes the only state.
    pub fn clear(&mut self, present: Snapshot) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.present = present;
        self.state = HistoryState::Idle;
        self.clean_index = Some(0);
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        if self.undo_stack.len() >= self.max_history {
            self.undo_stack.pop_front();
            self.clean_index = match self.clean_index {
                Some(0) | None => None,
                Some(index) => Some(index - 1),
            };
        }
        self.undo_stack.push_back(snapshot);
    }

    fn clear_redo(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }
        // A clean point inside the redo area becomes unreachable.
        if self
            .clean_index
            .is_some_and(|index| index > self.undo_stack.len())
        {
            self.clean_index = None;
        }
        self.redo_stack.clear();
    }
}
