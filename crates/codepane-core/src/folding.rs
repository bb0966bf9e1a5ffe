//! Folding manager
//!
//! Owns one editor's [`FoldStore`] and tells subscribers about every mutation. Each editor
//! instance has its own manager; there is no shared fold state.
//!
//! # Example
//!
//! ```rust
//! use codepane_core::{Folding, FoldingManager, FoldStrategy};
//!
//! let mut folding = Folding::new();
//! folding.on_change(Box::new(|change| {
//!     println!("folds {} -> {}: {:?}", change.old_version, change.new_version, change.kind);
//! }));
//!
//! let text = folding.toggle_fold(0, 0, "f() {\n  x\n}", FoldStrategy::Braces);
//! assert_eq!(text.as_deref(), Some("f() {"));
//! assert_eq!(folding.version(), 1);
//! ```

use crate::fold_store::FoldStore;
use crate::toggle::{FoldAction, toggle_fold};
use codepane_lang::FoldStrategy;

/// What changed in the fold store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldChangeKind {
    /// The whole store was replaced (edit reconciliation, undo/redo, line swap).
    Replaced,
    /// A toggle folded or unfolded one block.
    Toggled(FoldAction),
}

/// Notification sent after every fold store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldChange {
    /// What changed.
    pub kind: FoldChangeKind,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
}

/// Fold change callback.
pub type FoldChangeCallback = Box<dyn FnMut(&FoldChange) + Send>;

/// Access to an editor's folds.
pub trait FoldingManager {
    /// Current folds.
    fn folded_blocks(&self) -> &FoldStore;

    /// Replace the folds.
    fn update_folded_blocks(&mut self, store: FoldStore);

    /// Fold or unfold the block at view line `view_line` / full line `header_key` of
    /// `view_text`. Returns the new view text, or `None` when nothing changed.
    fn toggle_fold(
        &mut self,
        view_line: usize,
        header_key: usize,
        view_text: &str,
        strategy: FoldStrategy,
    ) -> Option<String>;

    /// Subscribe to fold changes.
    fn on_change(&mut self, callback: FoldChangeCallback);
}

/// Instance-scoped [`FoldingManager`].
#[derive(Default)]
pub struct Folding {
    store: FoldStore,
    version: u64,
    callbacks: Vec<FoldChangeCallback>,
}

impl std::fmt::Debug for Folding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Folding")
            .field("store", &self.store)
            .field("version", &self.version)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Folding {
    /// Create a manager with nothing folded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager over an existing store.
    pub fn with_store(store: FoldStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }

    fn notify(&mut self, kind: FoldChangeKind) {
        let old_version = self.version;
        self.version += 1;
        let change = FoldChange {
            kind,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl FoldingManager for Folding {
    fn folded_blocks(&self) -> &FoldStore {
        &self.store
    }

    fn update_folded_blocks(&mut self, store: FoldStore) {
        self.store = store;
        self.notify(FoldChangeKind::Replaced);
    }

    fn toggle_fold(
        &mut self,
        view_line: usize,
        header_key: usize,
        view_text: &str,
        strategy: FoldStrategy,
    ) -> Option<String> {
        let outcome = toggle_fold(view_line, header_key, view_text, &self.store, strategy)?;
        self.store = outcome.store;
        self.notify(FoldChangeKind::Toggled(outcome.action));
        Some(outcome.text)
    }

    fn on_change(&mut self, callback: FoldChangeCallback) {
        self.callbacks.push(callback);
    }
}
