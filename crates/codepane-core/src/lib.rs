#![warn(missing_docs)]
//! Codepane Core - headless code editor kernel with line folding
//!
//! # Overview
//!
//! `codepane-core` owns the text of an editable surface and everything needed to fold blocks of
//! it away. Folded lines are physically removed from the *view* text and kept in a [`FoldStore`];
//! the *full* document is rebuilt on demand by the mapper. Every edit is turned into a
//! [`ChangeDescriptor`] and the [`reconcile`] pass re-keys, drops or auto-unfolds folds so the
//! two documents stay consistent.
//!
//! Rendering, keyboard dispatch and the OS clipboard are left to the host: the kernel talks to
//! them through [`TextSurface`] and [`Clipboard`], and computes plain data models for the gutter
//! and minimap.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor (commands, history, clipboard)      │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Folding manager (versioned, subscribers)   │  ← Change Notifications
//! ├─────────────────────────────────────────────┤
//! │  Change detector / reconciler / toggle      │  ← Fold Maintenance
//! ├─────────────────────────────────────────────┤
//! │  Mapper + fold store                        │  ← View ↔ Full
//! ├─────────────────────────────────────────────┤
//! │  Line index (Rope-based), span helpers      │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use codepane_core::{BufferSurface, Command, Editor, EditorConfig, Key, LanguageConfig};
//!
//! let surface = BufferSurface::new("if (x) {\n  y();\n}\nz();");
//! let mut editor = Editor::new(surface, LanguageConfig::javascript(), EditorConfig::default());
//!
//! editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
//! assert_eq!(editor.text(), "if (x) {\nz();");
//!
//! // Typing below the fold keeps it.
//! editor.execute(Command::SetSelection { start: 9, end: 9 }).unwrap();
//! editor.execute(Command::Key(Key::Enter)).unwrap();
//! assert_eq!(editor.full_text(), "if (x) {\n  y();\n}\n\nz();");
//! assert!(editor.folds().contains(0));
//! ```
//!
//! # Module Description
//!
//! - [`text`] / [`line_index`] - offsets, positions and grapheme helpers
//! - [`fold_store`] - folded blocks keyed by full line, span and coordinate translation
//! - [`mapper`] - view ↔ full document expansion
//! - [`change`] - change detection
//! - [`reconcile`] - fold maintenance after edits
//! - [`toggle`] - block boundaries and fold/unfold
//! - [`history`] - snapshot undo/redo with debounced recording
//! - [`folding`] - instance-scoped folding manager with notifications
//! - [`editor`] - command layer
//! - [`gutter`] / [`minimap`] / [`suggest`] - renderer and completion models

pub mod change;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod fold_store;
pub mod folding;
pub mod gutter;
pub mod history;
pub mod line_ending;
pub mod line_index;
pub mod mapper;
pub mod minimap;
pub mod reconcile;
pub mod suggest;
pub mod surface;
pub mod text;
pub mod toggle;

pub use change::{ChangeDescriptor, ChangeType, EditEvent, Key, ViewEdit, detect};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use codepane_lang::{FoldStrategy, LanguageConfig, SyntaxRule};
pub use config::{ConfigError, EditorConfig};
pub use editor::{Command, CommandError, CommandResult, Editor};
pub use fold_store::{FoldStore, FoldStoreError};
pub use folding::{FoldChange, FoldChangeCallback, FoldChangeKind, Folding, FoldingManager};
pub use gutter::{FoldMarker, GutterLine, gutter_lines};
pub use history::{HistoryManager, HistoryState, RestoreGuard, Snapshot};
pub use line_ending::LineEnding;
pub use line_index::LineIndex;
pub use mapper::{ExpandedView, collapse, expand};
pub use minimap::{ScrollMetrics, ScrollbarGeometry, scroll_for_click, scrollbar_geometry};
pub use reconcile::reconcile;
pub use suggest::{SuggestionIndex, word_before};
pub use surface::{BufferSurface, TextSurface};
pub use text::{Position, Selection};
pub use toggle::{FoldAction, ToggleOutcome, find_block_end, is_fold_header, toggle_fold};
