//! Editor command layer.
//!
//! [`Editor`] binds a [`TextSurface`] to the folding, reconciliation and history machinery and
//! exposes everything through [`Editor::execute`].
//!
//! # Example
//!
//! ```rust
//! use codepane_core::{BufferSurface, Command, Editor, EditorConfig, LanguageConfig};
//!
//! let surface = BufferSurface::new("function f() {\n  x=1;\n}");
//! let mut editor = Editor::new(surface, LanguageConfig::javascript(), EditorConfig::default());
//!
//! editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
//! assert_eq!(editor.text(), "function f() {");
//! assert_eq!(editor.full_text(), "function f() {\n  x=1;\n}");
//!
//! editor.execute(Command::Undo).unwrap();
//! assert_eq!(editor.text(), "function f() {\n  x=1;\n}");
//! assert!(editor.folds().is_empty());
//! ```

use crate::change::{ChangeDescriptor, EditEvent, Key, ViewEdit};
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::EditorConfig;
use crate::fold_store::FoldStore;
use crate::folding::{FoldChangeCallback, Folding, FoldingManager};
use crate::gutter::{GutterLine, gutter_lines};
use crate::history::{HistoryManager, Snapshot};
use crate::line_ending::LineEnding;
use crate::line_index::LineIndex;
use crate::mapper::{ExpandedView, expand};
use crate::reconcile::reconcile;
use crate::suggest::{SuggestionIndex, word_before};
use crate::surface::TextSurface;
use crate::text::{Selection, char_len, line_count, split_lines};
use codepane_lang::{FoldStrategy, LanguageConfig};
use std::time::Instant;
use tracing::{debug, warn};

/// Bracket and quote pairs closed automatically.
const AUTO_CLOSE_PAIRS: [(char, char); 5] = [
    ('(', ')'),
    ('{', '}'),
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
];

/// Editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A key press.
    Key(Key),
    /// Paste text over the selection.
    Paste(String),
    /// Copy the selection (hidden lines included) to the clipboard.
    Copy,
    /// Copy the selection, then delete it.
    Cut,
    /// Fold or unfold the block headed by a view line.
    ToggleFold {
        /// View line of the header.
        view_line: usize,
    },
    /// Swap the caret line with the line above.
    MoveLineUp,
    /// Swap the caret line with the line below.
    MoveLineDown,
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
    /// Set the selection.
    SetSelection {
        /// Anchor offset.
        start: usize,
        /// Active offset.
        end: usize,
    },
    /// Replace the word before the caret with a completion.
    AcceptSuggestion {
        /// The completion.
        word: String,
    },
}

/// Command outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The editor state changed.
    Success,
    /// Nothing applicable; the state is unchanged.
    Noop,
    /// Success, returns text (copy and cut).
    Text(String),
}

/// Command failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The view line does not exist.
    #[error("invalid line {line} (view has {line_count} lines)")]
    InvalidLine {
        /// Requested view line.
        line: usize,
        /// View line count.
        line_count: usize,
    },
    /// The range is outside the view text.
    #[error("invalid range: {start}..{end}")]
    InvalidRange {
        /// Anchor offset.
        start: usize,
        /// Active offset.
        end: usize,
    },
    /// Empty text where some is required.
    #[error("text cannot be empty")]
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    /// Typing: snapshot after the debounce.
    Debounced,
    /// Structural change: snapshot now.
    Immediate,
}

/// An editor instance.
pub struct Editor<S: TextSurface> {
    surface: S,
    folding: Folding,
    history: HistoryManager,
    clipboard: Box<dyn Clipboard>,
    config: EditorConfig,
    language: LanguageConfig,
    line_ending: LineEnding,
}

impl<S: TextSurface> Editor<S> {
    /// Create an editor over `surface`. Its text is normalized to LF.
    pub fn new(mut surface: S, language: LanguageConfig, config: EditorConfig) -> Self {
        let line_ending = LineEnding::detect(surface.text());
        let normalized = LineEnding::normalize(surface.text());
        if normalized != surface.text() {
            surface.set_text(normalized);
        }

        let folding = Folding::new();
        let initial = capture(&surface, &folding);
        let history =
            HistoryManager::new(initial, config.max_history, config.history_debounce());

        Self {
            surface,
            folding,
            history,
            clipboard: Box::new(MemoryClipboard::new()),
            config,
            language,
            line_ending,
        }
    }

    /// Builder: use `clipboard` for cut/copy.
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// View text.
    pub fn text(&self) -> &str {
        self.surface.text()
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.surface.selection()
    }

    /// Current folds.
    pub fn folds(&self) -> &FoldStore {
        self.folding.folded_blocks()
    }

    /// The fully expanded document with its view line mapping.
    pub fn expanded(&self) -> ExpandedView {
        expand(self.surface.text(), self.folds())
    }

    /// The fully expanded document.
    pub fn full_text(&self) -> String {
        self.expanded().full_text
    }

    /// The full document with the line ending it was loaded with.
    pub fn full_text_with_line_ending(&self) -> String {
        self.line_ending.for_saving(&self.full_text())
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Clipboard used by cut and copy.
    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }

    /// History.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Whether the document matches the state last marked clean.
    pub fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    /// Mark the current state clean (e.g. after the host saved it). Pending typing is committed
    /// first so it is part of the clean state.
    pub fn mark_clean(&mut self) {
        self.flush_pending();
        self.history.mark_clean();
    }

    /// Forget undo and redo steps; the current state becomes the only (clean) one.
    pub fn clear_history(&mut self) {
        let present = capture(&self.surface, &self.folding);
        self.history.clear(present);
    }

    /// Configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Language definition.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Switch language; folds stay as they are.
    pub fn set_language(&mut self, language: LanguageConfig) {
        self.language = language;
    }

    /// Fold strategy in effect (config override, else the language's).
    pub fn fold_strategy(&self) -> FoldStrategy {
        self.config
            .fold_strategy
            .unwrap_or(self.language.fold_strategy)
    }

    /// Subscribe to fold changes.
    pub fn on_fold_change(&mut self, callback: FoldChangeCallback) {
        self.folding.on_change(callback);
    }

    /// Gutter rows for the current view.
    pub fn gutter(&self) -> Vec<GutterLine> {
        gutter_lines(self.surface.text(), self.folds(), self.fold_strategy())
    }

    /// Completions for the word before the caret.
    pub fn completions(&self) -> Vec<String> {
        let caret = self.surface.selection().start;
        let prefix = word_before(self.surface.text(), caret);
        SuggestionIndex::scan(&self.full_text()).suggestions(prefix, &self.language.reserved_words)
    }

    /// Execute a command now.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        self.execute_at(command, Instant::now())
    }

    /// Execute a command at `now` (drives the history debounce).
    pub fn execute_at(
        &mut self,
        command: Command,
        now: Instant,
    ) -> Result<CommandResult, CommandError> {
        match command {
            Command::Key(key) => Ok(self.key(key, now)),
            Command::Paste(data) => Ok(self.paste(&data, now)),
            Command::Copy => Ok(self.copy()),
            Command::Cut => Ok(self.cut(now)),
            Command::ToggleFold { view_line } => self.toggle_fold(view_line),
            Command::MoveLineUp => Ok(self.move_line_up()),
            Command::MoveLineDown => Ok(self.move_line_down()),
            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
            Command::SetSelection { start, end } => self.set_selection(start, end),
            Command::AcceptSuggestion { word } => self.accept_suggestion(&word, now),
        }
    }

    /// Advance the history debounce. Returns whether a snapshot was committed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (surface, folding) = (&self.surface, &self.folding);
        self.history.poll(now, || capture(surface, folding))
    }

    /// Swap the caret line with the line above.
    pub fn move_line_up(&mut self) -> CommandResult {
        let line = self.caret_line();
        if line == 0 {
            return CommandResult::Noop;
        }
        self.swap_lines(line - 1)
    }

    /// Swap the caret line with the line below.
    pub fn move_line_down(&mut self) -> CommandResult {
        let line = self.caret_line();
        if line + 1 >= self.view_line_count() {
            return CommandResult::Noop;
        }
        self.swap_lines(line)
    }

    /// Restore the previous snapshot.
    pub fn undo(&mut self) -> CommandResult {
        self.flush_pending();
        let current = capture(&self.surface, &self.folding);
        match self.history.undo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                CommandResult::Success
            }
            None => CommandResult::Noop,
        }
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> CommandResult {
        self.flush_pending();
        let current = capture(&self.surface, &self.folding);
        match self.history.redo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                CommandResult::Success
            }
            None => CommandResult::Noop,
        }
    }

    fn key(&mut self, key: Key, now: Instant) -> CommandResult {
        match key {
            Key::Tab => {
                let edit =
                    ViewEdit::replace_selection(self.surface.selection(), self.config.tab_text.clone());
                let after = Selection::caret(edit.caret_after());
                return self.apply_edit(&edit, after, Record::Debounced, now);
            }
            Key::ShiftTab => return self.outdent(now),
            Key::Char(ch) if self.config.auto_close_pairs => {
                if let Some(result) = self.auto_close(ch, now) {
                    return result;
                }
            }
            _ => {}
        }

        let event = EditEvent::Key(key);
        let Some(edit) = ViewEdit::from_event(&event, self.surface.text(), self.surface.selection())
        else {
            return CommandResult::Noop;
        };
        let after = Selection::caret(edit.caret_after());
        self.apply_edit(&edit, after, Record::Debounced, now)
    }

    fn paste(&mut self, data: &str, now: Instant) -> CommandResult {
        let data = LineEnding::normalize(data);
        let edit = ViewEdit::replace_selection(self.surface.selection(), data);
        if edit.is_noop() {
            return CommandResult::Noop;
        }
        let after = Selection::caret(edit.caret_after());
        self.apply_edit(&edit, after, Record::Immediate, now)
    }

    fn copy(&mut self) -> CommandResult {
        let Some(text) = self.selected_full_text() else {
            return CommandResult::Noop;
        };
        if let Err(err) = self.clipboard.write_text(&text) {
            warn!(%err, "clipboard write failed on copy");
        }
        CommandResult::Text(text)
    }

    fn cut(&mut self, now: Instant) -> CommandResult {
        let Some(text) = self.selected_full_text() else {
            return CommandResult::Noop;
        };
        if let Err(err) = self.clipboard.write_text(&text) {
            warn!(%err, "clipboard write failed on cut; text is still removed");
        }

        let edit = ViewEdit::replace_selection(self.surface.selection(), String::new());
        let after = Selection::caret(edit.start);
        self.apply_edit(&edit, after, Record::Immediate, now);
        CommandResult::Text(text)
    }

    fn toggle_fold(&mut self, view_line: usize) -> Result<CommandResult, CommandError> {
        let line_count = self.view_line_count();
        if view_line >= line_count {
            return Err(CommandError::InvalidLine {
                line: view_line,
                line_count,
            });
        }
        self.flush_pending();
        self.history.sync_selection(self.surface.selection());

        let old_store = self.folds().clone();
        let old_index = LineIndex::from_text(self.surface.text());
        let header_key = old_store.view_line_to_full(view_line);
        let strategy = self.fold_strategy();

        let view = self.surface.text().to_string();
        let Some(text) = self
            .folding
            .toggle_fold(view_line, header_key, &view, strategy)
        else {
            debug!(view_line, "toggle had no effect");
            return Ok(CommandResult::Noop);
        };

        let new_index = LineIndex::from_text(&text);
        let new_store = self.folding.folded_blocks();
        let remap = |offset: usize| {
            let pos = old_index.char_offset_to_position(offset);
            let full = old_store.view_line_to_full(pos.line);
            match new_store.full_line_to_view(full) {
                Some(line) => new_index.position_to_char_offset(line, pos.column),
                // The caret's line got hidden: park it at the end of the header.
                None => new_index.line_end_offset(view_line),
            }
        };
        let selection = self.surface.selection();
        let selection = Selection::new(remap(selection.start), remap(selection.end));

        self.surface.set_text(text);
        self.surface.set_selection(selection);
        self.commit_now();
        Ok(CommandResult::Success)
    }

    fn set_selection(&mut self, start: usize, end: usize) -> Result<CommandResult, CommandError> {
        let len = char_len(self.surface.text());
        if start > len || end > len {
            return Err(CommandError::InvalidRange { start, end });
        }
        self.surface.set_selection(Selection::new(start, end));
        Ok(CommandResult::Success)
    }

    fn accept_suggestion(
        &mut self,
        word: &str,
        now: Instant,
    ) -> Result<CommandResult, CommandError> {
        if word.is_empty() {
            return Err(CommandError::EmptyText);
        }
        let caret = self.surface.selection().start;
        let prefix_len = char_len(word_before(self.surface.text(), caret));
        let edit = ViewEdit {
            start: caret - prefix_len,
            end: caret,
            text: word.to_string(),
        };
        let after = Selection::caret(edit.caret_after());
        Ok(self.apply_edit(&edit, after, Record::Debounced, now))
    }

    /// Skip over a closing character, or insert/wrap with a pair. `None` when `ch` is not part
    /// of a pair.
    fn auto_close(&mut self, ch: char, now: Instant) -> Option<CommandResult> {
        let selection = self.surface.selection();

        if selection.is_empty() && AUTO_CLOSE_PAIRS.iter().any(|(_, close)| *close == ch) {
            let next = self.surface.text().chars().nth(selection.start);
            if next == Some(ch) {
                self.surface.set_selection(Selection::caret(selection.start + 1));
                return Some(CommandResult::Success);
            }
        }

        let (open, close) = *AUTO_CLOSE_PAIRS.iter().find(|(open, _)| *open == ch)?;

        if selection.is_empty() {
            let edit = ViewEdit::replace_selection(selection, format!("{open}{close}"));
            let after = Selection::caret(selection.start + 1);
            return Some(self.apply_edit(&edit, after, Record::Debounced, now));
        }

        // Wrap with two insertions so folds inside the selection survive.
        let (min, max) = (selection.min(), selection.max());
        let closing = ViewEdit::replace_selection(Selection::caret(max), close.to_string());
        self.apply_edit(&closing, selection, Record::Debounced, now);
        let opening = ViewEdit::replace_selection(Selection::caret(min), open.to_string());
        let after = Selection::new(min + 1, max + 1);
        Some(self.apply_edit(&opening, after, Record::Debounced, now))
    }

    fn outdent(&mut self, now: Instant) -> CommandResult {
        let selection = self.surface.selection();
        let index = LineIndex::from_text(self.surface.text());
        let line = index.char_offset_to_position(selection.start).line;
        let line_start = index.line_start_offset(line);
        let line_text = index.line_text(line).unwrap_or_default();

        let tab_text = &self.config.tab_text;
        let remove = if line_text.starts_with(tab_text.as_str()) {
            char_len(tab_text)
        } else {
            line_text
                .chars()
                .take(char_len(tab_text))
                .take_while(|ch| *ch == ' ' || *ch == '\t')
                .count()
        };
        if remove == 0 {
            return CommandResult::Noop;
        }

        let edit = ViewEdit {
            start: line_start,
            end: line_start + remove,
            text: String::new(),
        };
        let shift = |offset: usize| {
            if offset >= line_start + remove {
                offset - remove
            } else {
                offset.min(line_start)
            }
        };
        let after = Selection::new(shift(selection.start), shift(selection.end));
        self.apply_edit(&edit, after, Record::Debounced, now)
    }

    /// Detect, apply, reconcile, record.
    fn apply_edit(
        &mut self,
        edit: &ViewEdit,
        after: Selection,
        record: Record,
        now: Instant,
    ) -> CommandResult {
        let view = self.surface.text().to_string();
        let store = self.folds().clone();
        let Some(change) = ChangeDescriptor::from_view_edit(edit, &view, &store) else {
            return CommandResult::Noop;
        };

        if record == Record::Immediate {
            self.flush_pending();
        }
        self.history.sync_selection(self.surface.selection());

        self.surface.set_text(edit.apply(&view));
        self.surface.set_selection(after);
        let reconciled = reconcile(&change, &store, &mut self.surface);
        self.install_folds(reconciled);

        match record {
            Record::Debounced => self.history.record_input(now),
            Record::Immediate => self.commit_now(),
        }
        CommandResult::Success
    }

    /// Swap view lines `upper` and `upper + 1`, carrying folds along.
    fn swap_lines(&mut self, upper: usize) -> CommandResult {
        self.flush_pending();
        self.history.sync_selection(self.surface.selection());

        let old_index = LineIndex::from_text(self.surface.text());
        let mut lines = split_lines(self.surface.text());
        lines.swap(upper, upper + 1);
        let text = lines.join("\n");

        let mut store = self.folds().clone();
        let upper_full = store.view_line_to_full(upper);
        let lower_full = store.view_line_to_full(upper + 1);
        store.swap_adjacent(upper_full, lower_full);

        let new_index = LineIndex::from_text(&text);
        let remap = |offset: usize| {
            let pos = old_index.char_offset_to_position(offset);
            let line = match pos.line {
                l if l == upper => upper + 1,
                l if l == upper + 1 => upper,
                l => l,
            };
            new_index.position_to_char_offset(line, pos.column)
        };
        let selection = self.surface.selection();
        let selection = Selection::new(remap(selection.start), remap(selection.end));

        self.surface.set_text(text);
        self.surface.set_selection(selection);
        self.install_folds(store);
        self.commit_now();
        CommandResult::Success
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let _guard = self.history.begin_restore();
        self.surface.set_text(snapshot.text.clone());
        self.folding.update_folded_blocks(snapshot.folds.clone());
        self.surface.set_selection(snapshot.selection());
    }

    fn install_folds(&mut self, store: FoldStore) {
        if let Err(err) = store.validate(self.view_line_count()) {
            warn!(%err, "fold store inconsistent with the view text");
        }
        self.folding.update_folded_blocks(store);
    }

    /// The full-document text under the selection; `None` for an empty selection.
    fn selected_full_text(&self) -> Option<String> {
        let selection = self.surface.selection();
        if selection.is_empty() {
            return None;
        }

        let expanded = self.expanded();
        let view_index = LineIndex::from_text(self.surface.text());
        let full_index = LineIndex::from_text(&expanded.full_text);
        let to_full = |offset: usize| {
            let pos = view_index.char_offset_to_position(offset);
            let line = expanded.view_to_full[pos.line];
            full_index.position_to_char_offset(line, pos.column)
        };
        Some(full_index.slice(to_full(selection.min()), to_full(selection.max())))
    }

    fn caret_line(&self) -> usize {
        LineIndex::from_text(self.surface.text())
            .char_offset_to_position(self.surface.selection().start)
            .line
    }

    fn view_line_count(&self) -> usize {
        line_count(self.surface.text())
    }

    fn flush_pending(&mut self) {
        let (surface, folding) = (&self.surface, &self.folding);
        self.history.flush(|| capture(surface, folding));
    }

    fn commit_now(&mut self) {
        let snapshot = capture(&self.surface, &self.folding);
        self.history.commit(snapshot);
    }
}

impl<S: TextSurface + std::fmt::Debug> std::fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("surface", &self.surface)
            .field("folding", &self.folding)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("language", &self.language.name)
            .finish_non_exhaustive()
    }
}

fn capture<S: TextSurface + ?Sized>(surface: &S, folding: &Folding) -> Snapshot {
    Snapshot::new(
        surface.text(),
        folding.folded_blocks().clone(),
        surface.selection(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    fn editor(text: &str) -> Editor<BufferSurface> {
        Editor::new(
            BufferSurface::new(text),
            LanguageConfig::javascript(),
            EditorConfig::default(),
        )
    }

    #[test]
    fn test_crlf_is_normalized_on_load() {
        let editor = editor("a\r\nb");
        assert_eq!(editor.text(), "a\nb");
        assert_eq!(editor.line_ending(), LineEnding::Crlf);
        assert_eq!(editor.full_text_with_line_ending(), "a\r\nb");
    }

    #[test]
    fn test_auto_close_and_skip_over() {
        let mut editor = editor("");
        editor.execute(Command::Key(Key::Char('('))).unwrap();
        assert_eq!(editor.text(), "()");
        assert_eq!(editor.selection(), Selection::caret(1));

        editor.execute(Command::Key(Key::Char(')'))).unwrap();
        assert_eq!(editor.text(), "()");
        assert_eq!(editor.selection(), Selection::caret(2));
    }

    #[test]
    fn test_auto_close_wraps_selection() {
        let mut editor = editor("abc");
        editor.execute(Command::SetSelection { start: 0, end: 3 }).unwrap();
        editor.execute(Command::Key(Key::Char('"'))).unwrap();
        assert_eq!(editor.text(), "\"abc\"");
        assert_eq!(editor.selection(), Selection::new(1, 4));
    }

    #[test]
    fn test_tab_and_shift_tab() {
        let mut editor = editor("x");
        editor.execute(Command::Key(Key::Tab)).unwrap();
        assert_eq!(editor.text(), "    x");
        assert_eq!(editor.selection(), Selection::caret(4));

        editor.execute(Command::Key(Key::ShiftTab)).unwrap();
        assert_eq!(editor.text(), "x");
        assert_eq!(editor.selection(), Selection::caret(0));
        assert_eq!(
            editor.execute(Command::Key(Key::ShiftTab)),
            Ok(CommandResult::Noop)
        );
    }

    #[test]
    fn test_accept_suggestion_replaces_word() {
        let mut editor = editor("let counter = 1;\ncou");
        editor.execute(Command::SetSelection { start: 20, end: 20 }).unwrap();
        assert_eq!(editor.completions(), vec!["counter".to_string()]);

        editor
            .execute(Command::AcceptSuggestion {
                word: "counter".to_string(),
            })
            .unwrap();
        assert_eq!(editor.text(), "let counter = 1;\ncounter");
        assert_eq!(editor.selection(), Selection::caret(24));
    }

    #[test]
    fn test_clean_state_and_clearing_history() {
        let mut editor = editor("a");
        assert!(editor.is_clean());

        editor.execute(Command::Paste("b".to_string())).unwrap();
        editor.execute(Command::Key(Key::Char('c'))).unwrap();
        assert!(!editor.is_clean());

        editor.mark_clean();
        assert!(editor.is_clean());
        assert_eq!(editor.history().undo_depth(), 2);

        editor.undo();
        assert!(!editor.is_clean());
        editor.redo();
        assert!(editor.is_clean());

        editor.clear_history();
        assert!(editor.is_clean());
        assert!(!editor.history().can_undo());
        assert_eq!(editor.undo(), CommandResult::Noop);
        assert_eq!(editor.text(), "bca");
    }

    #[test]
    fn test_invalid_commands() {
        let mut editor = editor("ab");
        assert_eq!(
            editor.execute(Command::ToggleFold { view_line: 5 }),
            Err(CommandError::InvalidLine {
                line: 5,
                line_count: 1
            })
        );
        assert_eq!(
            editor.execute(Command::SetSelection { start: 0, end: 9 }),
            Err(CommandError::InvalidRange { start: 0, end: 9 })
        );
        assert_eq!(
            editor.execute(Command::AcceptSuggestion {
                word: String::new()
            }),
            Err(CommandError::EmptyText)
        );
    }
}
