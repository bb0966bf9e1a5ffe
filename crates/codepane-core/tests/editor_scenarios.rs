mod common;

use codepane_core::{
    BufferSurface, Clipboard, Command, CommandResult, Editor, EditorConfig, FoldAction, FoldChange,
    FoldChangeKind, FoldMarker, Key, LanguageConfig, MemoryClipboard, Selection,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const FUNCTION: &str = "function f() {\n  x=1;\n}";

#[test]
fn test_toggle_hides_and_restores_the_body() {
    let mut editor = common::editor(FUNCTION);

    assert_eq!(
        editor.execute(Command::ToggleFold { view_line: 0 }),
        Ok(CommandResult::Success)
    );
    assert_eq!(editor.text(), "function f() {");
    assert_eq!(
        editor.folds().get(0),
        Some(&["  x=1;".to_string(), "}".to_string()][..])
    );
    assert_eq!(editor.full_text(), FUNCTION);

    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
    assert_eq!(editor.text(), FUNCTION);
    assert!(editor.folds().is_empty());
}

#[test]
fn test_toggle_on_plain_line_is_noop() {
    let mut editor = common::editor("let a = 1;\nlet b = 2;");
    assert_eq!(
        editor.execute(Command::ToggleFold { view_line: 1 }),
        Ok(CommandResult::Noop)
    );
    assert!(!editor.history().can_undo());
}

#[test]
fn test_enter_at_folded_header_start_unfolds_it() {
    let mut editor = common::editor(FUNCTION);
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    common::caret_at(&mut editor, 0, 0);
    editor.execute(Command::Key(Key::Enter)).unwrap();

    assert_eq!(editor.text(), "\nfunction f() {\n  x=1;\n}");
    assert!(editor.folds().is_empty());
    assert_eq!(editor.selection(), Selection::caret(1));
}

#[test]
fn test_enter_at_folded_header_end_unfolds_below_the_new_line() {
    let mut editor = common::editor("function f() {\n  x=1;\n}\nrest();");
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    common::caret_at(&mut editor, 0, 14);
    editor.execute(Command::Key(Key::Enter)).unwrap();

    // The edit starts on the header line: the block comes back below the new empty line.
    assert_eq!(editor.full_text(), "function f() {\n\n  x=1;\n}\nrest();");
    assert!(editor.folds().is_empty());
}

#[test]
fn test_undo_restores_text_folds_and_caret() {
    let mut editor = common::editor(FUNCTION);
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    common::caret_at(&mut editor, 0, 14);
    editor.execute(Command::Key(Key::Char(' '))).unwrap();
    assert_eq!(editor.text(), "function f() { ");

    assert_eq!(editor.execute(Command::Undo), Ok(CommandResult::Success));
    assert_eq!(editor.text(), "function f() {");
    assert!(editor.folds().contains(0));
    assert_eq!(editor.selection(), Selection::caret(14));

    assert_eq!(editor.execute(Command::Undo), Ok(CommandResult::Success));
    assert_eq!(editor.text(), FUNCTION);
    assert!(editor.folds().is_empty());
    assert_eq!(editor.execute(Command::Undo), Ok(CommandResult::Noop));

    editor.execute(Command::Redo).unwrap();
    editor.execute(Command::Redo).unwrap();
    assert_eq!(editor.text(), "function f() { ");
    assert_eq!(editor.full_text(), "function f() { \n  x=1;\n}");
    assert_eq!(editor.selection(), Selection::caret(15));
    assert_eq!(editor.execute(Command::Redo), Ok(CommandResult::Noop));
}

#[test]
fn test_undo_puts_the_caret_where_typing_started() {
    let mut editor = common::editor("abc");
    common::caret_at(&mut editor, 0, 3);
    editor.execute(Command::Key(Key::Char('x'))).unwrap();
    editor.execute(Command::Key(Key::Char('y'))).unwrap();

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "abc");
    assert_eq!(editor.selection(), Selection::caret(3));
}

#[test]
fn test_undo_after_moving_the_caret_between_pastes() {
    let mut editor = common::editor("hello");
    common::caret_at(&mut editor, 0, 5);
    editor.execute(Command::Paste("!".to_string())).unwrap();
    common::caret_at(&mut editor, 0, 0);
    editor.execute(Command::Paste("> ".to_string())).unwrap();
    assert_eq!(editor.text(), "> hello!");

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "hello!");
    assert_eq!(editor.selection(), Selection::caret(0));

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "hello");
    assert_eq!(editor.selection(), Selection::caret(5));
}

#[test]
fn test_undo_line_move_restores_the_caret() {
    let mut editor = common::editor("one
two
three");
    common::caret_at(&mut editor, 2, 2);
    editor.execute(Command::MoveLineUp).unwrap();
    assert_eq!(editor.text(), "one
three
two");

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "one
two
three");
    assert_eq!(editor.selection(), Selection::caret(10));
}

#[test]
fn test_undo_brings_back_an_auto_unfolded_block() {
    let mut editor = common::editor(FUNCTION);
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
    common::caret_at(&mut editor, 0, 0);
    editor.execute(Command::Key(Key::Enter)).unwrap();
    assert!(editor.folds().is_empty());

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "function f() {");
    assert!(editor.folds().contains(0));
}

#[test]
fn test_typing_is_debounced_into_one_step() {
    let mut editor = common::editor("");
    let t0 = Instant::now();

    for (i, ch) in "abc".chars().enumerate() {
        let at = t0 + Duration::from_millis(100 * i as u64);
        editor.execute_at(Command::Key(Key::Char(ch)), at).unwrap();
    }
    assert!(editor.history().is_recording());
    assert!(!editor.tick(t0 + Duration::from_millis(400)));
    assert!(editor.tick(t0 + Duration::from_millis(500)));
    assert_eq!(editor.history().undo_depth(), 1);

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "");
}

#[test]
fn test_structural_command_flushes_pending_typing() {
    let mut editor = common::editor(FUNCTION);
    common::caret_at(&mut editor, 1, 6);
    editor.execute(Command::Key(Key::Char('2'))).unwrap();
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    assert!(!editor.history().is_recording());
    assert_eq!(editor.history().undo_depth(), 2);

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), "function f() {\n  x=1;2\n}");
    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.text(), FUNCTION);
}

#[test]
fn test_copy_and_cut_include_hidden_lines() {
    let mut editor = common::editor("a\nf {\n  x\n}\nb");
    editor.execute(Command::ToggleFold { view_line: 1 }).unwrap();
    assert_eq!(editor.text(), "a\nf {\nb");

    editor
        .execute(Command::SetSelection { start: 2, end: 7 })
        .unwrap();
    assert_eq!(
        editor.execute(Command::Copy),
        Ok(CommandResult::Text("f {\n  x\n}\nb".to_string()))
    );
    assert_eq!(editor.clipboard().read_text(), Ok("f {\n  x\n}\nb".to_string()));
    assert_eq!(editor.text(), "a\nf {\nb");

    editor
        .execute(Command::SetSelection { start: 0, end: 6 })
        .unwrap();
    assert_eq!(
        editor.execute(Command::Cut),
        Ok(CommandResult::Text("a\nf {\n  x\n}\n".to_string()))
    );
    assert_eq!(editor.text(), "b");
    assert!(editor.folds().is_empty());
    assert_eq!(editor.full_text(), "b");
}

#[test]
fn test_copy_without_selection_is_noop() {
    let mut editor = common::editor("abc");
    assert_eq!(editor.execute(Command::Copy), Ok(CommandResult::Noop));
    assert_eq!(editor.execute(Command::Cut), Ok(CommandResult::Noop));
}

#[test]
fn test_denied_clipboard_still_cuts() {
    common::init_logging();
    let mut editor = Editor::new(
        BufferSurface::new("keep\ndrop"),
        LanguageConfig::javascript(),
        EditorConfig::default(),
    )
    .with_clipboard(MemoryClipboard::denying());

    editor
        .execute(Command::SetSelection { start: 4, end: 9 })
        .unwrap();
    assert_eq!(
        editor.execute(Command::Cut),
        Ok(CommandResult::Text("\ndrop".to_string()))
    );
    assert_eq!(editor.text(), "keep");
    assert_eq!(editor.clipboard().read_text(), Ok(String::new()));
}

#[test]
fn test_move_lines_carry_folds() {
    let mut editor = common::editor("a\nf {\n  x\n}\nb");
    editor.execute(Command::ToggleFold { view_line: 1 }).unwrap();

    common::caret_at(&mut editor, 1, 1);
    assert_eq!(editor.execute(Command::MoveLineUp), Ok(CommandResult::Success));
    assert_eq!(editor.text(), "f {\na\nb");
    assert_eq!(editor.folds().keys().collect::<Vec<_>>(), vec![0]);
    assert_eq!(editor.full_text(), "f {\n  x\n}\na\nb");
    assert_eq!(editor.selection(), Selection::caret(1));
    assert_eq!(editor.execute(Command::MoveLineUp), Ok(CommandResult::Noop));

    editor.execute(Command::MoveLineDown).unwrap();
    editor.execute(Command::MoveLineDown).unwrap();
    assert_eq!(editor.text(), "a\nb\nf {");
    assert_eq!(editor.folds().keys().collect::<Vec<_>>(), vec![2]);
    assert_eq!(editor.full_text(), "a\nb\nf {\n  x\n}");
    assert_eq!(editor.execute(Command::MoveLineDown), Ok(CommandResult::Noop));

    editor.execute(Command::Undo).unwrap();
    assert_eq!(editor.full_text(), "a\nf {\n  x\n}\nb");
    assert_eq!(editor.folds().keys().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_fold_change_notifications() {
    let seen: Arc<Mutex<Vec<FoldChange>>> = Arc::default();
    let sink = Arc::clone(&seen);

    let mut editor = common::editor(FUNCTION);
    editor.on_fold_change(Box::new(move |change| {
        sink.lock().unwrap().push(change.clone());
    }));

    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
    common::caret_at(&mut editor, 0, 14);
    editor.execute(Command::Key(Key::Char(' '))).unwrap();

    let seen = seen.lock().unwrap();
    let kinds: Vec<FoldChangeKind> = seen.iter().map(|change| change.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FoldChangeKind::Toggled(FoldAction::Folded {
                header: 0,
                hidden: 2
            }),
            FoldChangeKind::Replaced,
        ]
    );
    assert!(seen.windows(2).all(|w| w[0].new_version == w[1].old_version));
}

#[test]
fn test_gutter_tracks_folds() {
    let mut editor = common::editor("a\nf {\n  x\n}\nb");
    editor.execute(Command::ToggleFold { view_line: 1 }).unwrap();

    let gutter = editor.gutter();
    let numbers: Vec<usize> = gutter.iter().map(|line| line.full_line + 1).collect();
    assert_eq!(numbers, vec![1, 2, 5]);
    assert_eq!(gutter[1].marker, FoldMarker::Collapsed { hidden: 2 });
    assert_eq!(gutter[1].placeholder_column, Some(4));
}

#[test]
fn test_python_folds_by_indentation() {
    let mut editor = common::editor("def f():\n    return 1\nf()");
    editor.set_language(LanguageConfig::python());

    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();
    assert_eq!(editor.text(), "def f():\nf()");
    assert_eq!(editor.full_text(), "def f():\n    return 1\nf()");
}

#[test]
fn test_crlf_document_round_trips_with_folds() {
    let mut editor = common::editor("f {\r\n  x\r\n}\r\ny");
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    assert_eq!(editor.text(), "f {\ny");
    assert_eq!(editor.full_text_with_line_ending(), "f {\r\n  x\r\n}\r\ny");
}

#[test]
fn test_pasted_crlf_counts_as_plain_lines() {
    let mut editor = common::editor("f {\n  x\n}\nend");
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    common::caret_at(&mut editor, 1, 0);
    editor
        .execute(Command::Paste("a\r\nb\r\n".to_string()))
        .unwrap();

    assert_eq!(editor.text(), "f {\na\nb\nend");
    assert!(editor.folds().contains(0));
    assert_eq!(editor.full_text(), "f {\n  x\n}\na\nb\nend");
}

#[test]
fn test_auto_close_wrap_keeps_inner_folds() {
    common::init_logging();
    let mut editor = Editor::new(
        BufferSurface::new("f {\n  x\n}"),
        LanguageConfig::javascript(),
        EditorConfig::default(),
    );
    editor.execute(Command::ToggleFold { view_line: 0 }).unwrap();

    editor
        .execute(Command::SetSelection { start: 0, end: 3 })
        .unwrap();
    editor.execute(Command::Key(Key::Char('('))).unwrap();

    assert_eq!(editor.text(), "(f {)");
    assert!(editor.folds().contains(0));
    assert_eq!(editor.full_text(), "(f {)\n  x\n}");
}
