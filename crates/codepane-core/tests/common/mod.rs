//! Shared helpers for integration tests.
#![allow(dead_code)]

use codepane_core::{BufferSurface, Editor, EditorConfig, LanguageConfig, Selection};
use rand::Rng;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a test subscriber once; `CODEPANE_LOG` (or `RUST_LOG`) selects the level.
pub fn init_logging() {
    let filter = std::env::var("CODEPANE_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::from_default_env());
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// A JavaScript editor without auto-closing, so keys map one-to-one to text.
pub fn editor(text: &str) -> Editor<BufferSurface> {
    init_logging();
    let config = EditorConfig {
        auto_close_pairs: false,
        ..EditorConfig::default()
    };
    Editor::new(BufferSurface::new(text), LanguageConfig::javascript(), config)
}

/// Character offset of `(line, column)` in `text`.
pub fn offset_of(text: &str, line: usize, column: usize) -> usize {
    text.split('\n')
        .take(line)
        .map(|l| l.chars().count() + 1)
        .sum::<usize>()
        + column
}

/// Put the caret at `(line, column)` of the view.
pub fn caret_at(editor: &mut Editor<BufferSurface>, line: usize, column: usize) {
    let offset = offset_of(editor.text(), line, column);
    editor
        .execute(codepane_core::Command::SetSelection {
            start: offset,
            end: offset,
        })
        .unwrap();
    assert_eq!(editor.selection(), Selection::caret(offset));
}

/// A random brace-structured document.
pub fn random_document(rng: &mut impl Rng, blocks: usize) -> String {
    let mut lines = Vec::new();
    let mut counter = 0;
    for _ in 0..blocks {
        if rng.gen_bool(0.3) {
            lines.push(format!("let v{counter} = {counter};"));
            counter += 1;
        }
        push_block(rng, 0, &mut counter, &mut lines);
    }
    lines.push("end();".to_string());
    lines.join("\n")
}

fn push_block(rng: &mut impl Rng, depth: usize, counter: &mut usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    lines.push(format!("{indent}function f{counter}() {{"));
    *counter += 1;

    let children = rng.gen_range(1..4);
    for _ in 0..children {
        if depth < 3 && rng.gen_bool(0.35) {
            push_block(rng, depth + 1, counter, lines);
        } else {
            lines.push(format!("{indent}  x{counter} = {counter};"));
            *counter += 1;
        }
    }
    lines.push(format!("{indent}}}"));
}
