mod common;

use codepane_core::{FoldMarker, FoldStore, FoldStrategy, collapse, expand, gutter_lines, toggle_fold};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_consistent(view: &str, store: &FoldStore, original: &str) {
    let expanded = expand(view, store);
    assert_eq!(expanded.full_text, original);
    assert_eq!(collapse(&expanded.full_text, store), view);
    assert_eq!(store.validate(view.split('\n').count()), Ok(()));

    for (i, full) in expanded.view_to_full.iter().enumerate() {
        assert_eq!(store.view_line_to_full(i), *full);
        assert_eq!(store.full_line_to_view(*full), Some(i));
    }
}

#[test]
fn test_toggle_scenario() {
    let source = "function f() {\n  x=1;\n}";
    let folded = toggle_fold(0, 0, source, &FoldStore::new(), FoldStrategy::Braces).unwrap();

    assert_eq!(folded.text, "function f() {");
    assert_eq!(folded.store.len(), 1);
    assert_eq!(
        folded.store.get(0),
        Some(&["  x=1;".to_string(), "}".to_string()][..])
    );

    let restored = toggle_fold(0, 0, &folded.text, &folded.store, FoldStrategy::Braces).unwrap();
    assert_eq!(restored.text, source);
    assert!(restored.store.is_empty());
}

#[test]
fn test_expand_on_empty_store_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let text = common::random_document(&mut rng, 3);
        let expanded = expand(&text, &FoldStore::new());
        assert_eq!(expanded.full_text, text);
        assert_eq!(
            expanded.view_to_full,
            (0..text.split('\n').count()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_random_toggles_never_change_the_full_text() {
    common::init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..40 {
        let blocks = rng.gen_range(1..5);
        let original = common::random_document(&mut rng, blocks);
        let mut view = original.clone();
        let mut store = FoldStore::new();

        for _ in 0..30 {
            let line_count = view.split('\n').count();
            let view_line = rng.gen_range(0..line_count);
            let header = store.view_line_to_full(view_line);

            if let Some(outcome) = toggle_fold(view_line, header, &view, &store, FoldStrategy::Braces)
            {
                view = outcome.text;
                store = outcome.store;
            }
            assert_consistent(&view, &store, &original);
        }
    }
}

#[test]
fn test_fold_all_then_unfold_all() {
    let mut rng = StdRng::seed_from_u64(42);
    let original = common::random_document(&mut rng, 4);
    let mut view = original.clone();
    let mut store = FoldStore::new();

    // Fold innermost blocks first by walking the view bottom-up.
    let mut line = view.split('\n').count();
    while line > 0 {
        line -= 1;
        let header = store.view_line_to_full(line);
        if let Some(outcome) = toggle_fold(line, header, &view, &store, FoldStrategy::Braces) {
            view = outcome.text;
            store = outcome.store;
        }
    }
    assert!(view.split('\n').all(|l| !l.starts_with(' ')));
    assert_consistent(&view, &store, &original);

    // Unfold from the top until nothing is folded.
    while !store.is_empty() {
        let (header, _) = store.top_level()[0];
        let view_line = store.full_line_to_view(header).unwrap();
        let outcome = toggle_fold(view_line, header, &view, &store, FoldStrategy::Braces).unwrap();
        view = outcome.text;
        store = outcome.store;
        assert_consistent(&view, &store, &original);
    }
    assert_eq!(view, original);
}

#[test]
fn test_gutter_numbers_follow_full_lines() {
    let source = "a {\n  b {\n    c\n  }\n}\nd";
    let inner = toggle_fold(1, 1, source, &FoldStore::new(), FoldStrategy::Braces).unwrap();
    let outer = toggle_fold(0, 0, &inner.text, &inner.store, FoldStrategy::Braces).unwrap();

    let gutter = gutter_lines(&outer.text, &outer.store, FoldStrategy::Braces);
    let numbers: Vec<usize> = gutter.iter().map(|g| g.full_line + 1).collect();
    assert_eq!(numbers, vec![1, 6]);
    assert_eq!(gutter[0].marker, FoldMarker::Collapsed { hidden: 4 });
}

#[test]
fn test_indentation_folding() {
    let source = "def f():\n    a = 1\n    if a:\n        b()\nprint(f)";
    let inner = toggle_fold(2, 2, source, &FoldStore::new(), FoldStrategy::Indentation).unwrap();
    assert_eq!(inner.text, "def f():\n    a = 1\n    if a:\nprint(f)");

    let outer = toggle_fold(0, 0, &inner.text, &inner.store, FoldStrategy::Indentation).unwrap();
    assert_eq!(outer.text, "def f():\nprint(f)");
    assert_consistent(&outer.text, &outer.store, source);
}
