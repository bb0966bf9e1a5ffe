//! Completion candidates.
//!
//! The index scans the buffer for declared identifiers and object literals; candidates are
//! offered for the word before the caret. Drawing the popup is left to the host.

use crate::text::byte_index;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:let|const|var|function)\s+(\w+)").expect("valid declaration regex")
});

static OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*=\s*\{").expect("valid object regex"));

/// Identifiers found in a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionIndex {
    variables: BTreeSet<String>,
    objects: BTreeSet<String>,
}

impl SuggestionIndex {
    /// Scan `text` for `let|const|var|function name` and `name = {`.
    pub fn scan(text: &str) -> Self {
        let variables = DECLARATION
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        let objects = OBJECT
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        Self { variables, objects }
    }

    /// Declared names.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    /// Names assigned an object literal.
    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(String::as_str)
    }

    /// Candidates starting with `prefix`: reserved words, then variables, then objects.
    ///
    /// Each group is sorted; a name already offered by an earlier group is not repeated. An
    /// empty prefix yields nothing.
    pub fn suggestions(&self, prefix: &str, reserved_words: &[String]) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let mut seen = BTreeSet::new();
        let mut out = Vec::new();

        let reserved: BTreeSet<&str> = reserved_words.iter().map(String::as_str).collect();
        let groups = [
            reserved.into_iter().collect::<Vec<_>>(),
            self.variables().collect(),
            self.objects().collect(),
        ];
        for group in groups {
            for name in group {
                if name.starts_with(prefix) && seen.insert(name) {
                    out.push(name.to_string());
                }
            }
        }
        out
    }
}

/// The whitespace-delimited word ending at `caret` (a character offset).
pub fn word_before(text: &str, caret: usize) -> &str {
    let before = &text[..byte_index(text, caret)];
    let start = before
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(0, |(i, ch)| i + ch.len_utf8());
    &before[start..]
}
