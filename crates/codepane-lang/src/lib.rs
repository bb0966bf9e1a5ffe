#![warn(missing_docs)]
//! `codepane-lang` - data-driven language definitions for `codepane-core`.
//!
//! This crate intentionally stays lightweight and does **not** compile any regular expressions.
//! It provides plain structs describing a language (tokenizer pattern, ordered highlight rules,
//! reserved words, how blocks fold) that hosts can load from JSON or take from the built-ins.

use serde::{Deserialize, Serialize};

/// How the fold toggle engine finds the end of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldStrategy {
    /// Blocks are delimited by `{` / `}`.
    #[default]
    Braces,
    /// Blocks extend while lines are indented deeper than the header (Python-like).
    Indentation,
}

/// A named highlight rule.
///
/// The highlighter tries rules in order and the first whose pattern matches a whole token wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxRule {
    /// Rule name, used as the CSS class of the highlighted span (e.g. `keyword`).
    pub name: String,
    /// Regular expression (Rust `regex` syntax) a token must match entirely.
    pub pattern: String,
}

impl SyntaxRule {
    /// Create a rule from a name and a pattern.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Everything the editor kernel needs to know about a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language identifier (e.g. `javascript`).
    pub name: String,
    /// Tokenizer pattern; each match is one token, unmatched text passes through verbatim.
    pub tokenizer: String,
    /// Ordered highlight rules.
    #[serde(default)]
    pub rules: Vec<SyntaxRule>,
    /// Keywords offered by the suggestion index.
    #[serde(default)]
    pub reserved_words: Vec<String>,
    /// Block detection used for folding.
    #[serde(default)]
    pub fold_strategy: FoldStrategy,
}

impl LanguageConfig {
    /// Look up a built-in language by name (case-insensitive).
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Self::javascript()),
            "python" | "py" => Some(Self::python()),
            "html" => Some(Self::html()),
            "css" => Some(Self::css()),
            _ => None,
        }
    }

    /// All built-in languages.
    pub fn builtins() -> Vec<Self> {
        vec![Self::javascript(), Self::python(), Self::html(), Self::css()]
    }

    /// JavaScript.
    pub fn javascript() -> Self {
        Self {
            name: "javascript".to_string(),
            tokenizer: concat!(
                r"([a-zA-Z_$][a-zA-Z0-9_$]*)",
                r"|([0-9]+(?:\.[0-9]+)?)",
                r#"|(["'][^"']*?["'])"#,
                r"|(`(?:[^`\\$]|\\.|\$\{(?:[^{}\\]|\\.|\{[^}]*\})*\})*`)",
                r"|(//[^\n]*|/\*[\s\S]*?\*/)",
                r"|([+\-*/%=&|^!<>]=?|[~?:])",
                r"|([{}()\[\].,;])",
                r#"|(["'`])"#,
                r"|(\\)",
                r"|(\s+)",
            )
            .to_string(),
            rules: vec![
                SyntaxRule::new(
                    "keyword",
                    r"\b(?:function|return|var|let|const|if|else|for|while|class|import|export|new|throw|try|catch)\b",
                ),
                SyntaxRule::new("string", r#""[^"]*"|'[^']*'|`[\s\S]*`"#),
                SyntaxRule::new("number", r"\d+(?:\.\d+)?"),
                SyntaxRule::new("comment", r"//[^\n]*|/\*[\s\S]*?\*/"),
                SyntaxRule::new("operator", r"[+\-*/%=&|^!<>]=?|[~?]"),
                SyntaxRule::new("convention", r"[:;{}()\[\].,]"),
            ],
            reserved_words: words(&[
                "function", "var", "let", "const", "if", "else", "for", "while", "return",
            ]),
            fold_strategy: FoldStrategy::Braces,
        }
    }

    /// Python.
    pub fn python() -> Self {
        Self {
            name: "python".to_string(),
            tokenizer: concat!(
                r"([a-zA-Z_][a-zA-Z0-9_]*)",
                r"|([0-9]+(?:\.[0-9]+)?)",
                r#"|("""[\s\S]*?"""|'''[\s\S]*?'''|"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*')"#,
                r"|(#.*)",
                r"|([+\-*/%=&|^!<>]=?|[~?:])",
                r"|([{}()\[\].,;])",
                r#"|(["'])"#,
                r"|(\s+)",
            )
            .to_string(),
            rules: vec![
                SyntaxRule::new(
                    "keyword",
                    r"\b(?:def|return|if|else|elif|for|while|class|import|from|as|try|except|finally)\b",
                ),
                SyntaxRule::new("string", r#""[\s\S]*"|'[\s\S]*'"#),
                SyntaxRule::new("number", r"\d+(?:\.\d+)?"),
                SyntaxRule::new("comment", r"#.*"),
                SyntaxRule::new("operator", r"[+\-*/%=&|^!<>]=?|[~?:]"),
            ],
            reserved_words: words(&[
                "def", "return", "if", "else", "elif", "for", "while", "class", "import",
            ]),
            fold_strategy: FoldStrategy::Indentation,
        }
    }

    /// HTML.
    pub fn html() -> Self {
        Self {
            name: "html".to_string(),
            tokenizer: concat!(
                r"(<!--[\s\S]*?-->)",
                r"|(</?[a-zA-Z][a-zA-Z0-9\-]*\s*[^>]*>)",
                r#"|("[^"]*"|'[^']*')"#,
                r"|(\s+)",
            )
            .to_string(),
            rules: vec![
                SyntaxRule::new("comment", r"<!--[\s\S]*?-->"),
                SyntaxRule::new("keyword", r"</?[a-zA-Z][a-zA-Z0-9\-]*\s*[^>]*>"),
                SyntaxRule::new("string", r#""[^"]*"|'[^']*'"#),
            ],
            reserved_words: Vec::new(),
            fold_strategy: FoldStrategy::Indentation,
        }
    }

    /// CSS.
    pub fn css() -> Self {
        Self {
            name: "css".to_string(),
            tokenizer: concat!(
                r"([a-zA-Z_\-][a-zA-Z0-9_\-]*)",
                r"|([0-9]+(?:\.[0-9]+)?(?:px|em|rem|%)?)",
                r#"|("(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*')"#,
                r"|(/\*[\s\S]*?\*/)",
                r"|([{}()\[\].,:;])",
                r"|([+\-*/%=&|^!<>]=?)",
                r"|(\s+)",
            )
            .to_string(),
            rules: vec![
                SyntaxRule::new(
                    "keyword",
                    r"\b(?:display|flex|grid|position|relative|absolute|margin|padding)\b",
                ),
                SyntaxRule::new("string", r#""[\s\S]*"|'[\s\S]*'"#),
                SyntaxRule::new("number", r"\d+(?:\.\d+)?(?:px|em|rem|%)?"),
                SyntaxRule::new("comment", r"/\*[\s\S]*?\*/"),
                SyntaxRule::new("operator", r"[:;{}]"),
            ],
            reserved_words: Vec::new(),
            fold_strategy: FoldStrategy::Braces,
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}
