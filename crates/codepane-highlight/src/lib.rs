//! `codepane-highlight` - regex token highlighting for `codepane` language definitions.
//!
//! The highlighter splits text with the language's tokenizer pattern and classifies each token
//! with the first rule that matches the *whole* token. It is *not* intended to be a parser.

use codepane_lang::{LanguageConfig, SyntaxRule};
use regex::Regex;
use std::fmt::Write as _;

/// Errors raised while compiling a language definition.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The tokenizer pattern does not compile.
    #[error("invalid tokenizer pattern for `{language}`: {source}")]
    InvalidTokenizer {
        /// Language name.
        language: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A rule pattern does not compile.
    #[error("invalid pattern for rule `{rule}`: {source}")]
    InvalidRule {
        /// Rule name.
        rule: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// One highlighted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text, exactly as it appears in the source.
    pub text: String,
    /// Name of the matching rule, or `None` for literal passthrough.
    pub rule: Option<String>,
}

impl Token {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            rule: None,
        }
    }
}

/// A compiled highlight rule.
#[derive(Debug, Clone)]
pub struct RegexRule {
    name: String,
    regex: Regex,
}

impl RegexRule {
    /// Compile a rule; the pattern is anchored so it must match a whole token.
    pub fn new(name: &str, pattern: &str) -> Result<Self, HighlightError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            HighlightError::InvalidRule {
                rule: name.to_string(),
                source,
            }
        })?;
        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the rule classifies `token`.
    pub fn matches(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

/// A regex highlighter built from a tokenizer and an ordered rule list.
#[derive(Debug, Clone)]
pub struct Highlighter {
    tokenizer: Regex,
    rules: Vec<RegexRule>,
}

impl Highlighter {
    /// Build a highlighter from already compiled parts.
    pub fn new(tokenizer: Regex, rules: Vec<RegexRule>) -> Self {
        Self { tokenizer, rules }
    }

    /// Compile the tokenizer and rules of a language definition.
    pub fn from_language(language: &LanguageConfig) -> Result<Self, HighlightError> {
        let tokenizer =
            Regex::new(&language.tokenizer).map_err(|source| HighlightError::InvalidTokenizer {
                language: language.name.clone(),
                source,
            })?;
        let rules = language
            .rules
            .iter()
            .map(|SyntaxRule { name, pattern }| RegexRule::new(name, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tokenizer, rules))
    }

    /// Compiled rules, in priority order.
    pub fn rules(&self) -> &[RegexRule] {
        &self.rules
    }

    /// Name of the first rule matching `token`.
    pub fn classify(&self, token: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(token))
            .map(RegexRule::name)
    }

    /// Split `text` into tokens in document order.
    ///
    /// Concatenating the token texts always yields `text` again.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in self.tokenizer.find_iter(text) {
            if m.is_empty() {
                continue;
            }
            if m.start() > last {
                tokens.push(Token::plain(&text[last..m.start()]));
            }
            tokens.push(Token {
                text: m.as_str().to_string(),
                rule: self.classify(m.as_str()).map(str::to_string),
            });
            last = m.end();
        }

        if last < text.len() {
            tokens.push(Token::plain(&text[last..]));
        }
        tokens
    }
}

/// Render tokens as HTML, wrapping classified tokens in `<span class="rule">`.
///
/// Text is escaped; newlines are kept as-is so the caller can choose `<pre>` or `<br>`.
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match &token.rule {
            Some(rule) => {
                let _ = write!(out, "<span class=\"{}\">", escape_html(rule));
                out.push_str(&escape_html(&token.text));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_html(&token.text)),
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
