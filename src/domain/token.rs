//! Display tokenizer for raw expression text.
//!
//! Tokens are for display only. Classification looks at the lexeme's
//! character class, never at grammatical context.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Lexeme extraction in priority order: digit runs, letter runs, single symbols.
const LEXEME_PATTERN: &str = r"[0-9]+|[a-zA-Z]+|[-+*/=()]";

static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::new);

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Operator,
    Equals,
    Number,
    Identifier,
}

impl TokenKind {
    /// Derive the kind from the lexeme shape; `None` for anything unclassified
    /// (e.g. a lone parenthesis).
    pub fn classify(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        if text.chars().all(|c| matches!(c, '+' | '-' | '*' | '/')) {
            Some(Self::Operator)
        } else if text.chars().all(|c| c == '=') {
            Some(Self::Equals)
        } else if text.chars().all(|c| c.is_ascii_digit()) {
            Some(Self::Number)
        } else if text.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self::Identifier)
        } else {
            None
        }
    }

    /// CSS class used by the HTML report.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Equals => "equals",
            Self::Number => "number",
            Self::Identifier => "identifier",
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// `None` renders as a generic token
    pub kind: Option<TokenKind>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = TokenKind::classify(&text);
        Self { text, kind }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens of one retained (non-blank) input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// 0-based position among retained lines
    pub index: usize,
    pub tokens: Vec<Token>,
}

impl TokenLine {
    /// Label shown in front of the line, e.g. `Line 1:`.
    pub fn label(&self) -> String {
        format!("Line {}:", self.index + 1)
    }
}

/// Splits expressions into display tokens, line by line.
pub struct Tokenizer {
    lexeme_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            lexeme_regex: Regex::new(LEXEME_PATTERN).expect("lexeme pattern is a valid regex"),
        }
    }

    /// Tokenize every non-blank line of `expression`.
    ///
    /// Blank and whitespace-only lines are dropped and do not consume an index.
    /// Characters outside the recognized lexemes are skipped silently.
    pub fn tokenize(&self, expression: &str) -> Vec<TokenLine> {
        expression
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, line)| TokenLine {
                index,
                tokens: self.tokenize_line(line),
            })
            .collect()
    }

    /// Tokenize a single line, preserving left-to-right order.
    pub fn tokenize_line(&self, line: &str) -> Vec<Token> {
        self.lexeme_regex
            .find_iter(line)
            .map(|m| Token::new(m.as_str()))
            .collect()
    }
}

/// Tokenize with a shared default [`Tokenizer`].
pub fn tokenize(expression: &str) -> Vec<TokenLine> {
    DEFAULT_TOKENIZER.tokenize(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lexeme_shapes() {
        assert_eq!(TokenKind::classify("+"), Some(TokenKind::Operator));
        assert_eq!(TokenKind::classify("="), Some(TokenKind::Equals));
        assert_eq!(TokenKind::classify("42"), Some(TokenKind::Number));
        assert_eq!(TokenKind::classify("abc"), Some(TokenKind::Identifier));
        assert_eq!(TokenKind::classify("("), None);
        assert_eq!(TokenKind::classify(")"), None);
        assert_eq!(TokenKind::classify(""), None);
    }

    #[test]
    fn test_unicode_digits_are_not_numbers() {
        // '٣' (Arabic-Indic three) is not in the lexeme set
        assert!(tokenize("٣").iter().all(|line| line.tokens.is_empty()));
    }

    #[test]
    fn test_crlf_line_breaks() {
        let lines = tokenize("a=1\r\nb=2\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].tokens.len(), 3);
    }
}
