//! Token definitions for KAY

use std::fmt;

use kay_ast::Span;
use logos::Logos;

/// Words that scan as `Keyword` instead of `Identifier`
pub const KEYWORDS: &[&str] = &["main", "integer", "bool", "if", "else", "while", "True", "False"];

/// Every lexeme that scans as `Operator`
pub const OPERATORS: &[&str] = &[
    ":=", "<=", ">=", "==", "!=", "&&", "||", "+", "-", "*", "/", "<", ">", "!",
];

/// Every lexeme that scans as `Separator`
pub const SEPARATORS: &[&str] = &["(", ")", "{", "}", ";", ","];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Literal,
    Operator,
    Separator,
    Other,
    EndOfInput,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Literal => "Literal",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Other => "Other",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Lower-case phrase for diagnostics, e.g. "integer literal"
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Literal => "integer literal",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Other => "unrecognized character",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn end_of_input(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", Span::new(offset, offset))
    }

    /// True if this token has the given kind and exact lexeme
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.is(TokenKind::Keyword, word)
    }

    pub fn is_separator(&self, sep: &str) -> bool {
        self.is(TokenKind::Separator, sep)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.text)
    }
}

/// Raw lexemes recognized by the logos state machine. The scanner maps
/// these onto `TokenKind`.
///
/// Letters, digits and whitespace are the Unicode classes, so `café` is one
/// identifier and U+2003 separates tokens. Integer literals stay ASCII.
///
/// `:`, `=`, `&` and `|` are only valid as the first half of a two-character
/// operator. On their own they match `Stray` so the following character is
/// left for the next token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\p{White_Space}+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
pub(crate) enum Lexeme {
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", priority = 2)]
    Word,

    #[regex(r"[0-9]+", priority = 2)]
    Digits,

    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token(";")]
    #[token(",")]
    Separator,

    #[token(":=")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("&&")]
    #[token("||")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    Operator,

    #[token(":")]
    #[token("=")]
    #[token("&")]
    #[token("|")]
    Stray,

    // Any other single character
    #[regex(r"\P{White_Space}", priority = 1)]
    Unknown,
}

impl Lexeme {
    pub(crate) fn classify(self, text: &str) -> TokenKind {
        match self {
            Lexeme::Word if is_keyword(text) => TokenKind::Keyword,
            Lexeme::Word => TokenKind::Identifier,
            Lexeme::Digits => TokenKind::Literal,
            Lexeme::Separator => TokenKind::Separator,
            Lexeme::Operator => TokenKind::Operator,
            Lexeme::Stray | Lexeme::Unknown => TokenKind::Other,
        }
    }
}
