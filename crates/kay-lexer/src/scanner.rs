//! Pull-based scanner producing one token per call

use kay_ast::Span;
use logos::Logos;
use tracing::{trace, warn};

use crate::token::{Lexeme, Token, TokenKind};

/// Lazily scans a source string into tokens.
///
/// Once the input is exhausted every call to [`Scanner::next_token`] returns
/// an `EndOfInput` token.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Lexeme>,
    len: usize,
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexeme::lexer(source),
            len: source.len(),
            exhausted: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        if self.exhausted {
            return Token::end_of_input(self.len);
        }

        let Some(result) = self.lexer.next() else {
            self.exhausted = true;
            trace!(offset = self.len, "end of input");
            return Token::end_of_input(self.len);
        };

        let text = self.lexer.slice();
        let range = self.lexer.span();
        let kind = match result {
            Ok(lexeme) => lexeme.classify(text),
            Err(()) => TokenKind::Other,
        };

        if kind == TokenKind::Other {
            warn!(text, start = range.start, "{}", kind.describe());
        } else {
            trace!(kind = kind.name(), text, start = range.start, "token");
        }

        Token::new(kind, text, Span::from(range))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        Some(self.next_token())
    }
}
