//! Parser error types

use kay_ast::Span;
use kay_lexer::{SourceError, Token, TokenKind};
use thiserror::Error;

/// A grammar violation. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("syntax error in {context}: expecting {expected} but saw {found_kind} {found_text:?}")]
    UnexpectedToken {
        /// Grammar rule that was being parsed
        context: &'static str,
        expected: String,
        found_kind: TokenKind,
        found_text: String,
        span: Span,
    },

    #[error("syntax error: integer literal {text} is out of range")]
    InvalidLiteral { text: String, span: Span },

    #[error("syntax error: statements and parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. } => *span,
            SyntaxError::InvalidLiteral { span, .. } => *span,
            SyntaxError::NestingTooDeep { span, .. } => *span,
        }
    }

    pub fn unexpected(context: &'static str, expected: impl Into<String>, found: &Token) -> Self {
        SyntaxError::UnexpectedToken {
            context,
            expected: expected.into(),
            found_kind: found.kind,
            found_text: found.text.clone(),
            span: found.span,
        }
    }

    /// The expected element, for `UnexpectedToken`
    pub fn expected(&self) -> Option<&str> {
        match self {
            SyntaxError::UnexpectedToken { expected, .. } => Some(expected),
            SyntaxError::InvalidLiteral { .. } | SyntaxError::NestingTooDeep { .. } => None,
        }
    }

    /// Kind and lexeme of the offending token
    pub fn found(&self) -> Option<(TokenKind, &str)> {
        match self {
            SyntaxError::UnexpectedToken {
                found_kind,
                found_text,
                ..
            } => Some((*found_kind, found_text)),
            SyntaxError::InvalidLiteral { text, .. } => Some((TokenKind::Literal, text)),
            SyntaxError::NestingTooDeep { .. } => None,
        }
    }
}

/// Failure of a whole translation from a file: either the source could not
/// be read or it did not parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
