//! KAY Parser - Recursive descent parser producing the KAY AST
//!
//! One token of lookahead, no backtracking. The first grammar violation
//! aborts the parse with a [`SyntaxError`].

mod error;
mod parser;

pub use error::*;
pub use parser::*;

use std::path::Path;

use kay_ast::Program;
use kay_lexer::{Scanner, SourceFile};

/// Parse a source string into a Program AST
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(Scanner::new(source));
    parser.parse_program()
}

/// Parse an already acquired source file
pub fn parse_source(source: &SourceFile) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(source.scanner());
    parser.parse_program()
}

/// Read and parse the program stored at `path`
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program, Error> {
    let source = SourceFile::load(path)?;
    Ok(parse_source(&source)?)
}
