//! KAY - front end for a small imperative teaching language
//!
//! This is the root workspace crate that hosts the integration tests.
//! The implementation lives in the workspace member crates.

// Re-export main crates for convenience
pub use kay_ast as ast;
pub use kay_lexer as lexer;
pub use kay_parser as parser;

pub use kay_parser::{parse, parse_file, parse_source, SyntaxError};
