//! KAY AST - Core types for the abstract syntax tree
//!
//! This crate defines the AST node types produced by the parser, the
//! `Span` type used for token locations, and printers that turn a tree
//! back into text.

mod span;
mod types;
mod expr;
mod stmt;
mod decl;
mod printer;
mod tree;

pub use span::*;
pub use types::*;
pub use expr::*;
pub use stmt::*;
pub use decl::*;
pub use printer::*;
pub use tree::*;

use serde::{Deserialize, Serialize};

/// A complete KAY program: `main { declarations statements }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Declarations,
    pub body: Block,
}

impl Program {
    pub fn new(declarations: Declarations, body: Block) -> Self {
        Self { declarations, body }
    }

    /// Names of all declared variables, in source order
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.variable.name.as_str())
    }
}
