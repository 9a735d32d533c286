//! Statement AST nodes

use serde::{Deserialize, Serialize};
use crate::{Expression, Variable};

/// A statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Empty statement: `;`
    Skip,

    /// Assignment: `x := e;`
    Assignment(Assignment),

    /// Conditional: `if (e) s [else s]`
    Conditional(Conditional),

    /// Loop: `while (e) s`
    Loop(Loop),

    /// Nested block: `{ s* }`
    Block(Block),
}

/// An ordered sequence of statements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub members: Vec<Statement>,
}

impl Block {
    pub fn new(members: Vec<Statement>) -> Self {
        Self { members }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Variable,
    pub source: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub test: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loop {
    pub test: Expression,
    pub body: Box<Statement>,
}

impl Statement {
    pub fn assign(target: impl Into<Variable>, source: Expression) -> Self {
        Statement::Assignment(Assignment {
            target: target.into(),
            source,
        })
    }

    pub fn conditional(test: Expression, then_branch: Statement, else_branch: Option<Statement>) -> Self {
        Statement::Conditional(Conditional {
            test,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn while_loop(test: Expression, body: Statement) -> Self {
        Statement::Loop(Loop {
            test,
            body: Box::new(body),
        })
    }

    pub fn block(members: Vec<Statement>) -> Self {
        Statement::Block(Block::new(members))
    }
}
