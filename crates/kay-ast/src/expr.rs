//! Expression AST nodes

use std::fmt;

use serde::{Deserialize, Serialize};

/// An expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// Variable reference: `x`
    Variable(Variable),

    /// Literal value: `42`, `True`
    Value(Value),

    /// Unary operation: `!done`
    Unary {
        op: Operator,
        operand: Box<Expression>,
    },

    /// Binary operation: `a + b`, `x <= 10`
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(Variable::new(name))
    }

    pub fn int(value: i32) -> Self {
        Expression::Value(Value::Integer(value))
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Value(Value::Boolean(value))
    }

    pub fn unary(op: impl Into<Operator>, operand: Expression) -> Self {
        Expression::Unary {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: impl Into<Operator>, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A reference to a named variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable::new(name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Literal values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Integer(i32),
    Boolean(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
        }
    }
}

/// An operator, identified by its exact lexeme
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operator(String);

impl Operator {
    pub const OR: &'static str = "||";
    pub const AND: &'static str = "&&";
    pub const LT: &'static str = "<";
    pub const LE: &'static str = "<=";
    pub const GT: &'static str = ">";
    pub const GE: &'static str = ">=";
    pub const EQ: &'static str = "==";
    pub const NE: &'static str = "!=";
    pub const LT_GT: &'static str = "<>";
    pub const PLUS: &'static str = "+";
    pub const MINUS: &'static str = "-";
    pub const TIMES: &'static str = "*";
    pub const DIV: &'static str = "/";
    pub const NOT: &'static str = "!";

    /// Operators accepted at the relation level
    pub const RELATIONAL: &'static [&'static str] = &[
        Self::LT,
        Self::LE,
        Self::GT,
        Self::GE,
        Self::EQ,
        Self::NE,
        Self::LT_GT,
    ];

    pub fn new(lexeme: impl Into<String>) -> Self {
        Operator(lexeme.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_relational(&self) -> bool {
        Self::RELATIONAL.contains(&self.as_str())
    }

    /// `||`, `&&` and `!`
    pub fn is_boolean(&self) -> bool {
        matches!(self.as_str(), Self::OR | Self::AND | Self::NOT)
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self.as_str(), Self::PLUS | Self::MINUS | Self::TIMES | Self::DIV)
    }
}

impl From<&str> for Operator {
    fn from(lexeme: &str) -> Self {
        Operator::new(lexeme)
    }
}

impl PartialEq<str> for Operator {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Operator {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
