//! Declared types in KAY

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a declared variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// `integer`
    Integer,
    /// `bool`
    Boolean,
}

impl Type {
    /// The keyword that introduces this type in source
    pub fn keyword(&self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Boolean => "bool",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Type> {
        match word {
            "integer" => Some(Type::Integer),
            "bool" => Some(Type::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => write!(f, "INTEGER"),
            Type::Boolean => write!(f, "BOOLEAN"),
        }
    }
}
