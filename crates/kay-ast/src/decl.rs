//! Declaration AST nodes

use serde::{Deserialize, Serialize};
use crate::{Type, Variable};

/// Binding of one variable to one type: `integer x`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub ty: Type,
    pub variable: Variable,
}

impl Declaration {
    pub fn new(ty: Type, variable: impl Into<Variable>) -> Self {
        Self {
            ty,
            variable: variable.into(),
        }
    }
}

/// Declarations in source order. `integer a, b;` contributes two entries.
pub type Declarations = Vec<Declaration>;
