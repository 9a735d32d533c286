//! Canonical text printer for KAY AST
//!
//! Serializes AST back to canonical `.kay` source. Uses two-space
//! indentation, one declaration per line, and parenthesizes every nested
//! binary expression so the output re-parses to the same tree.

use crate::{
    Assignment, Block, Conditional, Declaration, Expression, Loop, Program, Statement, Variable,
};

/// Trait for converting AST nodes to canonical KAY text.
pub trait ToKay {
    /// Convert to canonical `.kay` format with the given indentation level.
    fn to_kay(&self, indent: usize) -> String;
}

/// Helper to generate indentation string (two spaces per level).
fn indent_str(level: usize) -> String {
    "  ".repeat(level)
}

// ===== Program =====

impl ToKay for Program {
    fn to_kay(&self, indent: usize) -> String {
        let ind = indent_str(indent);
        let mut lines = vec![format!("{}main {{", ind)];

        for decl in &self.declarations {
            lines.push(decl.to_kay(indent + 1));
        }
        for stmt in &self.body.members {
            lines.push(stmt.to_kay(indent + 1));
        }

        lines.push(format!("{}}}", ind));
        lines.join("\n") + "\n"
    }
}

impl ToKay for Declaration {
    fn to_kay(&self, indent: usize) -> String {
        format!(
            "{}{} {};",
            indent_str(indent),
            self.ty.keyword(),
            self.variable.name
        )
    }
}

// ===== Statements =====

impl ToKay for Statement {
    fn to_kay(&self, indent: usize) -> String {
        match self {
            Statement::Skip => format!("{};", indent_str(indent)),
            Statement::Assignment(a) => a.to_kay(indent),
            Statement::Conditional(c) => c.to_kay(indent),
            Statement::Loop(l) => l.to_kay(indent),
            Statement::Block(b) => b.to_kay(indent),
        }
    }
}

impl ToKay for Block {
    fn to_kay(&self, indent: usize) -> String {
        let ind = indent_str(indent);
        if self.members.is_empty() {
            return format!("{}{{ }}", ind);
        }

        let mut lines = vec![format!("{}{{", ind)];
        for stmt in &self.members {
            lines.push(stmt.to_kay(indent + 1));
        }
        lines.push(format!("{}}}", ind));
        lines.join("\n")
    }
}

impl ToKay for Assignment {
    fn to_kay(&self, indent: usize) -> String {
        format!(
            "{}{} := {};",
            indent_str(indent),
            self.target.to_kay(0),
            expr_to_kay(&self.source, true)
        )
    }
}

impl ToKay for Conditional {
    fn to_kay(&self, indent: usize) -> String {
        let ind = indent_str(indent);
        let mut out = format!("{}if ({})", ind, expr_to_kay(&self.test, true));

        // An `else` after an unmatched inner `if` would bind to that `if`
        if self.else_branch.is_some() && ends_with_open_if(&self.then_branch) {
            out.push_str(&format!(
                " {{\n{}\n{}}}",
                self.then_branch.to_kay(indent + 1),
                ind
            ));
        } else {
            out.push_str(&branch(&self.then_branch, indent));
        }

        if let Some(else_branch) = &self.else_branch {
            if matches!(*self.then_branch, Statement::Block(_))
                || ends_with_open_if(&self.then_branch)
            {
                out.push_str(" else");
            } else {
                out.push_str(&format!("\n{}else", ind));
            }
            out.push_str(&branch(else_branch, indent));
        }

        out
    }
}

impl ToKay for Loop {
    fn to_kay(&self, indent: usize) -> String {
        format!(
            "{}while ({}){}",
            indent_str(indent),
            expr_to_kay(&self.test, true),
            branch(&self.body, indent)
        )
    }
}

/// True if `stmt` ends in an `if` without an `else` that a following `else`
/// could attach to.
fn ends_with_open_if(stmt: &Statement) -> bool {
    match stmt {
        Statement::Conditional(c) => match &c.else_branch {
            None => true,
            Some(else_branch) => ends_with_open_if(else_branch),
        },
        Statement::Loop(l) => ends_with_open_if(&l.body),
        _ => false,
    }
}

/// Body of an `if`/`else`/`while`: blocks open on the same line, any other
/// statement goes on its own line one level deeper.
fn branch(stmt: &Statement, indent: usize) -> String {
    match stmt {
        Statement::Block(block) => format!(" {}", block.to_kay(indent).trim_start()),
        other => format!("\n{}", other.to_kay(indent + 1)),
    }
}

// ===== Expressions =====

impl ToKay for Variable {
    fn to_kay(&self, _indent: usize) -> String {
        self.name.clone()
    }
}

impl ToKay for Expression {
    fn to_kay(&self, _indent: usize) -> String {
        expr_to_kay(self, true)
    }
}

fn expr_to_kay(expr: &Expression, top_level: bool) -> String {
    match expr {
        Expression::Variable(v) => v.to_kay(0),
        Expression::Value(v) => v.to_string(),
        Expression::Unary { op, operand } => match operand.as_ref() {
            Expression::Unary { .. } => format!("{}({})", op, expr_to_kay(operand, true)),
            _ => format!("{}{}", op, expr_to_kay(operand, false)),
        },
        Expression::Binary { op, left, right } => {
            let text = format!(
                "{} {} {}",
                expr_to_kay(left, false),
                op,
                expr_to_kay(right, false)
            );
            if top_level {
                text
            } else {
                format!("({})", text)
            }
        }
    }
}
