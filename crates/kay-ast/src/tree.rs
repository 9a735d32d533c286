//! Indented tree display of a parsed program, one node per line

use crate::{Block, Expression, Program, Statement};

/// Render the whole program as an indented tree
pub fn display_tree(program: &Program) -> String {
    let mut tree = TreeWriter::default();
    tree.program(program);
    tree.finish()
}

/// Render a single expression subtree
pub fn display_expression(expr: &Expression) -> String {
    let mut tree = TreeWriter::default();
    tree.expression(expr, 0);
    tree.finish()
}

#[derive(Default)]
struct TreeWriter {
    lines: Vec<String>,
}

impl TreeWriter {
    fn line(&mut self, level: usize, text: impl AsRef<str>) {
        self.lines.push(format!("{}{}", "  ".repeat(level), text.as_ref()));
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn program(&mut self, program: &Program) {
        self.line(0, "Program");
        self.line(1, "Declarations");
        for decl in &program.declarations {
            self.line(2, format!("Declaration: {} {}", decl.ty, decl.variable));
        }
        self.block(&program.body, 1);
    }

    fn block(&mut self, block: &Block, level: usize) {
        self.line(level, "Block");
        for stmt in &block.members {
            self.statement(stmt, level + 1);
        }
    }

    fn statement(&mut self, stmt: &Statement, level: usize) {
        match stmt {
            Statement::Skip => self.line(level, "Skip"),
            Statement::Assignment(a) => {
                self.line(level, "Assignment");
                self.line(level + 1, format!("Variable: {}", a.target));
                self.expression(&a.source, level + 1);
            }
            Statement::Conditional(c) => {
                self.line(level, "Conditional");
                self.expression(&c.test, level + 1);
                self.statement(&c.then_branch, level + 1);
                if let Some(else_branch) = &c.else_branch {
                    self.line(level, "Else");
                    self.statement(else_branch, level + 1);
                }
            }
            Statement::Loop(l) => {
                self.line(level, "Loop");
                self.expression(&l.test, level + 1);
                self.statement(&l.body, level + 1);
            }
            Statement::Block(b) => self.block(b, level),
        }
    }

    fn expression(&mut self, expr: &Expression, level: usize) {
        match expr {
            Expression::Variable(v) => self.line(level, format!("Variable: {}", v)),
            Expression::Value(v) => self.line(level, format!("Value: {}", v)),
            Expression::Unary { op, operand } => {
                self.line(level, format!("Unary: {}", op));
                self.expression(operand, level + 1);
            }
            Expression::Binary { op, left, right } => {
                self.line(level, format!("Binary: {}", op));
                self.expression(left, level + 1);
                self.expression(right, level + 1);
            }
        }
    }
}
