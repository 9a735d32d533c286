//! Recursive descent parser implementation

use kay_ast::*;
use kay_lexer::{Scanner, Token, TokenKind};
use tracing::{debug, trace};

use crate::SyntaxError;

/// Deepest allowed combination of nested statements and parenthesized
/// expressions. Every level costs several stack frames.
pub const MAX_NESTING: usize = 128;

pub struct Parser<'src> {
    scanner: Scanner<'src>,
    token: Token,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let token = scanner.next_token();
        Self {
            scanner,
            token,
            depth: 0,
        }
    }

    // === Utilities ===

    /// Consume the current token and pull the next one from the scanner
    fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        std::mem::replace(&mut self.token, next)
    }

    /// Match a keyword, separator or operator by exact lexeme
    fn expect(
        &mut self,
        kind: TokenKind,
        text: &str,
        context: &'static str,
    ) -> Result<Token, SyntaxError> {
        if self.token.is(kind, text) {
            Ok(self.advance())
        } else {
            Err(SyntaxError::unexpected(context, format!("'{}'", text), &self.token))
        }
    }

    /// Match any token of the given kind
    fn expect_kind(&mut self, kind: TokenKind, context: &'static str) -> Result<Token, SyntaxError> {
        if self.token.kind == kind {
            Ok(self.advance())
        } else {
            Err(SyntaxError::unexpected(context, kind.name(), &self.token))
        }
    }

    fn at_operator(&self, ops: &[&str]) -> bool {
        self.token.kind == TokenKind::Operator && ops.contains(&self.token.text.as_str())
    }

    fn take_operator(&mut self) -> Operator {
        Operator::new(self.advance().text)
    }

    /// Run `f` one nesting level deeper, failing once `MAX_NESTING` is reached
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING,
                span: self.token.span,
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // === Program ===

    /// Program := "main" "{" Declarations Statements "}"
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        debug!("parsing program");
        self.expect(TokenKind::Keyword, "main", "program")?;
        self.expect(TokenKind::Separator, "{", "program")?;

        let declarations = self.parse_declarations()?;
        let body = self.parse_statements()?;

        self.expect(TokenKind::Separator, "}", "program")?;
        self.expect_kind(TokenKind::EndOfInput, "program")?;

        debug!(
            declarations = declarations.len(),
            statements = body.members.len(),
            "parsed program"
        );
        Ok(Program::new(declarations, body))
    }

    // === Declarations ===

    /// Declarations := { Type Identifier { "," Identifier } ";" }
    fn parse_declarations(&mut self) -> Result<Declarations, SyntaxError> {
        let mut declarations = Vec::new();

        while self.token.is_keyword("integer") || self.token.is_keyword("bool") {
            let ty = self.parse_type()?;

            loop {
                let name = self.expect_kind(TokenKind::Identifier, "declaration")?;
                trace!(name = %name.text, %ty, "declared");
                declarations.push(Declaration::new(ty, name.text));

                if self.token.is_separator(",") {
                    self.advance();
                } else {
                    break;
                }
            }

            self.expect(TokenKind::Separator, ";", "declaration")?;
        }

        Ok(declarations)
    }

    /// Type := "integer" | "bool"
    fn parse_type(&mut self) -> Result<Type, SyntaxError> {
        let ty = match self.token.kind {
            TokenKind::Keyword => Type::from_keyword(&self.token.text),
            _ => None,
        };

        match ty {
            Some(ty) => {
                self.advance();
                Ok(ty)
            }
            None => Err(SyntaxError::unexpected(
                "type",
                "'integer' or 'bool'",
                &self.token,
            )),
        }
    }

    // === Statements ===

    /// Statements := { Statement }, up to the closing brace
    fn parse_statements(&mut self) -> Result<Block, SyntaxError> {
        let mut members = Vec::new();
        while !self.token.is_separator("}") && !self.token.is_eof() {
            members.push(self.parse_statement()?);
        }
        Ok(Block::new(members))
    }

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> Result<Statement, SyntaxError> {
        trace!(token = %self.token, depth = self.depth, "statement");

        match self.token.kind {
            TokenKind::Separator if self.token.text == ";" => {
                self.advance();
                Ok(Statement::Skip)
            }
            TokenKind::Separator if self.token.text == "{" => {
                Ok(Statement::Block(self.parse_block()?))
            }
            TokenKind::Keyword if self.token.text == "if" => self.parse_conditional(),
            TokenKind::Keyword if self.token.text == "while" => self.parse_loop(),
            TokenKind::Identifier => self.parse_assignment(),
            _ => Err(SyntaxError::unexpected(
                "statement",
                "';', '{', 'if', 'while' or identifier",
                &self.token,
            )),
        }
    }

    /// Block := "{" Statements "}"
    fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        self.expect(TokenKind::Separator, "{", "block")?;
        let block = self.parse_statements()?;
        self.expect(TokenKind::Separator, "}", "block")?;
        Ok(block)
    }

    /// Assignment := Identifier ":=" Expression ";"
    fn parse_assignment(&mut self) -> Result<Statement, SyntaxError> {
        let target = self.expect_kind(TokenKind::Identifier, "assignment")?;
        self.expect(TokenKind::Operator, ":=", "assignment")?;
        let source = self.parse_expression()?;
        self.expect(TokenKind::Separator, ";", "assignment")?;

        Ok(Statement::Assignment(Assignment {
            target: Variable::new(target.text),
            source,
        }))
    }

    /// Conditional := "if" "(" Expression ")" Statement [ "else" Statement ]
    fn parse_conditional(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Keyword, "if", "if statement")?;
        self.expect(TokenKind::Separator, "(", "if statement")?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::Separator, ")", "if statement")?;
        let then_branch = self.parse_statement()?;

        let else_branch = if self.token.is_keyword("else") {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::Conditional(Conditional {
            test,
            then_branch: Box::new(then_branch),
            else_branch,
        }))
    }

    /// Loop := "while" "(" Expression ")" Statement
    fn parse_loop(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Keyword, "while", "while statement")?;
        self.expect(TokenKind::Separator, "(", "while statement")?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::Separator, ")", "while statement")?;
        let body = self.parse_statement()?;

        Ok(Statement::Loop(Loop {
            test,
            body: Box::new(body),
        }))
    }

    // === Expressions ===

    /// Expression := Conjunction { "||" Conjunction }
    pub fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_conjunction()?;

        while self.at_operator(&[Operator::OR]) {
            let op = self.take_operator();
            let right = self.parse_conjunction()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Conjunction := Relation { "&&" Relation }
    fn parse_conjunction(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_relation()?;

        while self.at_operator(&[Operator::AND]) {
            let op = self.take_operator();
            let right = self.parse_relation()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Relation := Addition [ RelOp Addition ]
    ///
    /// Comparisons do not chain: a second relational operator is left for
    /// the caller, which rejects it.
    fn parse_relation(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.parse_addition()?;

        if !self.at_operator(Operator::RELATIONAL) {
            return Ok(left);
        }

        let op = self.take_operator();
        let right = self.parse_addition()?;
        Ok(Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Addition := Term { ("+"|"-") Term }
    fn parse_addition(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_term()?;

        while self.at_operator(&[Operator::PLUS, Operator::MINUS]) {
            let op = self.take_operator();
            let right = self.parse_term()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Term := Negation { ("*"|"/") Negation }
    fn parse_term(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_negation()?;

        while self.at_operator(&[Operator::TIMES, Operator::DIV]) {
            let op = self.take_operator();
            let right = self.parse_negation()?;
            left = Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Negation := "!" Factor | Factor
    fn parse_negation(&mut self) -> Result<Expression, SyntaxError> {
        if !self.at_operator(&[Operator::NOT]) {
            return self.parse_factor();
        }

        let op = self.take_operator();
        let operand = self.parse_factor()?;
        Ok(Expression::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    /// Factor := Identifier | IntegerLiteral | "True" | "False" | "(" Expression ")"
    fn parse_factor(&mut self) -> Result<Expression, SyntaxError> {
        match self.token.kind {
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expression::Variable(Variable::new(token.text)))
            }
            TokenKind::Literal => {
                let token = self.advance();
                match token.text.parse::<i32>() {
                    Ok(n) => Ok(Expression::Value(Value::Integer(n))),
                    Err(_) => Err(SyntaxError::InvalidLiteral {
                        text: token.text,
                        span: token.span,
                    }),
                }
            }
            TokenKind::Keyword if self.token.text == "True" => {
                self.advance();
                Ok(Expression::Value(Value::Boolean(true)))
            }
            TokenKind::Keyword if self.token.text == "False" => {
                self.advance();
                Ok(Expression::Value(Value::Boolean(false)))
            }
            TokenKind::Separator if self.token.text == "(" => self.nested(|parser| {
                parser.advance();
                let expr = parser.parse_expression()?;
                parser.expect(TokenKind::Separator, ")", "factor")?;
                Ok(expr)
            }),
            _ => Err(SyntaxError::unexpected(
                "factor",
                "identifier, integer literal, 'True', 'False' or '('",
                &self.token,
            )),
        }
    }
}
