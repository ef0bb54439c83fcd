//! Recursive-descent parser: consumes the token stream left-to-right and
//! builds a single [`Program`]. Binary operators are left-associative at
//! every precedence level via the standard "parse one operand, then loop
//! consuming same-precedence operators" shape.
//!
//! On a failed expectation the parser reports a diagnostic tagged with the
//! offending token's line and returns the partial tree built so far — there
//! is no token-synchronization panic mode.

use crate::ast::{Expr, Program, Stmt};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: Diagnostics,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, diagnostics: Diagnostics) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics,
        }
    }

    /// Parse as many statements as possible; on the first unrecoverable
    /// parse error, stop and return what was built so far.
    pub fn parse_program(mut self) -> Result<Program, Diagnostic> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.statement()? {
                Some(stmt) => statements.push(stmt),
                None => break,
            }
        }

        Ok(statements)
    }

    // --- token helpers ---------------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> Token {
        self.tokens[self.current - 1].clone()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_operator(&mut self, kinds: &[TokenKind]) -> Option<(String, usize)> {
        if kinds.contains(&self.peek().kind) {
            let token = self.advance();
            Some((operator_lexeme(token.kind).to_owned(), token.line))
        } else {
            None
        }
    }

    fn error(&self, message: impl Into<String>) -> Result<(), Diagnostic> {
        self.diagnostics.report(message, Some(self.peek().line))
    }

    // --- statements --------------------------------------------------

    fn statement(&mut self) -> Result<Option<Stmt>, Diagnostic> {
        if self.match_token(TokenKind::Dee) {
            return self.var_decl();
        }
        if self.match_token(TokenKind::Ma) {
            return self.if_stmt();
        }
        if self.match_token(TokenKind::Mgbe) {
            return self.while_stmt();
        }
        if self.match_token(TokenKind::Gosi) {
            return self.print_stmt();
        }

        Ok(self.expression()?.map(Stmt::Expression))
    }

    fn var_decl(&mut self) -> Result<Option<Stmt>, Diagnostic> {
        if !self.check(TokenKind::Identifier) {
            self.error("Expected identifier after 'dee'")?;
            return Ok(None);
        }
        let name = self
            .advance()
            .lexeme
            .expect("identifier token carries its lexeme");

        if !self.match_token(TokenKind::Assign) {
            self.error("Expected '=' after variable name")?;
            return Ok(None);
        }

        let Some(value) = self.expression()? else {
            return Ok(None);
        };

        Ok(Some(Stmt::VarDecl { name, value }))
    }

    fn if_stmt(&mut self) -> Result<Option<Stmt>, Diagnostic> {
        let Some(condition) = self.expression()? else {
            return Ok(None);
        };
        let Some(then_block) = self.block()? else {
            return Ok(None);
        };

        let else_block = if self.match_token(TokenKind::Mana) {
            let Some(block) = self.block()? else {
                return Ok(None);
            };
            Some(block)
        } else {
            None
        };

        Ok(Some(Stmt::If {
            condition,
            then_block,
            else_block,
        }))
    }

    fn while_stmt(&mut self) -> Result<Option<Stmt>, Diagnostic> {
        let Some(condition) = self.expression()? else {
            return Ok(None);
        };
        let Some(body) = self.block()? else {
            return Ok(None);
        };

        Ok(Some(Stmt::While { condition, body }))
    }

    fn print_stmt(&mut self) -> Result<Option<Stmt>, Diagnostic> {
        if !self.match_token(TokenKind::LParen) {
            self.error("Expected '(' after 'gosi'")?;
            return Ok(None);
        }
        let Some(value) = self.expression()? else {
            return Ok(None);
        };
        if !self.match_token(TokenKind::RParen) {
            self.error("Expected ')' after expression")?;
            return Ok(None);
        }

        Ok(Some(Stmt::Print { value }))
    }

    fn block(&mut self) -> Result<Option<Vec<Stmt>>, Diagnostic> {
        if !self.match_token(TokenKind::LBrace) {
            self.error("Expected '{' to start block")?;
            return Ok(None);
        }

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.statement()? {
                Some(stmt) => statements.push(stmt),
                None => return Ok(Some(statements)),
            }
        }

        if !self.match_token(TokenKind::RBrace) {
            self.error("Expected '}' after block")?;
        }

        Ok(Some(statements))
    }

    // --- expressions -------------------------------------------------

    fn expression(&mut self) -> Result<Option<Expr>, Diagnostic> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Option<Expr>, Diagnostic> {
        let Some(mut node) = self.comparison()? else {
            return Ok(None);
        };

        while let Some((op, line)) =
            self.match_operator(&[TokenKind::Equal, TokenKind::NotEqual])
        {
            let Some(rhs) = self.comparison()? else {
                return Ok(None);
            };
            node = Expr::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
                line,
            };
        }

        Ok(Some(node))
    }

    fn comparison(&mut self) -> Result<Option<Expr>, Diagnostic> {
        let Some(mut node) = self.term()? else {
            return Ok(None);
        };

        while let Some((op, line)) = self.match_operator(&[
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
        ]) {
            let Some(rhs) = self.term()? else {
                return Ok(None);
            };
            node = Expr::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
                line,
            };
        }

        Ok(Some(node))
    }

    fn term(&mut self) -> Result<Option<Expr>, Diagnostic> {
        let Some(mut node) = self.factor()? else {
            return Ok(None);
        };

        while let Some((op, line)) = self.match_operator(&[TokenKind::Plus, TokenKind::Minus]) {
            let Some(rhs) = self.factor()? else {
                return Ok(None);
            };
            node = Expr::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
                line,
            };
        }

        Ok(Some(node))
    }

    fn factor(&mut self) -> Result<Option<Expr>, Diagnostic> {
        let Some(mut node) = self.unary()? else {
            return Ok(None);
        };

        while let Some((op, line)) =
            self.match_operator(&[TokenKind::Multiply, TokenKind::Divide])
        {
            let Some(rhs) = self.unary()? else {
                return Ok(None);
            };
            node = Expr::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
                line,
            };
        }

        Ok(Some(node))
    }

    // Reserved for future negation; today just forwards to `primary`.
    fn unary(&mut self) -> Result<Option<Expr>, Diagnostic> {
        self.primary()
    }

    fn primary(&mut self) -> Result<Option<Expr>, Diagnostic> {
        let line = self.peek().line;

        if self.match_token(TokenKind::Number) {
            let text = self.previous().lexeme.expect("number token carries text");
            return Ok(Some(Expr::Number { text, line }));
        }
        if self.match_token(TokenKind::String) {
            let value = self.previous().lexeme.expect("string token carries text");
            return Ok(Some(Expr::Str { value, line }));
        }
        if self.match_token(TokenKind::Identifier) {
            let name = self
                .previous()
                .lexeme
                .expect("identifier token carries text");
            return Ok(Some(Expr::Identifier { name, line }));
        }
        if self.match_token(TokenKind::Eziokwu) {
            return Ok(Some(Expr::Bool { value: true, line }));
        }
        if self.match_token(TokenKind::Ugha) {
            return Ok(Some(Expr::Bool { value: false, line }));
        }
        if self.match_token(TokenKind::LParen) {
            let Some(expr) = self.expression()? else {
                return Ok(None);
            };
            if !self.match_token(TokenKind::RParen) {
                self.error("Expected ')' after expression")?;
                return Ok(None);
            }
            return Ok(Some(expr));
        }

        self.error("Unexpected token")?;
        Ok(None)
    }
}

fn operator_lexeme(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Multiply => "*",
        TokenKind::Divide => "/",
        TokenKind::Equal => "==",
        TokenKind::NotEqual => "!=",
        TokenKind::Less => "<",
        TokenKind::Greater => ">",
        TokenKind::LessEqual => "<=",
        TokenKind::GreaterEqual => ">=",
        _ => unreachable!("only called with operator token kinds"),
    }
}
