//! Statement parsing: let, return, block and expression statements.

use super::expr::parse_expression;
use super::lookups::Precedence;
use super::Parser;
use crate::ast::{Block, Ident, Stmt};
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Dispatches on the current token. Anything that is not a dedicated
    /// statement form is a bare expression statement.
    pub(crate) fn parse_statement(&mut self) -> Stmt {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => Stmt::Block(self.parse_block_statement()),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Stmt {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return Stmt::Error;
        }
        let name = Ident {
            token: self.cur_token.clone(),
            name: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return Stmt::Error;
        }

        self.next_token();
        let value = parse_expression(self, Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Stmt::Let { token, name, value }
    }

    fn parse_return_statement(&mut self) -> Stmt {
        let token = self.cur_token.clone();

        self.next_token();
        let value = parse_expression(self, Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Stmt::Return { token, value }
    }

    fn parse_expression_statement(&mut self) -> Stmt {
        let expr = parse_expression(self, Precedence::Lowest);

        // the statement terminator is optional
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Stmt::ExprStmt(expr)
    }

    /// Parses a brace-delimited statement sequence. Entered with `{` current
    /// and consumes its own closing `}`, leaving it current. Running out of
    /// input before the `}` is a recorded error, not a hang.
    pub(crate) fn parse_block_statement(&mut self) -> Block {
        let open_span = self.cur_token.span.clone();
        self.next_token();

        let mut stmts = Vec::new();
        loop {
            if self.cur_is(TokenKind::RBrace) {
                break;
            }
            if self.cur_is(TokenKind::Eof) {
                self.error("unexpected end of input, expected `}`", open_span.clone());
                break;
            }
            stmts.push(self.parse_statement());
            self.next_token();
        }

        Block { stmts }
    }
}
