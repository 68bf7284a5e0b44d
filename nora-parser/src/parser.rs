//! Pratt parser for the nora language.
//!
//! The parser pulls tokens on demand from the [`Lexer`] and keeps a
//! two-token window (current + peek). Expression parsing is driven by three
//! lookup tables built once at construction: a prefix handler table, an
//! infix handler table, and a precedence table (see [`lookups`]).
//!
//! Syntax errors never abort a parse. Every failed structural expectation is
//! recorded in the [`Source`]'s error reporter and the offending routine
//! yields an `Expr::Error`/`Stmt::Error` sentinel, after which parsing
//! resumes on a best-effort basis. Callers must check
//! [`Source::has_no_errors`] before handing the AST to the evaluator.

use crate::ast::{Expr, Program};
use crate::lexer::{Lexer, Token, TokenKind};
use nora_source::{Source, SyntaxError};
use std::collections::HashMap;
use std::ops::Range;

pub mod lookups;

mod expr;
mod stmt;

use lookups::{InfixFn, InfixLookup, Precedence, PrecedenceLookup, PrefixFn, PrefixLookup};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Source code, used as the error sink.
    source: &'a Source<'a>,
    cur_token: Token,
    peek_token: Token,
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    precedence_lookup: PrecedenceLookup,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut lexer = Lexer::new(source.content);
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        let mut parser = Self {
            lexer,
            source,
            cur_token,
            peek_token,
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        lookups::create_token_lookups(&mut parser);
        parser
    }

    /// Parses top-level statements until the token source is exhausted.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            statements.push(self.parse_statement());
            self.next_token();
        }

        Program { statements }
    }

    /// Parses a single expression. Mainly useful for tests and benchmarks;
    /// [`Self::parse_program`] is the usual entry point.
    pub fn parse_expr(&mut self) -> Expr {
        expr::parse_expression(self, Precedence::Lowest)
    }
}

/// Lookup table registration. Called once from [`lookups::create_token_lookups`].
impl<'a> Parser<'a> {
    /// Registers a prefix handler for a token kind.
    pub(crate) fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixFn) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler together with its binding power.
    pub(crate) fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixFn) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Advances the token window by one token.
    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token has the expected kind. Otherwise records an
    /// error and leaves the window untouched; the caller is expected to bail
    /// out with a sentinel node.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.error(
                format!(
                    "expected next token to be `{}`, got `{}` instead",
                    kind, self.peek_token.kind
                ),
                self.peek_token.span.clone(),
            );
            false
        }
    }

    /// The binding power of the peek token, `Lowest` for tokens with no
    /// infix role.
    fn peek_precedence(&self) -> Precedence {
        self.precedence_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// The binding power of the current token.
    fn cur_precedence(&self) -> Precedence {
        self.precedence_lookup
            .get(&self.cur_token.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Records a syntax error without interrupting the parse.
    fn error(&self, message: impl ToString, span: Range<usize>) {
        self.source.errors.report(SyntaxError::new(message, span));
    }

    fn no_prefix_parse_fn_error(&self) {
        self.error(
            format!(
                "no prefix parse function for `{}` found",
                self.cur_token.kind
            ),
            self.cur_token.span.clone(),
        );
    }
}
