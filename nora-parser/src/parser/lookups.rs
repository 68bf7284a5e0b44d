//! Precedence levels and the token-kind-keyed dispatch tables.
//!
//! Both handler tables are plain maps from [`TokenKind`] to a function
//! pointer, filled exactly once per parser in [`create_token_lookups`] and
//! never touched afterwards.

use crate::ast::Expr;
use crate::lexer::TokenKind;
use std::collections::HashMap;

use super::expr::*;
use super::Parser;

/// Operator binding power, lowest first. The derived `Ord` is what the Pratt
/// loop compares; the declaration order is the design constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// unary `!` and `-`
    Prefix,
    /// `(` as a postfix call marker
    Call,
}

/// Parses an expression starting at the current token.
pub type PrefixFn = fn(&mut Parser) -> Expr;
/// Extends an already-parsed left-hand expression; entered with the operator
/// token current.
pub type InfixFn = fn(&mut Parser, Expr) -> Expr;

pub type PrefixLookup = HashMap<TokenKind, PrefixFn>;
pub type InfixLookup = HashMap<TokenKind, InfixFn>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.prefix(TokenKind::Ident, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean_literal);
    parser.prefix(TokenKind::False, parse_boolean_literal);
    parser.prefix(TokenKind::Str, parse_string_literal);

    // Unary operators and grouping
    parser.prefix(TokenKind::Bang, parse_prefix_expression);
    parser.prefix(TokenKind::Minus, parse_prefix_expression);
    parser.prefix(TokenKind::LParen, parse_grouped_expression);

    // Compound expressions
    parser.prefix(TokenKind::If, parse_if_expression);
    parser.prefix(TokenKind::Function, parse_function_literal);

    // Equality
    parser.infix(TokenKind::Eq, Precedence::Equals, parse_infix_expression);
    parser.infix(TokenKind::NotEq, Precedence::Equals, parse_infix_expression);

    // Comparison
    parser.infix(TokenKind::Lt, Precedence::LessGreater, parse_infix_expression);
    parser.infix(TokenKind::Gt, Precedence::LessGreater, parse_infix_expression);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expression);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expression);
    parser.infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expression);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expression);

    // A call is an infix expression whose operator is `(`
    parser.infix(TokenKind::LParen, Precedence::Call, parse_call_expression);
}
