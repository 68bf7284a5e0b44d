//! Expression parsing: the Pratt loop and the prefix/infix handlers the
//! lookup tables point at.
//!
//! Handlers are free functions rather than methods so they coerce to the
//! `fn` pointers stored in the dispatch tables.

use super::lookups::Precedence;
use super::Parser;
use crate::ast::{Expr, Ident};
use crate::lexer::TokenKind;

/// The precedence-climbing core.
///
/// Parses and returns a fully reduced expression binding no looser than
/// `min`: an initial left-hand side from the current token's prefix handler,
/// then extended leftward while the peek token is an infix operator binding
/// strictly tighter than `min`. A missing prefix handler records an error
/// and yields [`Expr::Error`]; a missing infix handler simply terminates the
/// loop, which is how looser constructs end a tighter sub-parse.
pub(crate) fn parse_expression(parser: &mut Parser, min: Precedence) -> Expr {
    let prefix = match parser.prefix_lookup.get(&parser.cur_token.kind) {
        Some(&prefix) => prefix,
        None => {
            parser.no_prefix_parse_fn_error();
            return Expr::Error;
        }
    };

    let mut left = prefix(parser);

    while !parser.peek_is(TokenKind::Semicolon) && min < parser.peek_precedence() {
        let infix = match parser.infix_lookup.get(&parser.peek_token.kind) {
            Some(&infix) => infix,
            None => return left,
        };

        parser.next_token();
        left = infix(parser, left);
    }

    left
}

pub(crate) fn parse_identifier(parser: &mut Parser) -> Expr {
    Expr::Identifier(Ident {
        token: parser.cur_token.clone(),
        name: parser.cur_token.literal.clone(),
    })
}

pub(crate) fn parse_integer_literal(parser: &mut Parser) -> Expr {
    let token = parser.cur_token.clone();
    match token.literal.parse::<i64>() {
        Ok(value) => Expr::IntegerLit { token, value },
        Err(_) => {
            parser.error(
                format!("could not parse {:?} as integer", token.literal),
                token.span,
            );
            Expr::Error
        }
    }
}

pub(crate) fn parse_boolean_literal(parser: &mut Parser) -> Expr {
    Expr::BooleanLit {
        token: parser.cur_token.clone(),
        value: parser.cur_is(TokenKind::True),
    }
}

pub(crate) fn parse_string_literal(parser: &mut Parser) -> Expr {
    let token = parser.cur_token.clone();
    // the literal still carries its surrounding quotes
    let value = token.literal[1..token.literal.len() - 1].to_string();
    Expr::StringLit { token, value }
}

/// Unary `!` or `-`. The operand is parsed at `Prefix` precedence, which
/// makes chains like `!-a` nest to the right: `(!(-a))`.
pub(crate) fn parse_prefix_expression(parser: &mut Parser) -> Expr {
    let token = parser.cur_token.clone();
    let op = token.literal.clone();

    parser.next_token();
    let rhs = parse_expression(parser, Precedence::Prefix);

    Expr::Prefix {
        token,
        op,
        rhs: Box::new(rhs),
    }
}

/// Binary operator, entered with the operator token current. The right
/// operand is parsed at the operator's own precedence, so equal-precedence
/// chains nest to the left: `a - b - c` is `((a - b) - c)`.
pub(crate) fn parse_infix_expression(parser: &mut Parser, left: Expr) -> Expr {
    let token = parser.cur_token.clone();
    let op = token.literal.clone();
    let precedence = parser.cur_precedence();

    parser.next_token();
    let rhs = parse_expression(parser, precedence);

    Expr::Infix {
        token,
        op,
        lhs: Box::new(left),
        rhs: Box::new(rhs),
    }
}

/// Parenthesized expression. Grouping only exists at parse time; the inner
/// expression is returned as-is, no dedicated node.
pub(crate) fn parse_grouped_expression(parser: &mut Parser) -> Expr {
    parser.next_token();

    let expr = parse_expression(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return Expr::Error;
    }

    expr
}

pub(crate) fn parse_if_expression(parser: &mut Parser) -> Expr {
    let token = parser.cur_token.clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return Expr::Error;
    }
    parser.next_token();
    let condition = parse_expression(parser, Precedence::Lowest);
    if !parser.expect_peek(TokenKind::RParen) {
        return Expr::Error;
    }

    if !parser.expect_peek(TokenKind::LBrace) {
        return Expr::Error;
    }
    let consequence = parser.parse_block_statement();

    // the block left its closing `}` current, so `else` shows up in peek
    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next_token();
        if !parser.expect_peek(TokenKind::LBrace) {
            return Expr::Error;
        }
        Some(parser.parse_block_statement())
    } else {
        None
    };

    Expr::If {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }
}

pub(crate) fn parse_function_literal(parser: &mut Parser) -> Expr {
    let token = parser.cur_token.clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return Expr::Error;
    }
    let params = match parse_function_parameters(parser) {
        Some(params) => params,
        None => return Expr::Error,
    };

    if !parser.expect_peek(TokenKind::LBrace) {
        return Expr::Error;
    }
    let body = parser.parse_block_statement();

    Expr::Function {
        token,
        params,
        body,
    }
}

/// Comma-separated, possibly empty parameter list; entered with `(` current,
/// leaves `)` current. Declaration order is preserved, it is the binding
/// order used for argument matching.
fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Ident>> {
    let mut params = Vec::new();

    if parser.peek_is(TokenKind::RParen) {
        parser.next_token();
        return Some(params); // empty parameter list
    }

    parser.next_token();
    params.push(parameter_name(parser)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        params.push(parameter_name(parser)?);
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(params)
}

fn parameter_name(parser: &mut Parser) -> Option<Ident> {
    if parser.cur_is(TokenKind::Ident) {
        Some(Ident {
            token: parser.cur_token.clone(),
            name: parser.cur_token.literal.clone(),
        })
    } else {
        parser.error(
            format!(
                "expected parameter name, got `{}` instead",
                parser.cur_token.kind
            ),
            parser.cur_token.span.clone(),
        );
        None
    }
}

/// Call expression, registered as the infix handler for `(`: the
/// already-parsed left-hand expression is the callee.
pub(crate) fn parse_call_expression(parser: &mut Parser, callee: Expr) -> Expr {
    let token = parser.cur_token.clone();

    let args = match parse_call_arguments(parser) {
        Some(args) => args,
        None => return Expr::Error,
    };

    Expr::Call {
        token,
        callee: Box::new(callee),
        args,
    }
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut args = Vec::new();

    if parser.peek_is(TokenKind::RParen) {
        parser.next_token();
        return Some(args); // empty argument list
    }

    parser.next_token();
    args.push(parse_expression(parser, Precedence::Lowest));

    while parser.peek_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        args.push(parse_expression(parser, Precedence::Lowest));
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_display_snapshot;

    fn expr(source: &str) -> Expr {
        let source = source.into();
        let expr = Parser::new(&source).parse_expr();
        assert!(
            source.has_no_errors(),
            "unexpected parse errors:\n{}",
            source.errors
        );
        expr
    }

    /// Parses a whole program and compares its textual reconstruction.
    fn check(source: &str, expected: &str) {
        let source = source.into();
        let program = Parser::new(&source).parse_program();
        assert!(
            source.has_no_errors(),
            "unexpected parse errors for {:?}:\n{}",
            source.content,
            source.errors
        );
        assert_eq!(program.to_string(), expected, "for input {:?}", source.content);
    }

    #[test]
    fn test_literals() {
        assert_display_snapshot!(expr("5"), @"5");
        assert_display_snapshot!(expr("true"), @"true");
        assert_display_snapshot!(expr("foobar"), @"foobar");
        assert_display_snapshot!(expr("\"hello\""), @r#""hello""#);
    }

    #[test]
    fn test_prefix_expressions() {
        check("!5;", "(!5)");
        check("-15;", "(-15)");
        check("!true;", "(!true)");
        check("!-a;", "(!(-a))");
    }

    #[test]
    fn test_infix_expressions() {
        for op in &["+", "-", "*", "/", "<", ">", "==", "!="] {
            let source_text = format!("a {} b;", op);
            let source = source_text.as_str().into();
            let mut parser = Parser::new(&source);
            let program = parser.parse_program();
            assert!(source.has_no_errors());

            match &program.statements[0] {
                crate::ast::Stmt::ExprStmt(Expr::Infix { op: parsed_op, lhs, rhs, .. }) => {
                    assert_eq!(parsed_op, op);
                    assert_eq!(lhs.to_string(), "a");
                    assert_eq!(rhs.to_string(), "b");
                }
                other => panic!("expected infix expression for {:?}, got {:?}", op, other),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let tests = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a - b - c", "((a - b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
        ];
        for (source, expected) in &tests {
            check(source, expected);
        }
    }

    #[test]
    fn test_grouped_expressions_override_precedence() {
        let tests = [
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
        ];
        for (source, expected) in &tests {
            check(source, expected);
        }
    }

    #[test]
    fn test_calls_compose_with_operators() {
        let tests = [
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
        ];
        for (source, expected) in &tests {
            check(source, expected);
        }
    }

    #[test]
    fn test_call_argument_order() {
        match expr("add(1, 2 * 3, 4 + 5)") {
            Expr::Call { callee, args, .. } => {
                assert_eq!(callee.to_string(), "add");
                let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
                assert_eq!(rendered, ["1", "(2 * 3)", "(4 + 5)"]);
            }
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_call_with_no_arguments() {
        match expr("now()") {
            Expr::Call { args, .. } => assert!(args.is_empty()),
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_if_expression() {
        match expr("if (x < y) { x }") {
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                assert_eq!(condition.to_string(), "(x < y)");
                assert_eq!(consequence.to_string(), "{ x }");
                assert!(alternative.is_none());
            }
            other => panic!("expected if expression, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else_expression() {
        match expr("if (x < y) { x } else { y }") {
            Expr::If { alternative, .. } => {
                let alternative = alternative.expect("alternative block missing");
                assert_eq!(alternative.to_string(), "{ y }");
            }
            other => panic!("expected if expression, got {:?}", other),
        }
    }

    #[test]
    fn test_function_literal() {
        match expr("fn(x, y) { x + y }") {
            Expr::Function { params, body, .. } => {
                let names: Vec<&str> = params.iter().map(|param| param.name.as_str()).collect();
                assert_eq!(names, ["x", "y"]);
                assert_eq!(body.stmts.len(), 1);
                assert_eq!(body.stmts[0].to_string(), "(x + y)");
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }

    #[test]
    fn test_function_parameter_lists() {
        let tests: [(&str, &[&str]); 3] = [
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];
        for (source, expected) in &tests {
            match expr(source) {
                Expr::Function { params, .. } => {
                    let names: Vec<&str> = params.iter().map(|param| param.name.as_str()).collect();
                    assert_eq!(&names, expected, "for input {:?}", source);
                }
                other => panic!("expected function literal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_closing_paren_is_recorded() {
        let source = "add(1, 2;".into();
        let expr = Parser::new(&source).parse_expr();
        assert_eq!(expr, Expr::Error);
        assert_eq!(
            source.errors.messages(),
            vec!["expected next token to be `)`, got `;` instead".to_string()]
        );
    }

    #[test]
    fn test_integer_overflow_is_recorded() {
        let source = "99999999999999999999;".into();
        let expr = Parser::new(&source).parse_expr();
        assert_eq!(expr, Expr::Error);
        let messages = source.errors.messages();
        assert_eq!(
            messages,
            vec!["could not parse \"99999999999999999999\" as integer".to_string()]
        );
    }
}
