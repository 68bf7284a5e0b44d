//! AST node definitions.
//!
//! Expressions and statements are closed sum types so that downstream
//! consumers (the evaluator) can match exhaustively. Nodes are built
//! bottom-up during a single parse pass and never mutated afterwards; every
//! node keeps the token it originated from for diagnostics.
//!
//! The `Display` impls reconstruct source text with explicit parentheses
//! around every prefix and infix node. Reconstructing a clean AST and
//! parsing the result yields a structurally identical tree, which the parser
//! tests lean on heavily.

use crate::lexer::Token;
use std::fmt;

/// An identifier together with the token it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub token: Token,
    pub name: String,
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Ident),
    IntegerLit {
        token: Token,
        value: i64,
    },
    BooleanLit {
        token: Token,
        value: bool,
    },
    StringLit {
        token: Token,
        value: String,
    },
    /// A unary operator (`!` or `-`) applied to an operand.
    Prefix {
        token: Token,
        op: String,
        rhs: Box<Expr>,
    },
    /// A binary operator with fully reduced children. The tree shape encodes
    /// precedence and associativity; nothing is left for evaluation time.
    Infix {
        token: Token,
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// An unevaluated closure template. Parameter order is binding order.
    Function {
        token: Token,
        params: Vec<Ident>,
        body: Block,
    },
    Call {
        token: Token,
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Sentinel produced when no expression could be parsed. Only ever
    /// emitted together with a recorded syntax error.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let {
        token: Token,
        name: Ident,
        value: Expr,
    },
    Return {
        token: Token,
        value: Expr,
    },
    /// A bare expression evaluated for its value or side effect.
    ExprStmt(Expr),
    Block(Block),
    /// Sentinel produced when a statement was malformed beyond recovery.
    Error,
}

/// An ordered sequence of statements delimited by braces. Used as the body
/// of functions and if-expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// The root of a parse: all top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{}", ident),
            Expr::IntegerLit { value, .. } => write!(f, "{}", value),
            Expr::BooleanLit { value, .. } => write!(f, "{}", value),
            Expr::StringLit { value, .. } => write!(f, "\"{}\"", value),
            Expr::Prefix { op, rhs, .. } => write!(f, "({}{})", op, rhs),
            Expr::Infix { op, lhs, rhs, .. } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::Function { params, body, .. } => {
                write!(f, "fn(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") {}", body)
            }
            Expr::Call { callee, args, .. } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Error => f.write_str("<error>"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Stmt::Return { value, .. } => write!(f, "return {};", value),
            Stmt::ExprStmt(expr) => write!(f, "{}", expr),
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::Error => f.write_str("<error>"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.stmts {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
