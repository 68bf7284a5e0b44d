//! Runtime errors. Evaluation failures are values of this type, never
//! panics; the messages follow the language's conventional wording.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: String,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: String,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: String,
        right: &'static str,
    },
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    #[error("not a function: {0}")]
    NotCallable(&'static str),
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongNumberOfArguments { got: usize, want: usize },
    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    /// Reached when an AST containing parse-error sentinels is evaluated.
    /// Callers are expected to check the parse error list first.
    #[error("cannot evaluate a program with syntax errors")]
    MalformedNode,
}
