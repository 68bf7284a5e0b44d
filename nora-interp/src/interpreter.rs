//! AST evaluation.
//!
//! The interpreter walks the tree produced by `nora-parser` directly; every
//! node kind is matched exhaustively, so a new AST variant fails to compile
//! here rather than misbehaving at run time. Failures are `RuntimeError`
//! values, never panics. `return` unwinds through [`Break::Return`] up to
//! the nearest function call (or the program top level).

use nora_parser::ast::{Block, Expr, Program, Stmt};
use nora_value::environment::{Env, Environment};
use nora_value::error::RuntimeError;
use nora_value::object::{Obj, ObjKind};
use nora_value::{BuiltinVars, Value};
use std::rc::Rc;

/// Non-local exit from an evaluation: either a `return` unwinding to the
/// enclosing call, or a runtime error unwinding to the caller.
enum Break {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for Break {
    fn from(error: RuntimeError) -> Self {
        Break::Error(error)
    }
}

pub struct Interpreter {
    globals: Env,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            globals: Environment::new(),
        }
    }

    /// Creates an interpreter whose global scope is seeded with the given
    /// native functions.
    pub fn with_builtin_vars(builtin_vars: &BuiltinVars) -> Self {
        let interpreter = Self::new();
        for (name, value) in &builtin_vars.vars {
            interpreter
                .globals
                .borrow_mut()
                .define(name.clone(), value.clone());
        }
        interpreter
    }

    /// Evaluates all top-level statements in order. The result is the value
    /// of the last statement, or the value of a top-level `return`. Global
    /// bindings persist across calls, which is what a REPL wants.
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let mut result = Value::Null;
        for stmt in &program.statements {
            match eval_stmt(stmt, &self.globals) {
                Ok(value) => result = value,
                Err(Break::Return(value)) => return Ok(value),
                Err(Break::Error(error)) => return Err(error),
            }
        }
        Ok(result)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn eval_stmt(stmt: &Stmt, env: &Env) -> Result<Value, Break> {
    match stmt {
        Stmt::Let { name, value, .. } => {
            let value = eval_expr(value, env)?;
            env.borrow_mut().define(name.name.clone(), value);
            Ok(Value::Null)
        }
        Stmt::Return { value, .. } => {
            let value = eval_expr(value, env)?;
            Err(Break::Return(value))
        }
        Stmt::ExprStmt(expr) => eval_expr(expr, env),
        Stmt::Block(block) => eval_block(block, &Environment::with_enclosing(Rc::clone(env))),
        Stmt::Error => Err(RuntimeError::MalformedNode.into()),
    }
}

/// Evaluates the statements of a block in the given environment; the block's
/// value is the value of its last statement.
fn eval_block(block: &Block, env: &Env) -> Result<Value, Break> {
    let mut result = Value::Null;
    for stmt in &block.stmts {
        result = eval_stmt(stmt, env)?;
    }
    Ok(result)
}

fn eval_expr(expr: &Expr, env: &Env) -> Result<Value, Break> {
    match expr {
        Expr::Identifier(ident) => match env.borrow().get(&ident.name) {
            Some(value) => Ok(value),
            None => Err(RuntimeError::IdentifierNotFound(ident.name.clone()).into()),
        },
        Expr::IntegerLit { value, .. } => Ok(Value::Int(*value)),
        Expr::BooleanLit { value, .. } => Ok(Value::Bool(*value)),
        Expr::StringLit { value, .. } => Ok(Value::new_str(value.clone())),
        Expr::Prefix { op, rhs, .. } => {
            let operand = eval_expr(rhs, env)?;
            eval_prefix(op, operand)
        }
        Expr::Infix { op, lhs, rhs, .. } => {
            let left = eval_expr(lhs, env)?;
            let right = eval_expr(rhs, env)?;
            eval_infix(op, left, right)
        }
        Expr::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            if eval_expr(condition, env)?.is_truthy() {
                eval_block(consequence, &Environment::with_enclosing(Rc::clone(env)))
            } else if let Some(alternative) = alternative {
                eval_block(alternative, &Environment::with_enclosing(Rc::clone(env)))
            } else {
                Ok(Value::Null)
            }
        }
        Expr::Function { params, body, .. } => {
            let params = params.iter().map(|param| param.name.clone()).collect();
            // capture the defining environment: this is what makes closures work
            Ok(Value::Object(Rc::new(Obj::new_fn(
                params,
                body.clone(),
                Rc::clone(env),
            ))))
        }
        Expr::Call { callee, args, .. } => {
            let callee = eval_expr(callee, env)?;
            let mut arg_values = Vec::with_capacity(args.len());
            for arg in args {
                arg_values.push(eval_expr(arg, env)?);
            }
            apply(callee, arg_values)
        }
        Expr::Error => Err(RuntimeError::MalformedNode.into()),
    }
}

fn eval_prefix(op: &str, operand: Value) -> Result<Value, Break> {
    match op {
        "!" => Ok(Value::Bool(!operand.is_truthy())),
        "-" => match operand {
            Value::Int(value) => int(value.checked_neg()),
            other => Err(RuntimeError::UnknownPrefixOperator {
                op: op.to_string(),
                operand: other.type_name(),
            }
            .into()),
        },
        _ => Err(RuntimeError::UnknownPrefixOperator {
            op: op.to_string(),
            operand: operand.type_name(),
        }
        .into()),
    }
}

fn eval_infix(op: &str, left: Value, right: Value) -> Result<Value, Break> {
    if let (Value::Int(l), Value::Int(r)) = (&left, &right) {
        return eval_int_infix(op, *l, *r);
    }
    if let (Some(l), Some(r)) = (left.cast_to_str(), right.cast_to_str()) {
        return eval_str_infix(op, l, r);
    }

    match op {
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name(),
            op: op.to_string(),
            right: right.type_name(),
        }
        .into()),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: left.type_name(),
            op: op.to_string(),
            right: right.type_name(),
        }
        .into()),
    }
}

/// Wraps a checked integer result, mapping overflow to a typed error.
fn int(result: Option<i64>) -> Result<Value, Break> {
    match result {
        Some(value) => Ok(Value::Int(value)),
        None => Err(RuntimeError::IntegerOverflow.into()),
    }
}

fn eval_int_infix(op: &str, left: i64, right: i64) -> Result<Value, Break> {
    match op {
        "+" => int(left.checked_add(right)),
        "-" => int(left.checked_sub(right)),
        "*" => int(left.checked_mul(right)),
        "/" => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero.into())
            } else {
                // checked_div also catches MIN / -1
                int(left.checked_div(right))
            }
        }
        "<" => Ok(Value::Bool(left < right)),
        ">" => Ok(Value::Bool(left > right)),
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: "INTEGER",
            op: op.to_string(),
            right: "INTEGER",
        }
        .into()),
    }
}

fn eval_str_infix(op: &str, left: &str, right: &str) -> Result<Value, Break> {
    match op {
        "+" => Ok(Value::new_str(format!("{}{}", left, right))),
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: "STRING",
            op: op.to_string(),
            right: "STRING",
        }
        .into()),
    }
}

/// Calls a function or native-function value with already-evaluated
/// arguments, in order.
fn apply(callee: Value, mut args: Vec<Value>) -> Result<Value, Break> {
    let obj = match &callee {
        Value::Object(obj) => Rc::clone(obj),
        other => return Err(RuntimeError::NotCallable(other.type_name()).into()),
    };

    match &obj.kind {
        ObjKind::Fn { params, body, env } => {
            if args.len() != params.len() {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got: args.len(),
                    want: params.len(),
                }
                .into());
            }

            let call_env = Environment::with_enclosing(Rc::clone(env));
            for (param, arg) in params.iter().zip(args) {
                call_env.borrow_mut().define(param.clone(), arg);
            }

            match eval_block(body, &call_env) {
                // the body's last value is the implicit return value
                Ok(value) => Ok(value),
                Err(Break::Return(value)) => Ok(value),
                Err(error) => Err(error),
            }
        }
        ObjKind::NativeFn(native) => {
            if args.len() != native.arity as usize {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got: args.len(),
                    want: native.arity as usize,
                }
                .into());
            }
            (native.func)(&mut args).map_err(Break::Error)
        }
        ObjKind::Str(_) => Err(RuntimeError::NotCallable("STRING").into()),
    }
}
