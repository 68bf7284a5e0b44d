//! Heap objects: strings, user functions (closures) and native functions.

use crate::environment::Env;
use crate::error::RuntimeError;
use crate::Value;
use nora_parser::ast::Block;

#[derive(Clone)]
pub struct NativeFn {
    pub ident: String,
    /// Number of arguments that the function accepts.
    pub arity: u32,
    pub func: &'static dyn Fn(&mut [Value]) -> Result<Value, RuntimeError>,
}

#[derive(Clone)]
pub enum ObjKind {
    Str(String),
    /// A closure: an unevaluated body plus the environment it was created in.
    /// Parameter order is the binding order for call arguments.
    Fn {
        params: Vec<String>,
        body: Block,
        env: Env,
    },
    NativeFn(NativeFn),
}

impl PartialEq for ObjKind {
    fn eq(&self, other: &ObjKind) -> bool {
        match self {
            Self::Str(l) => match other {
                Self::Str(r) => l == r,
                _ => false,
            },
            // function values have no useful equality
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Obj {
    pub kind: ObjKind,
}

impl Obj {
    pub fn new_string(string: String) -> Self {
        Self {
            kind: ObjKind::Str(string),
        }
    }

    pub fn new_fn(params: Vec<String>, body: Block, env: Env) -> Self {
        Self {
            kind: ObjKind::Fn { params, body, env },
        }
    }
}
