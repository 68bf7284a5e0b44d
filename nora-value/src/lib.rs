//! Runtime values for the nora evaluator.

pub mod environment;
pub mod error;
pub mod object;

use error::RuntimeError;
use object::{NativeFn, Obj, ObjKind};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Null,
    Object(Rc<object::Obj>),
}

impl Value {
    /// Allocates a new string object value.
    pub fn new_str(string: String) -> Self {
        Self::Object(Rc::new(Obj::new_string(string)))
    }

    /// Attempts to cast the `Value` into a `&str` or `None` if wrong type.
    pub fn cast_to_str(&self) -> Option<&str> {
        match self {
            Self::Object(obj) => match &obj.kind {
                ObjKind::Str(string) => Some(string),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn cast_to_int(&self) -> Option<i64> {
        match self {
            Self::Int(val) => Some(*val),
            _ => None,
        }
    }

    /// `false` and `null` are falsy, every other value is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    /// The type tag used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Object(obj) => match obj.kind {
                ObjKind::Str(_) => "STRING",
                ObjKind::Fn { .. } => "FUNCTION",
                ObjKind::NativeFn(_) => "BUILTIN",
            },
        }
    }

    fn print_obj(f: &mut fmt::Formatter<'_>, obj: &Obj) -> fmt::Result {
        match &obj.kind {
            ObjKind::Str(string) => write!(f, "{}", string),
            ObjKind::Fn { params, .. } => write!(f, "<fn({})>", params.join(", ")),
            ObjKind::NativeFn(NativeFn { ident, .. }) => write!(f, "<native fn {}>", ident),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(val) => write!(f, "{}", val),
            Value::Bool(val) => write!(f, "{}", val),
            Value::Null => write!(f, "null"),
            Value::Object(val) => Self::print_obj(f, val),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Named native functions used to seed the evaluator's global scope.
pub struct BuiltinVars {
    pub vars: Vec<(String, Value)>,
}

impl BuiltinVars {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn add_native_fn(
        &mut self,
        ident: &str,
        func: &'static dyn Fn(&mut [Value]) -> Result<Value, RuntimeError>,
        arity: u32,
    ) {
        let value = Value::Object(Rc::new(Obj {
            kind: ObjKind::NativeFn(NativeFn {
                ident: ident.to_string(),
                arity,
                func,
            }),
        }));
        self.vars.push((ident.to_string(), value));
    }
}

impl Default for BuiltinVars {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Int(7).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::new_str(String::new()).is_truthy());
    }

    #[test]
    fn test_string_equality_by_value() {
        assert_eq!(
            Value::new_str("abc".to_string()),
            Value::new_str("abc".to_string())
        );
        assert_ne!(
            Value::new_str("abc".to_string()),
            Value::new_str("abd".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::new_str("hi".to_string()).to_string(), "hi");
    }
}
