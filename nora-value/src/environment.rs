//! Lexical environments: a chain of scopes linked through `enclosing`.

use crate::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an [`Environment`]. Closures keep their defining
/// environment alive through this handle.
pub type Env = Rc<RefCell<Environment>>;

pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level scope.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self {
            values: HashMap::new(),
            enclosing: None,
        }))
    }

    /// Creates a scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: Env) -> Env {
        Rc::new(RefCell::new(Self {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }))
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Resolves `name`, walking outwards through the enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.values.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .enclosing
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }
}
