// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::LispError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A node in a linked chain of name -> value mappings. The root environment
/// is owned by the interpreter; child environments are owned (via `Rc`) by
/// whatever callable captured them, so closures keep their scope alive.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new root environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child environment with a parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Writes `name -> value` into this scope unconditionally, overwriting
    /// any local entry. Backs `define`, `set!`, and lambda parameter binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Looks up a symbol in this scope, then recursively in parent scopes.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Looks up a symbol, failing with a `LispError::Name` if unbound.
    pub fn lookup_or_err(&self, name: &str) -> Result<Value, LispError> {
        self.lookup(name).ok_or_else(|| LispError::name(name))
    }

    /// `set!` semantics: requires `name` to already resolve somewhere in the
    /// chain, then writes the new value into the *local* scope -- it does
    /// not walk up and mutate the defining scope.
    pub fn set_local(&self, name: &str, value: Value) -> Result<(), LispError> {
        if self.lookup(name).is_none() {
            return Err(LispError::name(name));
        }
        self.define(name.to_string(), value);
        Ok(())
    }
}
