//! Built-in bindings for the root environment.
//!
//! Organized the way the evaluator itself is organized: special forms
//! receive their arguments unevaluated; every other module here holds
//! ordinary procedures that evaluate every argument before running.

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::eval_args;
use crate::value::{Callable, Value};
use std::fmt;
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod lists;
pub mod logic;
pub mod special_forms;
pub mod types;

/// An ordinary procedure: evaluates its argument list before running.
pub struct Primitive {
    name: &'static str,
    func: fn(&[Value]) -> Result<Value, LispError>,
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<primitive:{}>", self.name)
    }
}

impl Callable for Primitive {
    fn invoke(&self, args: &Value, caller_env: &Rc<Environment>) -> Result<Value, LispError> {
        let evaluated = eval_args(args, caller_env)?;
        (self.func)(&evaluated)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// A special form: receives its argument list unevaluated and decides for
/// itself what, if anything, to evaluate.
pub struct SpecialForm {
    name: &'static str,
    func: fn(&Value, &Rc<Environment>) -> Result<Value, LispError>,
}

impl fmt::Debug for SpecialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<special-form:{}>", self.name)
    }
}

impl Callable for SpecialForm {
    fn invoke(&self, args: &Value, caller_env: &Rc<Environment>) -> Result<Value, LispError> {
        (self.func)(args, caller_env)
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn define_primitive(env: &Rc<Environment>, name: &'static str, func: fn(&[Value]) -> Result<Value, LispError>) {
    env.define(name, Value::Callable(Rc::new(Primitive { name, func })));
}

fn define_special_form(
    env: &Rc<Environment>,
    name: &'static str,
    func: fn(&Value, &Rc<Environment>) -> Result<Value, LispError>,
) {
    env.define(name, Value::Callable(Rc::new(SpecialForm { name, func })));
}

/// Populates `env` with every binding listed in the external interface:
/// special forms plus the full primitive library.
pub fn register_builtins(env: &Rc<Environment>) {
    special_forms::register(env);
    arithmetic::register(env);
    comparison::register(env);
    logic::register(env);
    types::register(env);
    lists::register(env);
}
