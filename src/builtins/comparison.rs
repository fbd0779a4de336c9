//! Comparison operations: =, <, >, <=, >=
//!
//! Pairwise comparisons over adjacent elements of a variadic argument list.
//! An empty or single-element argument list is vacuously `#t`.

use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;

fn as_integer(function: &str, value: &Value) -> Result<i64, LispError> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(LispError::type_mismatch(function, "integer", other)),
    }
}

fn pairwise(function: &str, args: &[Value], op: impl Fn(i64, i64) -> bool) -> Result<Value, LispError> {
    let mut ints = Vec::with_capacity(args.len());
    for arg in args {
        ints.push(as_integer(function, arg)?);
    }
    let all_hold = ints.windows(2).all(|pair| op(pair[0], pair[1]));
    Ok(Value::Bool(all_hold))
}

pub fn builtin_eq(args: &[Value]) -> Result<Value, LispError> {
    pairwise("=", args, |a, b| a == b)
}

pub fn builtin_lt(args: &[Value]) -> Result<Value, LispError> {
    pairwise("<", args, |a, b| a < b)
}

pub fn builtin_gt(args: &[Value]) -> Result<Value, LispError> {
    pairwise(">", args, |a, b| a > b)
}

pub fn builtin_le(args: &[Value]) -> Result<Value, LispError> {
    pairwise("<=", args, |a, b| a <= b)
}

pub fn builtin_ge(args: &[Value]) -> Result<Value, LispError> {
    pairwise(">=", args, |a, b| a >= b)
}

/// Registers all comparison builtins in the environment.
pub fn register(env: &Rc<crate::env::Environment>) {
    super::define_primitive(env, "=", builtin_eq);
    super::define_primitive(env, "<", builtin_lt);
    super::define_primitive(env, ">", builtin_gt);
    super::define_primitive(env, "<=", builtin_le);
    super::define_primitive(env, ">=", builtin_ge);
}
