//! Type predicates: number?, boolean?, symbol?, pair?, null?, list?
//!
//! All return boolean (#t or #f) and take exactly one argument.

use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;

fn unary(function: &str, args: &[Value]) -> Result<&Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity(function, "1", args.len()));
    }
    Ok(&args[0])
}

/// Tests if the value is an integer.
pub fn builtin_number_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(
        unary("number?", args)?,
        Value::Integer(_)
    )))
}

/// Tests if the value is a boolean.
pub fn builtin_boolean_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(unary("boolean?", args)?, Value::Bool(_))))
}

/// Tests if the value is a symbol.
pub fn builtin_symbol_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(
        unary("symbol?", args)?,
        Value::Symbol(_)
    )))
}

/// Tests if the value is a (non-empty) pair.
pub fn builtin_pair_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(unary("pair?", args)?, Value::Pair(_))))
}

/// Tests if the value is the empty list.
pub fn builtin_null_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(matches!(
        unary("null?", args)?,
        Value::EmptyList
    )))
}

/// Tests if the value is the empty list or a proper list (no cycle
/// detection -- the language cannot construct cycles, see DESIGN.md).
pub fn builtin_list_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("list?", args)?.is_proper_list()))
}

/// Registers all type predicate builtins in the environment.
pub fn register(env: &Rc<crate::env::Environment>) {
    super::define_primitive(env, "number?", builtin_number_p);
    super::define_primitive(env, "boolean?", builtin_boolean_p);
    super::define_primitive(env, "symbol?", builtin_symbol_p);
    super::define_primitive(env, "pair?", builtin_pair_p);
    super::define_primitive(env, "null?", builtin_null_p);
    super::define_primitive(env, "list?", builtin_list_p);
}
