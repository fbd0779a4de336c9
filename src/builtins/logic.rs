//! Logic operations: not
//!
//! `and` and `or` are special forms (see `special_forms`) since they must
//! short-circuit on unevaluated arguments; `not` is the only ordinary
//! logical procedure.

use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;

/// `#t` iff the argument is boolean `#f`; `#f` for every other value.
pub fn builtin_not(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("not", "1", args.len()));
    }
    Ok(Value::Bool(!args[0].is_truthy()))
}

/// Registers the `not` builtin in the environment.
pub fn register(env: &Rc<crate::env::Environment>) {
    super::define_primitive(env, "not", builtin_not);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_false_is_true() {
        assert!(matches!(
            builtin_not(&[Value::Bool(false)]).unwrap(),
            Value::Bool(true)
        ));
    }

    #[test]
    fn not_truthy_values_is_false() {
        assert!(matches!(
            builtin_not(&[Value::Integer(5)]).unwrap(),
            Value::Bool(false)
        ));
        assert!(matches!(
            builtin_not(&[Value::EmptyList]).unwrap(),
            Value::Bool(false)
        ));
    }

    #[test]
    fn wrong_arity_is_error() {
        assert!(builtin_not(&[]).is_err());
    }
}
