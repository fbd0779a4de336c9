//! Arithmetic operations: +, -, *, /, min, max, abs
//!
//! Operate on integers only; division truncates toward zero.
//!
//! - `+`: Sum of all arguments (identity: 0)
//! - `-`: Subtract subsequent args from first, or negate if single arg
//! - `*`: Product of all arguments (identity: 1)
//! - `/`: Divide first by subsequent args, or the source-defined single-arg
//!   quirk below
//! - `min` / `max`: Reduction over one or more arguments
//! - `abs`: Absolute value of a single argument

use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;

fn as_integer(function: &str, value: &Value) -> Result<i64, LispError> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(LispError::type_mismatch(function, "integer", other)),
    }
}

/// Sum of all arguments. Empty argument list sums to 0.
pub fn builtin_add(args: &[Value]) -> Result<Value, LispError> {
    let mut sum: i64 = 0;
    for arg in args {
        sum += as_integer("+", arg)?;
    }
    Ok(Value::Integer(sum))
}

/// One argument negates it; two or more fold subtraction left to right.
pub fn builtin_sub(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("-", "at least 1", 0));
    }
    let mut iter = args.iter();
    let first = as_integer("-", iter.next().unwrap())?;
    if args.len() == 1 {
        return Ok(Value::Integer(-first));
    }
    let mut result = first;
    for arg in iter {
        result -= as_integer("-", arg)?;
    }
    Ok(Value::Integer(result))
}

/// Product of all arguments. Empty argument list multiplies to 1.
pub fn builtin_mul(args: &[Value]) -> Result<Value, LispError> {
    let mut product: i64 = 1;
    for arg in args {
        product *= as_integer("*", arg)?;
    }
    Ok(Value::Integer(product))
}

/// A single argument `x` returns `1` if `x == 1`, else `0` -- preserved from
/// the source rather than given standard reciprocal semantics. Two or more
/// arguments fold integer division (truncating toward zero) left to right.
pub fn builtin_div(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("/", "at least 1", 0));
    }
    let mut iter = args.iter();
    let first = as_integer("/", iter.next().unwrap())?;
    if args.len() == 1 {
        return Ok(Value::Integer(if first == 1 { 1 } else { 0 }));
    }
    let mut result = first;
    for arg in iter {
        let divisor = as_integer("/", arg)?;
        if divisor == 0 {
            return Err(LispError::runtime("/", "division by zero"));
        }
        result /= divisor;
    }
    Ok(Value::Integer(result))
}

/// Smallest of one or more integer arguments.
pub fn builtin_min(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("min", "at least 1", 0));
    }
    let mut iter = args.iter();
    let mut best = as_integer("min", iter.next().unwrap())?;
    for arg in iter {
        best = best.min(as_integer("min", arg)?);
    }
    Ok(Value::Integer(best))
}

/// Largest of one or more integer arguments.
pub fn builtin_max(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("max", "at least 1", 0));
    }
    let mut iter = args.iter();
    let mut best = as_integer("max", iter.next().unwrap())?;
    for arg in iter {
        best = best.max(as_integer("max", arg)?);
    }
    Ok(Value::Integer(best))
}

/// Absolute value of a single integer argument.
pub fn builtin_abs(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("abs", "1", args.len()));
    }
    Ok(Value::Integer(as_integer("abs", &args[0])?.abs()))
}

/// Registers all arithmetic builtins in the environment.
pub fn register(env: &Rc<crate::env::Environment>) {
    super::define_primitive(env, "+", builtin_add);
    super::define_primitive(env, "-", builtin_sub);
    super::define_primitive(env, "*", builtin_mul);
    super::define_primitive(env, "/", builtin_div);
    super::define_primitive(env, "min", builtin_min);
    super::define_primitive(env, "max", builtin_max);
    super::define_primitive(env, "abs", builtin_abs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_and_defaults_to_zero() {
        assert!(matches!(builtin_add(&[]).unwrap(), Value::Integer(0)));
        assert!(matches!(
            builtin_add(&[Value::Integer(1), Value::Integer(2), Value::Integer(3)]).unwrap(),
            Value::Integer(6)
        ));
    }

    #[test]
    fn sub_negates_single_arg() {
        assert!(matches!(
            builtin_sub(&[Value::Integer(5)]).unwrap(),
            Value::Integer(-5)
        ));
    }

    #[test]
    fn sub_requires_at_least_one_arg() {
        assert!(builtin_sub(&[]).is_err());
    }

    #[test]
    fn mul_defaults_to_one() {
        assert!(matches!(builtin_mul(&[]).unwrap(), Value::Integer(1)));
    }

    #[test]
    fn div_single_arg_quirk() {
        assert!(matches!(
            builtin_div(&[Value::Integer(1)]).unwrap(),
            Value::Integer(1)
        ));
        assert!(matches!(
            builtin_div(&[Value::Integer(5)]).unwrap(),
            Value::Integer(0)
        ));
    }

    #[test]
    fn div_truncates_toward_zero() {
        assert!(matches!(
            builtin_div(&[Value::Integer(-7), Value::Integer(2)]).unwrap(),
            Value::Integer(-3)
        ));
    }

    #[test]
    fn div_by_zero_is_runtime_error() {
        assert!(builtin_div(&[Value::Integer(1), Value::Integer(0)]).is_err());
    }

    #[test]
    fn non_integer_argument_is_type_error() {
        assert!(builtin_add(&[Value::Bool(true)]).is_err());
    }

    #[test]
    fn min_max_abs() {
        assert!(matches!(
            builtin_min(&[Value::Integer(3), Value::Integer(1), Value::Integer(2)]).unwrap(),
            Value::Integer(1)
        ));
        assert!(matches!(
            builtin_max(&[Value::Integer(3), Value::Integer(1), Value::Integer(2)]).unwrap(),
            Value::Integer(3)
        ));
        assert!(matches!(builtin_abs(&[Value::Integer(-4)]).unwrap(), Value::Integer(4)));
    }
}
