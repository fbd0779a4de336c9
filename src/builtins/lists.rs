//! List operations: cons, car, cdr, set-car!, set-cdr!, list, list-ref, list-tail
//!
//! `set-car!` / `set-cdr!` are a hybrid: their first argument is an
//! *unevaluated* symbol naming the variable holding a pair, and they rebind
//! that symbol to a new pair rather than mutating the existing one in
//! place. Aliased references to the original pair keep observing the old
//! value. Everything else here is an ordinary procedure.

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::evaluate;
use crate::value::Value;
use std::rc::Rc;

/// Constructs a pair from two already-evaluated values.
pub fn builtin_cons(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("cons", "2", args.len()));
    }
    Ok(Value::cons(args[0].clone(), args[1].clone()))
}

/// Returns the first element of a pair; errors on the empty list or a
/// non-pair.
pub fn builtin_car(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("car", "1", args.len()));
    }
    match &args[0] {
        Value::Pair(cell) => Ok(cell.0.clone()),
        other => Err(LispError::type_mismatch("car", "pair", other)),
    }
}

/// Returns the second element of a pair; errors on the empty list or a
/// non-pair.
pub fn builtin_cdr(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("cdr", "1", args.len()));
    }
    match &args[0] {
        Value::Pair(cell) => Ok(cell.1.clone()),
        other => Err(LispError::type_mismatch("cdr", "pair", other)),
    }
}

/// Builds a proper list from the evaluated arguments.
pub fn builtin_list(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::list(args.to_vec()))
}

fn as_index(function: &str, value: &Value) -> Result<usize, LispError> {
    match value {
        Value::Integer(n) if *n >= 0 => Ok(*n as usize),
        other => Err(LispError::type_mismatch(function, "non-negative integer", other)),
    }
}

/// Walks `steps` cdrs from `value`, returning whatever is found there --
/// a pair, the empty list, or (for an improper list) the final terminator.
fn walk_tail(function: &str, value: &Value, steps: usize) -> Result<Value, LispError> {
    let mut cur = value.clone();
    for _ in 0..steps {
        match cur {
            Value::Pair(cell) => cur = cell.1.clone(),
            _ => return Err(LispError::runtime(function, "index out of range")),
        }
    }
    Ok(cur)
}

/// `(list-ref L i)`: the element at position `i`.
pub fn builtin_list_ref(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("list-ref", "2", args.len()));
    }
    let index = as_index("list-ref", &args[1])?;
    match walk_tail("list-ref", &args[0], index)? {
        Value::Pair(cell) => Ok(cell.0.clone()),
        _ => Err(LispError::runtime("list-ref", "index out of range")),
    }
}

/// `(list-tail L i)`: the tail remaining after walking `i` cdrs.
pub fn builtin_list_tail(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("list-tail", "2", args.len()));
    }
    let index = as_index("list-tail", &args[1])?;
    walk_tail("list-tail", &args[0], index)
}

enum PairField {
    Car,
    Cdr,
}

fn set_pair_field(
    function: &str,
    field: PairField,
    args: &Value,
    env: &Rc<Environment>,
) -> Result<Value, LispError> {
    let (items, tail) = args.walk_list();
    if items.len() != 2 || !matches!(tail, Value::EmptyList) {
        return Err(LispError::arity(function, "2", items.len()));
    }
    let symbol = items[0]
        .as_symbol()
        .ok_or_else(|| LispError::syntax(format!("{}: first argument must be a symbol", function)))?;
    let new_value = evaluate(&items[1], env)?;
    let current = env.lookup_or_err(symbol)?;
    let Value::Pair(cell) = current else {
        return Err(LispError::type_mismatch(function, "pair", &current));
    };
    let rebuilt = match field {
        PairField::Car => Value::cons(new_value, cell.1.clone()),
        PairField::Cdr => Value::cons(cell.0.clone(), new_value),
    };
    env.set_local(symbol, rebuilt)?;
    Ok(Value::EmptyList)
}

/// `(set-car! sym expr)`: rebinds `sym` to `(cons (eval expr) (cdr sym))`.
pub fn builtin_set_car(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    set_pair_field("set-car!", PairField::Car, args, env)
}

/// `(set-cdr! sym expr)`: rebinds `sym` to `(cons (car sym) (eval expr))`.
pub fn builtin_set_cdr(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    set_pair_field("set-cdr!", PairField::Cdr, args, env)
}

/// Registers all list builtins in the environment.
pub fn register(env: &Rc<Environment>) {
    super::define_primitive(env, "cons", builtin_cons);
    super::define_primitive(env, "car", builtin_car);
    super::define_primitive(env, "cdr", builtin_cdr);
    super::define_primitive(env, "list", builtin_list);
    super::define_primitive(env, "list-ref", builtin_list_ref);
    super::define_primitive(env, "list-tail", builtin_list_tail);
    super::define_special_form(env, "set-car!", builtin_set_car);
    super::define_special_form(env, "set-cdr!", builtin_set_cdr);
}
