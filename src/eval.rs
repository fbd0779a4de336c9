// ABOUTME: The tree-walking evaluator

use crate::env::Environment;
use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;
use tracing::instrument;

/// Reduces `form` against `env`. Integers and booleans self-evaluate;
/// symbols resolve through the environment chain; a pair is an application --
/// its head is evaluated to a callable and invoked with the raw, unevaluated
/// tail. The evaluator never evaluates arguments itself; each callable
/// decides whether and in what order to evaluate its own.
#[instrument(level = "debug", skip(env), fields(form = %form))]
pub fn evaluate(form: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    match form {
        Value::Integer(_) | Value::Bool(_) => Ok(form.clone()),
        Value::Symbol(name) => env.lookup_or_err(name),
        Value::EmptyList => Err(LispError::runtime("eval", "cannot evaluate empty list")),
        Value::Callable(_) => Ok(form.clone()),
        Value::Pair(cell) => {
            let callable_value = evaluate(&cell.0, env)?;
            let Value::Callable(callable) = callable_value else {
                return Err(LispError::runtime(
                    "eval",
                    format!("cannot apply non-callable value: {}", callable_value),
                ));
            };
            tracing::debug!(callable = callable.name(), "invoking");
            callable.invoke(&cell.1, env)
        }
    }
}

/// Evaluates every element of a proper argument list, left to right, in
/// `env`. Used by ordinary (non-special-form) primitives as their first
/// step. Fails if `args` is not a proper list.
pub fn eval_args(args: &Value, env: &Rc<Environment>) -> Result<Vec<Value>, LispError> {
    let (items, tail) = args.walk_list();
    if !matches!(tail, Value::EmptyList) {
        return Err(LispError::syntax("improper argument list"));
    }
    items.iter().map(|item| evaluate(item, env)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use crate::reader::read_program;

    fn eval_str(env: &Rc<Environment>, text: &str) -> Result<Value, LispError> {
        let form = read_program(text).unwrap();
        evaluate(&form, env)
    }

    fn root_env() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    #[test]
    fn self_evaluating_forms() {
        let env = root_env();
        assert!(matches!(eval_str(&env, "42").unwrap(), Value::Integer(42)));
        assert!(matches!(eval_str(&env, "#t").unwrap(), Value::Bool(true)));
    }

    #[test]
    fn unbound_symbol_is_name_error() {
        let env = root_env();
        assert!(matches!(eval_str(&env, "nope"), Err(LispError::Name(_))));
    }

    #[test]
    fn empty_list_is_runtime_error() {
        let env = root_env();
        assert!(matches!(eval_str(&env, "()"), Err(LispError::Runtime { .. })));
    }

    #[test]
    fn applying_non_callable_is_runtime_error() {
        let env = root_env();
        assert!(matches!(
            eval_str(&env, "(1 2 3)"),
            Err(LispError::Runtime { .. })
        ));
    }

    #[test]
    fn simple_arithmetic() {
        let env = root_env();
        assert!(matches!(eval_str(&env, "(+ 1 2 3)").unwrap(), Value::Integer(6)));
    }

    #[test]
    fn lexical_scoping_through_closures() {
        let env = root_env();
        eval_str(&env, "(define f (lambda (x) (lambda (y) (+ x y))))").unwrap();
        let result = eval_str(&env, "((f 10) 5)").unwrap();
        assert!(matches!(result, Value::Integer(15)));
    }
}
