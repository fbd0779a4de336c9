//! Special forms: quote, define, set!, if, and, or, lambda
//!
//! Every function here receives its argument list unevaluated, per the
//! evaluator's fexpr-style dispatch -- each decides for itself whether, and
//! in what order, to evaluate its own operands.

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::{eval_args, evaluate};
use crate::value::{Callable, Value};
use std::rc::Rc;

/// A user-defined procedure. Captures the environment in effect at
/// `lambda`-construction time; every call creates a fresh child of that
/// environment rather than reusing one shared scope across calls.
#[derive(Debug)]
struct Lambda {
    params: Vec<Rc<str>>,
    body: Vec<Value>,
    env: Rc<Environment>,
}

impl Callable for Lambda {
    fn invoke(&self, args: &Value, caller_env: &Rc<Environment>) -> Result<Value, LispError> {
        let evaluated = eval_args(args, caller_env)?;
        if evaluated.len() != self.params.len() {
            return Err(LispError::arity(
                "lambda",
                self.params.len().to_string(),
                evaluated.len(),
            ));
        }

        let call_env = Environment::with_parent(self.env.clone());
        for (name, value) in self.params.iter().zip(evaluated) {
            call_env.define(name.to_string(), value);
        }

        let mut result = Value::EmptyList;
        for form in &self.body {
            result = evaluate(form, &call_env)?;
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "lambda"
    }
}

fn make_lambda(params: &[Value], body: Vec<Value>, env: Rc<Environment>) -> Result<Value, LispError> {
    let mut names = Vec::with_capacity(params.len());
    for param in params {
        match param {
            Value::Symbol(name) => names.push(name.clone()),
            other => {
                return Err(LispError::syntax(format!(
                    "lambda: parameter must be a symbol, got {}",
                    other
                )))
            }
        }
    }
    Ok(Value::Callable(Rc::new(Lambda {
        params: names,
        body,
        env,
    })))
}

fn proper_list_args(function: &str, args: &Value) -> Result<Vec<Value>, LispError> {
    let (items, tail) = args.walk_list();
    if !matches!(tail, Value::EmptyList) {
        return Err(LispError::syntax(format!(
            "{}: improper argument list",
            function
        )));
    }
    Ok(items)
}

/// `(quote x)`: returns `x` unevaluated.
pub fn builtin_quote(args: &Value, _env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("quote", args)?;
    if items.len() != 1 {
        return Err(LispError::arity("quote", "1", items.len()));
    }
    Ok(items.into_iter().next().unwrap())
}

/// `(define sym expr)` or `(define (name param...) body...)`.
pub fn builtin_define(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("define", args)?;
    let Some(target) = items.first() else {
        return Err(LispError::syntax("define: missing target"));
    };

    match target {
        Value::Symbol(name) => {
            if items.len() != 2 {
                return Err(LispError::arity("define", "2", items.len()));
            }
            let value = evaluate(&items[1], env)?;
            env.define(name.to_string(), value);
            Ok(Value::Symbol(name.clone()))
        }
        Value::Pair(_) => {
            let signature = proper_list_args("define", target)?;
            let Some(Value::Symbol(name)) = signature.first() else {
                return Err(LispError::syntax(
                    "define: lambda-sugar name must be a symbol",
                ));
            };
            let params = &signature[1..];
            let body = items[1..].to_vec();
            if body.is_empty() {
                return Err(LispError::syntax("define: lambda body must not be empty"));
            }
            let lambda = make_lambda(params, body, env.clone())?;
            env.define(name.to_string(), lambda);
            Ok(Value::Symbol(name.clone()))
        }
        other => Err(LispError::syntax(format!(
            "define: invalid target {}",
            other
        ))),
    }
}

/// `(set! sym expr)`: requires `sym` to already resolve, then writes the new
/// value into the *current* scope (see `Environment::set_local`).
pub fn builtin_set(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("set!", args)?;
    if items.len() != 2 {
        return Err(LispError::arity("set!", "2", items.len()));
    }
    let name = items[0]
        .as_symbol()
        .ok_or_else(|| LispError::syntax("set!: first argument must be a symbol"))?;
    let value = evaluate(&items[1], env)?;
    env.set_local(name, value)?;
    Ok(Value::EmptyList)
}

/// `(if test then [else])`. Only boolean `#f` is falsey.
pub fn builtin_if(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("if", args)?;
    if items.len() < 2 || items.len() > 3 {
        return Err(LispError::syntax(format!(
            "if: expected 2 or 3 subforms, got {}",
            items.len()
        )));
    }
    let test = evaluate(&items[0], env)?;
    if test.is_truthy() {
        evaluate(&items[1], env)
    } else if let Some(else_branch) = items.get(2) {
        evaluate(else_branch, env)
    } else {
        Ok(Value::EmptyList)
    }
}

/// Evaluates left to right, short-circuiting on the first `#f`.
pub fn builtin_and(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("and", args)?;
    let mut result = Value::Bool(true);
    for item in &items {
        result = evaluate(item, env)?;
        if !result.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(result)
}

/// Evaluates left to right, short-circuiting on the first non-`#f` value.
pub fn builtin_or(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("or", args)?;
    for item in &items {
        let value = evaluate(item, env)?;
        if value.is_truthy() {
            return Ok(value);
        }
    }
    Ok(Value::Bool(false))
}

/// `(lambda (param...) body...)`: captures `env` and produces a procedure.
pub fn builtin_lambda(args: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let items = proper_list_args("lambda", args)?;
    let Some(params_form) = items.first() else {
        return Err(LispError::syntax("lambda: missing parameter list"));
    };
    let params = proper_list_args("lambda", params_form)?;
    let body = items[1..].to_vec();
    if body.is_empty() {
        return Err(LispError::syntax("lambda: body must not be empty"));
    }
    make_lambda(&params, body, env.clone())
}

/// Registers every special form in the environment.
pub fn register(env: &Rc<Environment>) {
    super::define_special_form(env, "quote", builtin_quote);
    super::define_special_form(env, "define", builtin_define);
    super::define_special_form(env, "set!", builtin_set);
    super::define_special_form(env, "if", builtin_if);
    super::define_special_form(env, "and", builtin_and);
    super::define_special_form(env, "or", builtin_or);
    super::define_special_form(env, "lambda", builtin_lambda);
}
