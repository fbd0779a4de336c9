// ABOUTME: Library module exposing internal components and the public Interpreter

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod reader;
pub mod token;
pub mod tokenizer;
pub mod value;

use env::Environment;
use error::LispError;
use std::rc::Rc;
use tracing::instrument;

/// A live interpreter instance: a persistent environment carried across
/// successive `evaluate` calls. Not reentrant and not safe to share across
/// threads without external synchronization.
pub struct Interpreter {
    env: Rc<Environment>,
}

impl Interpreter {
    /// Builds an interpreter with a fresh root environment pre-populated
    /// with every binding in the primitive library.
    pub fn new() -> Self {
        let env = Environment::new();
        builtins::register_builtins(&env);
        Interpreter { env }
    }

    /// Parses exactly one expression from `text`, evaluates it against the
    /// persistent environment, and returns its canonical textual form.
    /// `define`d bindings from earlier calls remain visible; a failed call
    /// leaves the environment exactly as it found it (no partially-applied
    /// `define` is ever observable, since `define` evaluates its expression
    /// before binding).
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, text: &str) -> Result<String, LispError> {
        let form = reader::read_program(text)?;
        let result = eval::evaluate(&form, &self.env)?;
        Ok(result.to_string())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_environment_across_calls() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.evaluate("(define x 10)").unwrap(), "x");
        assert_eq!(interp.evaluate("(* x (- x 3))").unwrap(), "70");
    }

    #[test]
    fn recursive_function_definition() {
        let mut interp = Interpreter::new();
        interp
            .evaluate("(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))")
            .unwrap();
        assert_eq!(interp.evaluate("(fact 5)").unwrap(), "120");
    }

    #[test]
    fn failed_call_does_not_corrupt_environment() {
        let mut interp = Interpreter::new();
        interp.evaluate("(define x 1)").unwrap();
        assert!(interp.evaluate("(+ x #t)").is_err());
        assert_eq!(interp.evaluate("x").unwrap(), "1");
    }

    #[test]
    fn printer_round_trips_lists_and_pairs() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.evaluate("(list 1 2 3)").unwrap(), "(1 2 3)");
        assert_eq!(interp.evaluate("(cons 1 2)").unwrap(), "(1 . 2)");
        assert_eq!(interp.evaluate("'(a b c)").unwrap(), "(a b c)");
    }
}
