// ABOUTME: Error types for lexing, reading, and evaluation failures

use thiserror::Error;

/// The three error kinds a caller of `Evaluate` can distinguish. Errors are
/// raised where detected and unwind straight to the `Evaluate` boundary --
/// there is no local recovery inside the interpreter.
#[derive(Error, Debug, Clone)]
pub enum LispError {
    /// Malformed token stream, mismatched brackets, improper list where a
    /// proper one is required, wrong arity for a special form's subforms,
    /// non-symbol parameter names.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Reference to an unbound symbol during evaluation.
    #[error("undefined symbol: {0}")]
    Name(String),

    /// Arity mismatch in an ordinary call, type mismatch, index out of
    /// range, applying a non-callable, evaluating the empty list as a form.
    #[error("{function}: {message}")]
    Runtime { function: String, message: String },
}

impl LispError {
    pub fn syntax(message: impl Into<String>) -> Self {
        LispError::Syntax(message.into())
    }

    pub fn name(symbol: impl Into<String>) -> Self {
        LispError::Name(symbol.into())
    }

    pub fn runtime(function: &str, message: impl Into<String>) -> Self {
        LispError::Runtime {
            function: function.to_string(),
            message: message.into(),
        }
    }

    pub fn arity(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        let expected = expected.into();
        let plural = if expected == "1" { "" } else { "s" };
        LispError::runtime(
            function,
            format!("expected {} argument{}, got {}", expected, plural, actual),
        )
    }

    pub fn type_mismatch(function: &str, expected: &str, actual: &crate::value::Value) -> Self {
        LispError::runtime(
            function,
            format!("expected {}, got {} ({})", expected, actual.type_name(), actual),
        )
    }
}
