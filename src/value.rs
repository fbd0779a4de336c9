// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use crate::error::LispError;
use std::fmt;
use std::rc::Rc;

/// A runtime value. Exactly one of a fixed set of tagged variants -- there is
/// no `List` variant; proper and improper lists are both chains of `Pair`.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Bool(bool),
    Symbol(Rc<str>),
    Pair(Rc<(Value, Value)>),
    EmptyList,
    Callable(Rc<dyn Callable>),
}

impl Value {
    pub fn symbol(name: impl Into<Rc<str>>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn cons(first: Value, second: Value) -> Value {
        Value::Pair(Rc::new((first, second)))
    }

    /// Every value is truthy except `#f`. `EmptyList` and `0` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a proper list from a vector, right-folding onto `EmptyList`.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::EmptyList, |tail, item| Value::cons(item, tail))
    }

    /// Walks a value as a (possibly improper) list, collecting elements until
    /// a non-pair terminator. Returns the elements and the terminator, which
    /// is `EmptyList` for a proper list.
    pub fn walk_list(&self) -> (Vec<Value>, Value) {
        let mut items = Vec::new();
        let mut cur = self.clone();
        loop {
            match cur {
                Value::Pair(cell) => {
                    items.push(cell.0.clone());
                    cur = cell.1.clone();
                }
                other => return (items, other),
            }
        }
    }

    pub fn is_proper_list(&self) -> bool {
        matches!(self.walk_list(), (_, Value::EmptyList))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::Pair(_) => "pair",
            Value::EmptyList => "empty list",
            Value::Callable(_) => "callable",
        }
    }
}

/// A first-class invokable entity. Receives the caller's environment and its
/// *unevaluated* argument list, and decides whether, and in what order, to
/// evaluate them. Special forms and ordinary primitives both implement this
/// one operation; nothing else distinguishes them publicly.
pub trait Callable: fmt::Debug {
    fn invoke(&self, args: &Value, caller_env: &Rc<Environment>) -> Result<Value, LispError>;

    /// Name used in error messages and (if ever printed) display text.
    fn name(&self) -> &str;
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::EmptyList => write!(f, "()"),
            Value::Callable(c) => write!(f, "#<procedure:{}>", c.name()),
            Value::Pair(cell) => {
                write!(f, "(")?;
                write!(f, "{}", cell.0)?;
                let mut tail = cell.1.clone();
                loop {
                    match tail {
                        Value::Pair(next) => {
                            write!(f, " {}", next.0)?;
                            tail = next.1.clone();
                        }
                        Value::EmptyList => break,
                        other => {
                            write!(f, " . {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_display() {
        assert_eq!(format!("{}", Value::Integer(42)), "42");
        assert_eq!(format!("{}", Value::Integer(-7)), "-7");
    }

    #[test]
    fn bool_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "#t");
        assert_eq!(format!("{}", Value::Bool(false)), "#f");
    }

    #[test]
    fn empty_list_display() {
        assert_eq!(format!("{}", Value::EmptyList), "()");
    }

    #[test]
    fn proper_list_display() {
        let list = Value::list(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
        ]);
        assert_eq!(format!("{}", list), "(1 2 3)");
    }

    #[test]
    fn improper_list_display() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        assert_eq!(format!("{}", pair), "(1 . 2)");

        let nested = Value::cons(
            Value::Integer(1),
            Value::cons(Value::Integer(2), Value::Integer(3)),
        );
        assert_eq!(format!("{}", nested), "(1 2 . 3)");
    }

    #[test]
    fn nested_list_display() {
        let inner = Value::list(vec![Value::Integer(2), Value::Integer(3)]);
        let outer = Value::list(vec![Value::Integer(1), inner, Value::Integer(4)]);
        assert_eq!(format!("{}", outer), "(1 (2 3) 4)");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::EmptyList.is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn walk_list_proper() {
        let list = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
        let (items, tail) = list.walk_list();
        assert_eq!(items.len(), 2);
        assert!(matches!(tail, Value::EmptyList));
    }

    #[test]
    fn walk_list_improper() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        let (items, tail) = pair.walk_list();
        assert_eq!(items.len(), 1);
        assert!(matches!(tail, Value::Integer(2)));
    }
}
