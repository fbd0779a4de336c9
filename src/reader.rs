// ABOUTME: Recursive-descent reader turning a token stream into values

use crate::error::LispError;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::value::Value;

/// Reads exactly one complete expression from `text`, then requires the
/// input to end there. This is the entry point `Evaluate` uses; the reader
/// never consumes more than one top-level form.
pub fn read_program(text: &str) -> Result<Value, LispError> {
    let mut tokenizer = Tokenizer::new(text)?;
    let value = read_one(&mut tokenizer)?;
    if !tokenizer.is_end() {
        return Err(LispError::syntax("unexpected trailing input after expression"));
    }
    Ok(value)
}

/// Consumes one S-expression. An empty stream reads as the empty list.
fn read_one(tokenizer: &mut Tokenizer) -> Result<Value, LispError> {
    let Some(token) = tokenizer.peek().cloned() else {
        return Ok(Value::EmptyList);
    };

    match token {
        Token::Constant(n) => {
            tokenizer.advance()?;
            Ok(Value::Integer(n))
        }
        Token::Symbol(name) => {
            tokenizer.advance()?;
            match name.as_str() {
                "#t" => Ok(Value::Bool(true)),
                "#f" => Ok(Value::Bool(false)),
                _ => Ok(Value::symbol(name)),
            }
        }
        Token::Quote => {
            tokenizer.advance()?;
            let quoted = read_one(tokenizer)?;
            Ok(Value::list(vec![Value::symbol("quote"), quoted]))
        }
        Token::OpenParen => {
            tokenizer.advance()?;
            read_list(tokenizer)
        }
        Token::CloseParen => Err(LispError::syntax("unexpected ')'")),
        Token::Dot => Err(LispError::syntax("unexpected '.'")),
    }
}

/// Consumes forms up to a matching `CloseParen`, assuming the opening
/// `OpenParen` has already been consumed. Builds a right-associated chain of
/// pairs, honoring an optional `Dot`-introduced improper tail.
fn read_list(tokenizer: &mut Tokenizer) -> Result<Value, LispError> {
    let mut items = Vec::new();
    let mut tail = Value::EmptyList;

    loop {
        match tokenizer.peek() {
            None => return Err(LispError::syntax("unexpected end of input in list")),
            Some(Token::CloseParen) => {
                tokenizer.advance()?;
                break;
            }
            Some(Token::Dot) => {
                if items.is_empty() {
                    return Err(LispError::syntax("'.' with no preceding element"));
                }
                tokenizer.advance()?;
                tail = read_one(tokenizer)?;
                match tokenizer.peek() {
                    Some(Token::CloseParen) => {
                        tokenizer.advance()?;
                        break;
                    }
                    _ => return Err(LispError::syntax("expected ')' after dotted tail")),
                }
            }
            _ => items.push(read_one(tokenizer)?),
        }
    }

    Ok(items
        .into_iter()
        .rev()
        .fold(tail, |acc, item| Value::cons(item, acc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_integer() {
        assert!(matches!(read_program("42").unwrap(), Value::Integer(42)));
    }

    #[test]
    fn reads_booleans() {
        assert!(matches!(read_program("#t").unwrap(), Value::Bool(true)));
        assert!(matches!(read_program("#f").unwrap(), Value::Bool(false)));
    }

    #[test]
    fn reads_symbol() {
        let v = read_program("foo").unwrap();
        assert_eq!(v.as_symbol(), Some("foo"));
    }

    #[test]
    fn reads_empty_list() {
        assert!(matches!(read_program("()").unwrap(), Value::EmptyList));
    }

    #[test]
    fn empty_input_reads_as_empty_list() {
        assert!(matches!(read_program("").unwrap(), Value::EmptyList));
    }

    #[test]
    fn reads_proper_list() {
        let v = read_program("(1 2 3)").unwrap();
        assert_eq!(format!("{}", v), "(1 2 3)");
    }

    #[test]
    fn reads_dotted_pair() {
        let v = read_program("(1 . 2)").unwrap();
        assert_eq!(format!("{}", v), "(1 . 2)");
    }

    #[test]
    fn reads_improper_list_with_multiple_heads() {
        let v = read_program("(1 2 . 3)").unwrap();
        assert_eq!(format!("{}", v), "(1 2 . 3)");
    }

    #[test]
    fn reader_macro_expands_quote() {
        let v = read_program("'(a b)").unwrap();
        assert_eq!(format!("{}", v), "(quote (a b))");
    }

    #[test]
    fn quote_of_atom() {
        let v = read_program("'x").unwrap();
        assert_eq!(format!("{}", v), "(quote x)");
    }

    #[test]
    fn trailing_input_is_syntax_error() {
        assert!(read_program("1 2").is_err());
    }

    #[test]
    fn unclosed_paren_is_syntax_error() {
        assert!(read_program("(1 2").is_err());
    }

    #[test]
    fn dot_with_no_preceding_element_is_syntax_error() {
        assert!(read_program("(. 1)").is_err());
    }

    #[test]
    fn bare_close_paren_is_syntax_error() {
        assert!(read_program(")").is_err());
    }
}
