// ABOUTME: Lookahead-1 character stream tokenizer

use crate::error::LispError;
use crate::token::Token;

fn is_symbol_head(c: char) -> bool {
    c.is_alphabetic() || "<=>*#+-/".contains(c)
}

fn is_symbol_tail(c: char) -> bool {
    c.is_alphanumeric() || "<=>*#?!-".contains(c)
}

/// Turns source text into a stream of tokens with a single-token lookahead.
/// After construction and after every `advance`, `peek` reports the current
/// token, or `None` once the stream is exhausted.
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    current: Option<Token>,
}

impl Tokenizer {
    pub fn new(input: &str) -> Result<Self, LispError> {
        let mut tokenizer = Tokenizer {
            chars: input.chars().collect(),
            pos: 0,
            current: None,
        };
        tokenizer.current = tokenizer.next_token()?;
        Ok(tokenizer)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Discards the current token and lexes the next one.
    pub fn advance(&mut self) -> Result<(), LispError> {
        self.current = self.next_token()?;
        Ok(())
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, LispError> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        match c {
            '(' => {
                self.bump();
                Ok(Some(Token::OpenParen))
            }
            ')' => {
                self.bump();
                Ok(Some(Token::CloseParen))
            }
            '.' => {
                self.bump();
                Ok(Some(Token::Dot))
            }
            '\'' => {
                self.bump();
                Ok(Some(Token::Quote))
            }
            '+' | '-' => {
                // Two-character lookahead: consume the sign, peek the next
                // character, and treat the sign as the start of a number
                // only if a digit follows. Otherwise it is a bare symbol.
                if matches!(self.peek_char_at(1), Some(d) if d.is_ascii_digit()) {
                    Ok(Some(self.read_number()))
                } else {
                    self.bump();
                    Ok(Some(Token::Symbol(c.to_string())))
                }
            }
            '/' => {
                // `/` is always a one-character symbol, never the start of a
                // longer identifier -- it does not absorb a following run of
                // symbol-tail characters the way other symbol heads do.
                self.bump();
                Ok(Some(Token::Symbol(c.to_string())))
            }
            d if d.is_ascii_digit() => Ok(Some(self.read_number())),
            h if is_symbol_head(h) => Ok(Some(self.read_symbol())),
            other => Err(LispError::syntax(format!("unexpected character '{}'", other))),
        }
    }

    fn read_number(&mut self) -> Token {
        let mut text = String::new();
        if matches!(self.peek_char(), Some('+') | Some('-')) {
            text.push(self.bump().unwrap());
        }
        while matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
            text.push(self.bump().unwrap());
        }
        // Digits were confirmed present by next_token before calling this,
        // so parsing cannot fail short of i64 overflow.
        Token::Constant(text.parse().unwrap_or(i64::MAX))
    }

    fn read_symbol(&mut self) -> Token {
        let mut text = String::new();
        text.push(self.bump().unwrap());
        while matches!(self.peek_char(), Some(c) if is_symbol_tail(c)) {
            text.push(self.bump().unwrap());
        }
        Token::Symbol(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input).unwrap();
        let mut out = Vec::new();
        while let Some(tok) = tokenizer.peek().cloned() {
            out.push(tok);
            tokenizer.advance().unwrap();
        }
        out
    }

    #[test]
    fn empty_input_is_end() {
        let tokenizer = Tokenizer::new("   ").unwrap();
        assert!(tokenizer.is_end());
    }

    #[test]
    fn parens_and_dot_and_quote() {
        assert_eq!(
            tokens("( . )'"),
            vec![
                Token::OpenParen,
                Token::Dot,
                Token::CloseParen,
                Token::Quote,
            ]
        );
    }

    #[test]
    fn signed_integers() {
        assert_eq!(tokens("42 -7 +3"), vec![
            Token::Constant(42),
            Token::Constant(-7),
            Token::Constant(3),
        ]);
    }

    #[test]
    fn bare_plus_and_minus_are_symbols() {
        assert_eq!(
            tokens("+ - /"),
            vec![
                Token::Symbol("+".to_string()),
                Token::Symbol("-".to_string()),
                Token::Symbol("/".to_string()),
            ]
        );
    }

    #[test]
    fn symbols_with_punctuation() {
        assert_eq!(
            tokens("list? set-car! <= foo-bar"),
            vec![
                Token::Symbol("list?".to_string()),
                Token::Symbol("set-car!".to_string()),
                Token::Symbol("<=".to_string()),
                Token::Symbol("foo-bar".to_string()),
            ]
        );
    }

    #[test]
    fn leading_hyphen_is_its_own_symbol_not_an_identifier_prefix() {
        // '-' not followed by a digit is always a one-character symbol;
        // it does not absorb a following alphabetic run.
        assert_eq!(
            tokens("-foo"),
            vec![Token::Symbol("-".to_string()), Token::Symbol("foo".to_string())]
        );
    }

    #[test]
    fn trailing_sign_with_no_digit_is_symbol() {
        assert_eq!(tokens("+"), vec![Token::Symbol("+".to_string())]);
    }

    #[test]
    fn slash_is_always_a_one_character_symbol() {
        // '/' never absorbs a following run of symbol-tail characters, even
        // digits or alphabetics that would otherwise continue a symbol.
        assert_eq!(
            tokens("/5"),
            vec![Token::Symbol("/".to_string()), Token::Constant(5)]
        );
        assert_eq!(
            tokens("/foo"),
            vec![Token::Symbol("/".to_string()), Token::Symbol("foo".to_string())]
        );
    }

    #[test]
    fn unexpected_character_is_syntax_error() {
        assert!(Tokenizer::new("@").is_err());
    }

    #[test]
    fn full_expression() {
        assert_eq!(
            tokens("(+ 1 2)"),
            vec![
                Token::OpenParen,
                Token::Symbol("+".to_string()),
                Token::Constant(1),
                Token::Constant(2),
                Token::CloseParen,
            ]
        );
    }
}
