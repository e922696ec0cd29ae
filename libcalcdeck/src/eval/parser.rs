//! Recursive-descent parser evaluating straight to `f64`
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := number | '(' expr ')'
//! ```
//!
//! `**` is right-associative and binds tighter than a leading sign, so
//! `-2**2` is `-4` and `2**-1` is `0.5`.

use super::lexer::{Spanned, Token};
use crate::error::ParseError;

/// Nesting limit for parentheses and chained signs
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    /// Parse and evaluate the whole token stream
    pub fn parse(mut self) -> Result<f64, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let value = self.expr()?;

        match self.tokens.get(self.pos) {
            None => Ok(value),
            Some(extra) => Err(unexpected(extra)),
        }
    }

    fn expr(&mut self) -> Result<f64, ParseError> {
        let mut value = self.term()?;

        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut value = self.unary()?;

        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                Some(Token::Percent) => {
                    self.pos += 1;
                    value %= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                self.nested(|p| p.unary()).map(|v| -v)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(|p| p.unary())
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, ParseError> {
        let base = self.primary()?;

        if self.peek() == Some(Token::Power) {
            self.pos += 1;
            let exponent = self.nested(|p| p.unary())?;
            return Ok(base.powf(exponent));
        }

        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, ParseError> {
        let Some(spanned) = self.tokens.get(self.pos).copied() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Number(value) => {
                self.pos += 1;
                Ok(value)
            }
            Token::LParen => {
                self.pos += 1;
                let value = self.nested(|p| p.expr())?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(_) => Err(unexpected(&self.tokens[self.pos])),
                    None => Err(ParseError::UnclosedParen { position: spanned.position }),
                }
            }
            _ => Err(unexpected(&spanned)),
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<f64, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<f64, ParseError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|s| s.token)
    }
}

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.describe(),
        position: spanned.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::lexer::tokenize;

    fn parse(input: &str) -> Result<f64, ParseError> {
        let tokens = tokenize(input)?;
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse("2+3*4").unwrap(), 14.0);
        assert_eq!(parse("(2+3)*4").unwrap(), 20.0);
        assert_eq!(parse("10-4-3").unwrap(), 3.0);
        assert_eq!(parse("100/10/2").unwrap(), 5.0);
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(parse("2**3**2").unwrap(), 512.0);
    }

    #[test]
    fn test_sign_binds_looser_than_power() {
        assert_eq!(parse("-2**2").unwrap(), -4.0);
        assert_eq!(parse("2**-1").unwrap(), 0.5);
        assert_eq!(parse("(-2)**2").unwrap(), 4.0);
    }

    #[test]
    fn test_remainder_keeps_dividend_sign() {
        assert_eq!(parse("7%3").unwrap(), 1.0);
        assert_eq!(parse("-7%3").unwrap(), -1.0);
        assert_eq!(parse("5.5%2").unwrap(), 1.5);
    }

    #[test]
    fn test_chained_signs() {
        assert_eq!(parse("3--2").unwrap(), 5.0);
        assert_eq!(parse("+-+4").unwrap(), -4.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(parse("2+"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_unclosed_paren_reports_opening_position() {
        assert_eq!(parse("1+(2*3"), Err(ParseError::UnclosedParen { position: 2 }));
    }

    #[test]
    fn test_stray_close_paren() {
        assert_eq!(
            parse("1+2)"),
            Err(ParseError::UnexpectedToken { found: ")".to_string(), position: 3 })
        );
    }

    #[test]
    fn test_adjacent_numbers_are_rejected() {
        assert!(matches!(parse("1.2.3"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("2(3)"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_empty_parens_are_rejected() {
        assert!(matches!(parse("()"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse(&deep), Err(ParseError::NestingTooDeep { limit: MAX_DEPTH }));

        let shallow = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(parse(&shallow).unwrap(), 1.0);
    }
}
