//! Tokenizer for normalized arithmetic text
//!
//! Only numeric literals, the fixed operator set and parentheses are
//! recognized. Every other character, letters included, is rejected; the
//! exponent marker is legal only inside a numeric literal such as `1e5`.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
}

impl Token {
    /// Source text of the token, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Number(value) => value.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::Power => "**".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// A token and the character position where it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Split normalized text into tokens
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let position = i;

        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let (value, next) = lex_number(&chars, i)?;
                i = next;
                tokens.push(Spanned { token: Token::Number(value), position });
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Power
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(ParseError::ForbiddenCharacter { ch: other, position });
            }
        };

        tokens.push(Spanned { token, position });
        i += 1;
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`
///
/// Accepts `12`, `1.5`, `.5`, `5.` and an optional exponent (`1e5`,
/// `2.5E-3`). Returns the value and the index just past the literal.
fn lex_number(chars: &[char], start: usize) -> Result<(f64, usize), ParseError> {
    let mut i = start;
    let mut mantissa_digits = 0;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }

    if mantissa_digits == 0 {
        return Err(malformed(chars, start, i));
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        let exponent_start = j;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j == exponent_start {
            return Err(malformed(chars, start, j));
        }
        i = j;
    }

    let text: String = chars[start..i].iter().collect();
    text.parse::<f64>()
        .map(|value| (value, i))
        .map_err(|_| ParseError::MalformedNumber { text, position: start })
}

fn malformed(chars: &[char], start: usize, end: usize) -> ParseError {
    let end = end.max(start + 1).min(chars.len());
    ParseError::MalformedNumber {
        text: chars[start..end].iter().collect(),
        position: start,
    }
}
