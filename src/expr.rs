use crate::store::{LookupErr, Value, VarStore};
use std::fmt::{self, Display};

/// An arithmetic intermediate. Untyped until it is assigned into a declared
/// variable; `Int` survives as long as the textual form and the computation
/// stay whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Double(f64),
}

impl Num {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(x) => x as f64,
            Self::Double(x) => x,
        }
    }

    fn add(self, other: Num) -> Num {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(c) => Self::Int(c),
                None => Self::Double(a as f64 + b as f64),
            },
            (a, b) => Self::Double(a.as_f64() + b.as_f64()),
        }
    }

    fn sub(self, other: Num) -> Num {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_sub(b) {
                Some(c) => Self::Int(c),
                None => Self::Double(a as f64 - b as f64),
            },
            (a, b) => Self::Double(a.as_f64() - b.as_f64()),
        }
    }

    fn neg(self) -> Num {
        match self {
            Self::Int(x) => match x.checked_neg() {
                Some(c) => Self::Int(c),
                None => Self::Double(-(x as f64)),
            },
            Self::Double(x) => Self::Double(-x),
        }
    }
}

impl From<Value> for Num {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(x) => Self::Int(x),
            Value::Double(x) => Self::Double(x),
        }
    }
}

/// Display rule for output statements: fractional values get exactly two
/// decimal digits, whole values print as a plain integer string.
impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => write!(f, "{x}"),
            Self::Double(x) if x.fract() == 0.0 => write!(f, "{x}"),
            Self::Double(x) => write!(f, "{x:.2}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    IllegalCharacter,
    Undeclared(String),
    Unassigned(String),
    Malformed,
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(Num),
    Ident(String),
    Plus,
    Minus,
    LeftParen,
    RightParen,
}

/// Evaluate one arithmetic expression against the variable store.
///
/// Only literals, identifiers, binary `+`/`-`, unary sign and parentheses are
/// in the grammar; anything else in the raw text (including `*` and `/`) is
/// an illegal character. Identifiers resolve per token, so a name can never
/// bleed into an adjacent literal.
pub fn eval(text: &str, vars: &VarStore) -> Result<Num, ExprError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens: &tokens,
        index: 0,
        vars,
    };
    let result = parser.expression()?;
    if parser.index != tokens.len() {
        return Err(ExprError::Malformed);
    }
    Ok(result)
}

fn legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '+' | '-' | '(' | ')')
}

fn tokenize(text: &str) -> Result<Vec<Tok>, ExprError> {
    if text.chars().any(|c| !legal_char(c)) {
        return Err(ExprError::IllegalCharacter);
    }

    let chars = text.chars().collect::<Vec<_>>();
    let mut tokens = vec![];
    let mut index = 0;

    while let Some(&c) = chars.get(index) {
        match c {
            c if c.is_whitespace() => index += 1,
            '+' => {
                tokens.push(Tok::Plus);
                index += 1;
            }
            '-' => {
                tokens.push(Tok::Minus);
                index += 1;
            }
            '(' => {
                tokens.push(Tok::LeftParen);
                index += 1;
            }
            ')' => {
                tokens.push(Tok::RightParen);
                index += 1;
            }
            '0'..='9' | '.' => {
                let start = index;
                while matches!(chars.get(index).copied(), Some('0'..='9' | '.')) {
                    index += 1;
                }
                // A literal running straight into a letter ("2x") is an
                // ambiguous token boundary, not an identifier.
                if chars.get(index).is_some_and(|c| c.is_ascii_alphabetic()) {
                    return Err(ExprError::IllegalCharacter);
                }
                let text = chars[start..index].iter().collect::<String>();
                tokens.push(Tok::Num(parse_literal(&text)?));
            }
            c if c.is_ascii_alphabetic() => {
                let start = index;
                while chars.get(index).is_some_and(|c| c.is_ascii_alphanumeric()) {
                    index += 1;
                }
                tokens.push(Tok::Ident(chars[start..index].iter().collect()));
            }
            _ => return Err(ExprError::IllegalCharacter),
        }
    }

    Ok(tokens)
}

// Whole-looking literals stay integers; anything with a dot, and anything too
// large for i64, becomes a double.
fn parse_literal(text: &str) -> Result<Num, ExprError> {
    if !text.contains('.') {
        if let Ok(x) = text.parse::<i64>() {
            return Ok(Num::Int(x));
        }
    }
    text.parse::<f64>()
        .map(Num::Double)
        .map_err(|_| ExprError::Malformed)
}

struct Parser<'a> {
    tokens: &'a [Tok],
    index: usize,
    vars: &'a VarStore,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&Tok> {
        self.index += 1;
        self.tokens.get(self.index - 1)
    }

    // expression := unary (('+' | '-') unary)*, strictly left-associative.
    fn expression(&mut self) -> Result<Num, ExprError> {
        let mut left = self.unary()?;
        loop {
            match self.peek() {
                Some(Tok::Plus) => {
                    self.index += 1;
                    left = left.add(self.unary()?);
                }
                Some(Tok::Minus) => {
                    self.index += 1;
                    left = left.sub(self.unary()?);
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Num, ExprError> {
        match self.peek() {
            Some(Tok::Minus) => {
                self.index += 1;
                Ok(self.unary()?.neg())
            }
            Some(Tok::Plus) => {
                self.index += 1;
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Num, ExprError> {
        match self.advance().cloned() {
            Some(Tok::Num(x)) => Ok(x),
            Some(Tok::Ident(name)) => match self.vars.lookup(&name) {
                Ok(val) => Ok(val.into()),
                Err(LookupErr::Undeclared) => Err(ExprError::Undeclared(name)),
                Err(LookupErr::Unassigned) => Err(ExprError::Unassigned(name)),
            },
            Some(Tok::LeftParen) => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Tok::RightParen) => Ok(inner),
                    _ => Err(ExprError::Malformed),
                }
            }
            _ => Err(ExprError::Malformed),
        }
    }
}
