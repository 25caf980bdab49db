//! Formula tokenizer, parser and evaluator.
//!
//! A formula is stripped of whitespace, tokenized in one pass (any character
//! outside `[0-9()+-*/]` is rejected), then parsed by recursive descent with
//! explicit precedence levels into an expression tree evaluated bottom-up:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ['+' | '-'] (literal | '(' expr ')')
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
//! associate left to right. Each call to [`evaluate`] returns a
//! self-contained [`Evaluation`]; no state is shared between formulas.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use std::fmt;
use std::iter::Peekable;
use std::slice;

/// A lexical element of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Number(BigInt),
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

/// Expression tree over [`BigInt`] literals. Recursive nodes are boxed;
/// sub-trees are owned rather than shared.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Literal(BigInt),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn neg(inner: Expr) -> Self {
        Self::Neg(Box::new(inner))
    }

    fn add(left: Expr, right: Expr) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    fn sub(left: Expr, right: Expr) -> Self {
        Self::Sub(Box::new(left), Box::new(right))
    }

    fn mul(left: Expr, right: Expr) -> Self {
        Self::Mul(Box::new(left), Box::new(right))
    }

    fn div(left: Expr, right: Expr) -> Self {
        Self::Div(Box::new(left), Box::new(right))
    }

    /// Evaluates the tree bottom-up. The only fallible operation is
    /// division, whose errors abort the whole evaluation.
    fn eval(&self) -> Result<BigInt> {
        match self {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Neg(inner) => Ok(-inner.eval()?),
            Expr::Add(left, right) => Ok(left.eval()? + right.eval()?),
            Expr::Sub(left, right) => Ok(left.eval()? - right.eval()?),
            Expr::Mul(left, right) => Ok(left.eval()? * right.eval()?),
            Expr::Div(left, right) => left.eval()?.divide(&right.eval()?),
        }
    }
}

/// The self-contained outcome of evaluating one formula: a snapshot of the
/// formula and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    formula: String,
    value: BigInt,
    approximate: bool,
}

impl Evaluation {
    /// The evaluated formula with binary operators surrounded by single
    /// spaces.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The computed value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// True when the formula contains a division, meaning the value may be a
    /// truncated approximation.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }
}

impl fmt::Display for Evaluation {
    /// Renders `formula = result`, with `~` in place of `=` for approximate
    /// results and the result's leading `+` stripped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = if self.approximate { '~' } else { '=' };
        let rendered = self.value.to_string();
        let result = rendered.strip_prefix('+').unwrap_or(&rendered);
        write!(f, "{} {relation} {result}", self.formula)
    }
}

/// Evaluates a formula string to a single [`BigInt`].
///
/// Whitespace is insignificant; an empty formula evaluates to zero. Illegal
/// characters and malformed shapes yield [`Error::InvalidExpression`], and
/// division errors propagate from the arithmetic layer.
pub fn evaluate(input: &str) -> Result<Evaluation> {
    let stripped: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    let tokens = tokenize(&stripped)?;
    if tokens.is_empty() {
        return Ok(Evaluation {
            formula: "0".to_owned(),
            value: BigInt::zero(),
            approximate: false,
        });
    }
    let value = Parser::new(&tokens, &stripped).parse()?.eval()?;
    Ok(Evaluation {
        formula: render_formula(&stripped),
        value,
        approximate: stripped.contains('/'),
    })
}

/// Scans a whitespace-free formula into tokens. Digit runs become unsigned
/// literals; signs are left for the parser to resolve as unary or binary.
fn tokenize(stripped: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let bytes = stripped.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        let token = match bytes[index] {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'(' => Token::OpenParen,
            b')' => Token::CloseParen,
            b'0'..=b'9' => {
                let start = index;
                while index < bytes.len() && bytes[index].is_ascii_digit() {
                    index += 1;
                }
                tokens.push(Token::Number(stripped[start..index].parse()?));
                continue;
            }
            _ => return Err(Error::InvalidExpression(stripped.to_owned())),
        };
        tokens.push(token);
        index += 1;
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    formula: &'a str,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], formula: &'a str) -> Self {
        Self {
            tokens: tokens.iter().peekable(),
            formula,
        }
    }

    /// Parses the whole token stream; trailing tokens are malformed input.
    fn parse(mut self) -> Result<Expr> {
        let expr = self.expr()?;
        if self.tokens.next().is_some() {
            return Err(self.invalid());
        }
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;
        loop {
            match self.tokens.peek() {
                Some(Token::Plus) => {
                    self.tokens.next();
                    lhs = Expr::add(lhs, self.term()?);
                }
                Some(Token::Minus) => {
                    self.tokens.next();
                    lhs = Expr::sub(lhs, self.term()?);
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.factor()?;
        loop {
            match self.tokens.peek() {
                Some(Token::Star) => {
                    self.tokens.next();
                    lhs = Expr::mul(lhs, self.factor()?);
                }
                Some(Token::Slash) => {
                    self.tokens.next();
                    lhs = Expr::div(lhs, self.factor()?);
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// A factor is a literal or parenthesized group preceded by at most one
    /// sign; doubled signs are rejected.
    fn factor(&mut self) -> Result<Expr> {
        match self.tokens.peek() {
            Some(Token::Plus) => {
                self.tokens.next();
                self.primary()
            }
            Some(Token::Minus) => {
                self.tokens.next();
                Ok(Expr::neg(self.primary()?))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.tokens.next() {
            Some(Token::Number(value)) => Ok(Expr::Literal(value.clone())),
            Some(Token::OpenParen) => {
                let inner = self.expr()?;
                if self.tokens.next() != Some(&Token::CloseParen) {
                    return Err(self.invalid());
                }
                Ok(inner)
            }
            _ => Err(self.invalid()),
        }
    }

    fn invalid(&self) -> Error {
        Error::InvalidExpression(self.formula.to_owned())
    }
}

/// Re-spaces a whitespace-free formula for display: binary operators get a
/// single space on each side, unary signs stay attached to their operand. An
/// operator is binary exactly when it follows a digit or a closing
/// parenthesis.
fn render_formula(stripped: &str) -> String {
    let mut out = String::with_capacity(stripped.len());
    let mut previous: Option<char> = None;
    for ch in stripped.chars() {
        match ch {
            '+' | '-' | '*' | '/'
                if matches!(previous, Some(prev) if prev.is_ascii_digit() || prev == ')') =>
            {
                out.push(' ');
                out.push(ch);
                out.push(' ');
            }
            _ => out.push(ch),
        }
        previous = Some(ch);
    }
    out
}
