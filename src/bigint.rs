//! Arbitrary-precision signed integers over decimal digit sequences.
//!
//! A [`BigInt`] is immutable: every operation returns a new value, and every
//! constructor funnels raw digit buffers through [`digits::normalize`] so the
//! canonical-form invariants hold at all times. Division is self-hosting: it
//! binary-searches the quotient range using only addition, floor halving and
//! multiplication, never materializing a value outside `[0, dividend]`.

use crate::digits;
use crate::error::{Error, Result};
use crate::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision signed integer: a sign tag plus decimal digits stored
/// least-significant first.
///
/// Canonical form: the sign is `Zero` exactly when the digit sequence is
/// empty, the most significant stored digit is never zero, and every digit is
/// in `[0, 9]`. Structural equality on canonical values is value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
    sign: Sign,
}

impl BigInt {
    /// Returns the canonical zero.
    pub fn zero() -> Self {
        Self {
            digits: Vec::new(),
            sign: Sign::Zero,
        }
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the sign tag.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Exposes the digit sequence, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the absolute value. Non-negative values are returned as-is.
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => Self {
                digits: self.digits.clone(),
                sign: Sign::Positive,
            },
            _ => self.clone(),
        }
    }

    /// Truncating division (rounds toward zero), erroring on a zero divisor.
    ///
    /// The quotient is located by bisection over the candidate range
    /// `[10^(span-1), 10^(span+1))` where `span = len(dividend) -
    /// len(divisor)`: each midpoint is multiplied by the divisor and the
    /// comparison against the dividend narrows one bound. The search ends
    /// when a candidate's product matches the dividend exactly or when
    /// successive midpoints stop changing, which is the floor quotient of
    /// the magnitudes. The result carries the product of the operand signs.
    pub fn divide(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let sign = self.sign.multiply(divisor.sign);
        let dividend = self.abs();
        let divisor = divisor.abs();

        match dividend.cmp(&divisor) {
            Ordering::Less => return Ok(BigInt::zero()),
            Ordering::Equal => {
                return Ok(BigInt {
                    digits: vec![1],
                    sign,
                });
            }
            Ordering::Greater => {}
        }
        if divisor.digits == [1] {
            return Ok(BigInt {
                digits: dividend.digits,
                sign,
            });
        }

        let span = dividend.digits.len() - divisor.digits.len();
        let mut low = BigInt::pow10(span.saturating_sub(1));
        let mut high = BigInt::pow10(span + 1);

        // The bracket spans fewer than 10^(span+1) candidates and every step
        // halves it, so 4 * (span + 2) steps always suffice (2^4 > 10).
        let max_steps = 4 * (span + 2);
        let mut candidate = low.clone();
        let mut previous: Option<BigInt> = None;

        for _ in 0..max_steps {
            if previous.as_ref() == Some(&candidate) {
                return Ok(candidate.with_sign(sign));
            }
            let product = &candidate * &divisor;
            match dividend.cmp(&product) {
                Ordering::Equal => return Ok(candidate.with_sign(sign)),
                Ordering::Greater => low = candidate.clone(),
                Ordering::Less => high = candidate.clone(),
            }
            previous = Some(candidate);
            candidate = BigInt::midpoint(&low, &high);
        }
        Err(Error::BisectionDiverged { steps: max_steps })
    }

    /// Ensures the value satisfies the canonical-form invariants.
    pub fn check_invariants(&self) -> std::result::Result<(), &'static str> {
        if !digits::is_canonical(&self.digits) {
            return Err("BigInt digits must be canonical (each in 0..=9, no leading zero)");
        }
        if (self.sign == Sign::Zero) != self.digits.is_empty() {
            return Err("BigInt sign must be Zero exactly when the digit sequence is empty");
        }
        Ok(())
    }

    fn from_raw(raw: Vec<i64>) -> Self {
        let (digits, sign) = digits::normalize(raw);
        let result = Self { digits, sign };
        debug_assert!(result.check_invariants().is_ok());
        result
    }

    /// `10^exponent` as a positive value.
    fn pow10(exponent: usize) -> Self {
        let mut digits = vec![0u8; exponent];
        digits.push(1);
        Self {
            digits,
            sign: Sign::Positive,
        }
    }

    /// Floor midpoint of two positive bounds: their sum halved digit-wise.
    fn midpoint(low: &BigInt, high: &BigInt) -> BigInt {
        let mut sum = low + high;
        digits::halve_floor(&mut sum.digits);
        if sum.digits.is_empty() {
            sum.sign = Sign::Zero;
        }
        debug_assert!(sum.check_invariants().is_ok());
        sum
    }

    fn with_sign(self, sign: Sign) -> Self {
        debug_assert!(!self.is_zero());
        Self { sign, ..self }
    }

    #[cfg(test)]
    fn from_raw_parts(digits: Vec<u8>, sign: Sign) -> Self {
        Self { digits, sign }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optionally signed decimal literal. Leading zeros are
    /// stripped; an all-zero magnitude is the canonical zero regardless of
    /// the sign character.
    fn from_str(text: &str) -> Result<Self> {
        let (parsed_sign, magnitude) = match text.as_bytes().first() {
            Some(b'+') => (Sign::Positive, &text[1..]),
            Some(b'-') => (Sign::Negative, &text[1..]),
            _ => (Sign::Positive, text),
        };
        if magnitude.is_empty() || !magnitude.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Error::InvalidLiteral(text.to_string()));
        }
        let mut digits: Vec<u8> = magnitude.bytes().rev().map(|byte| byte - b'0').collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        let sign = if digits.is_empty() {
            Sign::Zero
        } else {
            parsed_sign
        };
        Ok(Self { digits, sign })
    }
}

impl fmt::Display for BigInt {
    /// Canonical rendering: zero is `"+0"`, otherwise a sign character
    /// followed by the digits most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("+0");
        }
        let sign = if self.sign == Sign::Negative { '-' } else { '+' };
        write!(f, "{sign}")?;
        for &digit in self.digits.iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let sign = match value.cmp(&0) {
            Ordering::Greater => Sign::Positive,
            Ordering::Equal => Sign::Zero,
            Ordering::Less => Sign::Negative,
        };
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        Self { digits, sign }
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Handles same-sign and opposite-sign addition through the single
    /// normalization step; there is no separate digit-level subtraction.
    fn add(self, rhs: &'b BigInt) -> BigInt {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        BigInt::from_raw(digits::signed_sum(
            &self.digits,
            self.sign,
            &rhs.digits,
            rhs.sign,
        ))
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        (&self).add(&rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        (&self).add(rhs)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &'b BigInt) -> BigInt {
        self.add(&rhs.neg())
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        (&self).sub(&rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        (&self).sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &'b BigInt) -> BigInt {
        let sign = self.sign.multiply(rhs.sign);
        if sign == Sign::Zero {
            return BigInt::zero();
        }
        let (digits, magnitude_sign) = digits::normalize(digits::raw_product(
            &self.digits,
            &rhs.digits,
        ));
        debug_assert_eq!(magnitude_sign, Sign::Positive);
        let result = BigInt { digits, sign };
        debug_assert!(result.check_invariants().is_ok());
        result
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        (&self).mul(&rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        (&self).mul(rhs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            sign: self.sign.invert(),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = self.sign.invert();
        self
    }
}

impl Ord for BigInt {
    /// Comparison is defined as the sign of the difference.
    fn cmp(&self, other: &Self) -> Ordering {
        (self - other).sign.ordering()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
