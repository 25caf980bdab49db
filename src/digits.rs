//! Raw digit-buffer routines backing [`BigInt`](crate::BigInt).
//!
//! Magnitudes are sequences of decimal digits stored least-significant first.
//! Arithmetic first produces a "raw" `i64` buffer whose positions may hold
//! values outside `[0, 9]` or of mixed sign; [`normalize`] then resolves every
//! overflow and borrow and recomputes the sign, which is the single place the
//! canonical-form invariants are re-established.

use crate::sign::Sign;

/// Position-wise sum of two canonical magnitudes with each operand's sign
/// applied as a per-digit polarity. The buffer is one digit longer than the
/// longer operand so normalization never reallocates for the final carry.
///
/// Opposite-sign operands produce mixed-sign raw digits; [`normalize`] turns
/// those into an ordinary subtraction result.
pub(crate) fn signed_sum(lhs: &[u8], lhs_sign: Sign, rhs: &[u8], rhs_sign: Sign) -> Vec<i64> {
    let len = lhs.len().max(rhs.len()) + 1;
    let mut sum = vec![0i64; len];
    for (i, slot) in sum.iter_mut().enumerate() {
        let l = lhs.get(i).copied().unwrap_or(0) as i64 * lhs_sign.polarity();
        let r = rhs.get(i).copied().unwrap_or(0) as i64 * rhs_sign.polarity();
        *slot = l + r;
    }
    sum
}

/// Grade-school product of two canonical magnitudes, each partial product
/// accumulated at its shifted position. Positions may exceed 9; the caller
/// normalizes. Signs are not involved, the caller applies the product sign.
pub(crate) fn raw_product(lhs: &[u8], rhs: &[u8]) -> Vec<i64> {
    let mut product = vec![0i64; lhs.len() + rhs.len()];
    for (i, &r) in rhs.iter().enumerate() {
        for (j, &l) in lhs.iter().enumerate() {
            product[i + j] += l as i64 * r as i64;
        }
    }
    product
}

/// Normalizes a raw digit buffer into a canonical magnitude and its sign.
///
/// Three passes:
/// 1. carry propagation with truncated division, leaving every digit in
///    `(-10, 10)` while preserving the represented value;
/// 2. dominant-sign extraction from the most significant nonzero digit,
///    negating the buffer when the value is negative;
/// 3. an ascending borrow pass that re-homogenizes digits opposing the
///    dominant sign, so every digit lands in `[0, 9]`.
///
/// Trailing (most significant) zeros are trimmed; an empty result is the
/// canonical zero.
pub(crate) fn normalize(mut raw: Vec<i64>) -> (Vec<u8>, Sign) {
    let mut carry = 0i64;
    for digit in raw.iter_mut() {
        let total = *digit + carry;
        *digit = total % 10;
        carry = total / 10;
    }
    while carry != 0 {
        raw.push(carry % 10);
        carry /= 10;
    }
    trim_zeros(&mut raw);

    let sign = match raw.last() {
        None => return (Vec::new(), Sign::Zero),
        Some(&digit) if digit < 0 => Sign::Negative,
        Some(_) => Sign::Positive,
    };
    if sign == Sign::Negative {
        for digit in raw.iter_mut() {
            *digit = -*digit;
        }
    }

    // After the carry pass the value is nonzero and its magnitude's leading
    // digit is positive, so borrowing can zero the top digit but never drive
    // it negative.
    for i in 0..raw.len() - 1 {
        if raw[i] < 0 {
            raw[i] += 10;
            raw[i + 1] -= 1;
        }
    }
    trim_zeros(&mut raw);

    let digits = raw.into_iter().map(|digit| digit as u8).collect();
    (digits, sign)
}

/// Floor-halves a canonical magnitude in place, most significant digit first,
/// pushing each remainder down as a ten. Used for bisection midpoints, which
/// keeps division free of any general-purpose division primitive.
pub(crate) fn halve_floor(digits: &mut Vec<u8>) {
    for i in (0..digits.len()).rev() {
        let old = digits[i];
        digits[i] = old / 2;
        if i > 0 {
            digits[i - 1] += (old % 2) * 10;
        }
    }
    trim_zeros(digits);
}

/// True when the buffer satisfies the canonical-form invariants: every digit
/// in `[0, 9]` and no redundant most-significant zero.
pub(crate) fn is_canonical(digits: &[u8]) -> bool {
    digits.iter().all(|&digit| digit <= 9) && digits.last() != Some(&0)
}

fn trim_zeros<T: Copy + PartialEq + From<u8>>(digits: &mut Vec<T>) {
    let zero = T::from(0u8);
    while digits.last() == Some(&zero) {
        digits.pop();
    }
}
