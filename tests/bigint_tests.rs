use bigcalc::{BigInt, Error, Sign};
use num_bigint::BigInt as RefInt;
use num_traits::Zero;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::cmp::Ordering;
use std::str::FromStr;

const BASE_LITERAL: &str =
    "298371409847102398471902387409875890237456198612938746198237461892734689";

const CROSS_CHECK_LITERALS: &[&str] = &[
    "-7641982374698123764981273649812376",
    "+28710928374019238471029384790128374901283749012837418902347",
    "390485723094857203894572890347528903478905723409857238904750293847528903457",
];

fn big(text: &str) -> BigInt {
    text.parse().unwrap()
}

fn reference(text: &str) -> RefInt {
    RefInt::from_str(text).unwrap()
}

/// Renders a `BigInt` the way the reference renders: no leading `+`.
fn unsigned_string(value: &BigInt) -> String {
    let rendered = value.to_string();
    rendered
        .strip_prefix('+')
        .map(str::to_owned)
        .unwrap_or(rendered)
}

fn matches_reference(value: &BigInt, expected: &RefInt) -> bool {
    unsigned_string(value) == expected.to_string()
}

/// Builds a pair of equal operands, ours and the reference's, from raw
/// quickcheck digit material.
fn operand_pair(digits: &[u8], negative: bool) -> (BigInt, RefInt) {
    let mut literal = String::from(if negative { "-" } else { "+" });
    if digits.is_empty() {
        literal.push('0');
    }
    for &digit in digits {
        literal.push(char::from(b'0' + digit % 10));
    }
    (big(&literal), reference(&literal))
}

/// A deterministic operand hundreds of digits long.
fn huge(seed: u64, digits: usize, negative: bool) -> BigInt {
    let mut state = seed | 1;
    let mut literal = String::from(if negative { "-" } else { "+" });
    literal.push('1');
    for _ in 1..digits {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        literal.push(char::from(b'0' + (state >> 60) as u8 % 10));
    }
    big(&literal)
}

#[test]
fn cross_checked_operations_on_known_literals() {
    let base = big(BASE_LITERAL);
    let ref_base = reference(BASE_LITERAL);

    for literal in CROSS_CHECK_LITERALS {
        let value = big(literal);
        let ref_value = reference(literal);

        assert!(matches_reference(&(&base + &value), &(&ref_base + &ref_value)));
        assert!(matches_reference(&(&base - &value), &(&ref_base - &ref_value)));
        assert!(matches_reference(&(&base * &value), &(&ref_base * &ref_value)));
        assert!(matches_reference(
            &base.divide(&value).unwrap(),
            &(&ref_base / &ref_value),
        ));
        assert!(matches_reference(&-&value, &-&ref_value));
        assert_eq!(base.cmp(&value), ref_base.cmp(&ref_value));
    }
}

#[test]
fn known_quotient() {
    assert_eq!(
        big(BASE_LITERAL)
            .divide(&big("7641982374698123764981273649812376"))
            .unwrap(),
        big("39043718660616352083944663756788274583")
    );
}

#[test]
fn rejected_literals() {
    for text in [
        "This is invalid number",
        "8957209384572s0398457",
        "0189741230984710982347-",
        "0189741230984710982347+",
    ] {
        assert!(matches!(
            text.parse::<BigInt>(),
            Err(Error::InvalidLiteral(_))
        ));
    }
}

#[test]
fn division_by_zero() {
    assert_eq!(
        big(BASE_LITERAL).divide(&BigInt::zero()),
        Err(Error::DivisionByZero)
    );
}

#[test]
fn huge_operand_algebra() {
    let a = huge(0x9e3779b9, 300, false);
    let b = huge(0x51f15ead, 250, true);
    let c = huge(0x2545f491, 280, false);

    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&a * &b, &b * &a);
    assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
}

#[test]
fn huge_operand_division_is_floor_of_magnitudes() {
    let a = huge(0xdeadbeef, 320, false);
    let b = huge(0xfeedface, 110, false);

    let quotient = a.divide(&b).unwrap();
    let product = &quotient * &b;
    assert!(product <= a);
    assert!(&product + &b > a);
}

#[quickcheck]
fn qc_parse_format_round_trip(digits: Vec<u8>, negative: bool) -> bool {
    // The reference's rendering is canonical (no leading zeros), so it must
    // survive a parse/format round trip modulo the leading `+`.
    let (value, ref_value) = operand_pair(&digits, negative);
    let reparsed = big(&value.to_string());
    reparsed == value && unsigned_string(&reparsed) == ref_value.to_string()
}

#[quickcheck]
fn qc_add_matches_reference(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> bool {
    let (a, ref_a) = operand_pair(&a, a_neg);
    let (b, ref_b) = operand_pair(&b, b_neg);
    matches_reference(&(&a + &b), &(ref_a + ref_b))
}

#[quickcheck]
fn qc_sub_matches_reference(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> bool {
    let (a, ref_a) = operand_pair(&a, a_neg);
    let (b, ref_b) = operand_pair(&b, b_neg);
    matches_reference(&(&a - &b), &(ref_a - ref_b))
}

#[quickcheck]
fn qc_mul_matches_reference(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> bool {
    let (a, ref_a) = operand_pair(&a, a_neg);
    let (b, ref_b) = operand_pair(&b, b_neg);
    matches_reference(&(&a * &b), &(ref_a * ref_b))
}

#[quickcheck]
fn qc_divide_matches_reference(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> TestResult {
    let (a, ref_a) = operand_pair(&a, a_neg);
    let (b, ref_b) = operand_pair(&b, b_neg);
    if ref_b.is_zero() {
        return TestResult::discard();
    }
    // Both sides truncate toward zero.
    let quotient = match a.divide(&b) {
        Ok(quotient) => quotient,
        Err(_) => return TestResult::failed(),
    };
    TestResult::from_bool(matches_reference(&quotient, &(ref_a / ref_b)))
}

#[quickcheck]
fn qc_compare_matches_reference(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> bool {
    let (a, ref_a) = operand_pair(&a, a_neg);
    let (b, ref_b) = operand_pair(&b, b_neg);
    a.cmp(&b) == ref_a.cmp(&ref_b)
}

#[quickcheck]
fn qc_additive_identity(digits: Vec<u8>, negative: bool) -> bool {
    let (a, _) = operand_pair(&digits, negative);
    let zero = BigInt::zero();
    &a + &zero == a && &zero + &a == a
}

#[quickcheck]
fn qc_multiplicative_absorption(digits: Vec<u8>, negative: bool) -> bool {
    let (a, _) = operand_pair(&digits, negative);
    &a * &BigInt::zero() == BigInt::zero()
}

#[quickcheck]
fn qc_add_is_commutative_and_associative(
    a: Vec<u8>,
    a_neg: bool,
    b: Vec<u8>,
    b_neg: bool,
    c: Vec<u8>,
    c_neg: bool,
) -> bool {
    let (a, _) = operand_pair(&a, a_neg);
    let (b, _) = operand_pair(&b, b_neg);
    let (c, _) = operand_pair(&c, c_neg);
    &a + &b == &b + &a && &(&a + &b) + &c == &a + &(&b + &c)
}

#[quickcheck]
fn qc_sign_consistency(digits: Vec<u8>, negative: bool) -> TestResult {
    let (a, _) = operand_pair(&digits, negative);
    if a.is_zero() {
        return TestResult::discard();
    }
    let negated = -&a;
    let against_negation = a.cmp(&negated);
    let against_zero = a.cmp(&BigInt::zero());
    TestResult::from_bool(
        against_negation == against_zero
            && against_negation != Ordering::Equal
            && (&a * &negated).sign() == Sign::Negative,
    )
}

#[quickcheck]
fn qc_exact_multiples_divide_exactly(
    k: Vec<u8>,
    k_neg: bool,
    b: Vec<u8>,
    b_neg: bool,
) -> TestResult {
    let (k, _) = operand_pair(&k, k_neg);
    let (b, _) = operand_pair(&b, b_neg);
    if b.is_zero() {
        return TestResult::discard();
    }
    let product = &k * &b;
    TestResult::from_bool(product.divide(&b).unwrap() == k)
}

#[quickcheck]
fn qc_division_contract(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> TestResult {
    let (a, _) = operand_pair(&a, a_neg);
    let (b, _) = operand_pair(&b, b_neg);
    if b.is_zero() {
        return TestResult::discard();
    }
    let quotient = match a.divide(&b) {
        Ok(quotient) => quotient,
        Err(_) => return TestResult::failed(),
    };
    TestResult::from_bool((&quotient * &b).abs() <= a.abs())
}
