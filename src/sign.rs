use std::cmp::Ordering;

/// Sign of a [`BigInt`](crate::BigInt) value.
///
/// `Zero` is its own sign rather than a special case of `Positive`, so the
/// canonical zero (empty digit sequence) is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Zero,
    Negative,
}

impl Sign {
    /// Flips `Positive` and `Negative`; `Zero` is unchanged.
    pub fn invert(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Zero => Sign::Zero,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product, with `Zero` absorbing.
    pub fn multiply(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (lhs, rhs) if lhs == rhs => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    /// Per-digit polarity: `+1`, `0` or `-1`.
    pub(crate) fn polarity(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Zero => 0,
            Sign::Negative => -1,
        }
    }

    /// Converts to an [`Ordering`] against zero.
    pub fn ordering(self) -> Ordering {
        match self {
            Sign::Positive => Ordering::Greater,
            Sign::Zero => Ordering::Equal,
            Sign::Negative => Ordering::Less,
        }
    }
}
