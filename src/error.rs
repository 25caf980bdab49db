use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by numeric parsing, expression evaluation and division.
///
/// All variants abort the current evaluation; none carries a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text does not match the signed-integer grammar
    /// (optional `+`/`-` followed by one or more decimal digits).
    #[error("'{0}' isn't a valid number")]
    InvalidLiteral(String),

    /// The formula contains an illegal character or does not reduce to a
    /// well-formed expression (unbalanced parentheses, stray operators).
    #[error("the expression '{0}' is invalid")]
    InvalidExpression(String),

    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The division bisection failed to stabilize within its step budget.
    /// The bounds bracket the quotient, so hitting this means an invariant
    /// of the search was broken.
    #[error("division bisection did not converge within {steps} steps")]
    BisectionDiverged { steps: usize },
}
