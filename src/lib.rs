//! Arbitrary-precision signed integer arithmetic paired with an evaluator
//! for `+ - * /` formulas over integers of unbounded size.
//!
//! Values are immutable [`BigInt`]s: a sign tag plus decimal digits held in
//! canonical form. Every arithmetic result passes through a single
//! normalization routine that resolves carries, borrows and redundant
//! leading zeros, and division locates its quotient by bisection using only
//! addition, halving and multiplication.
//!
//! # Quick Start
//!
//! Evaluate a formula end to end:
//!
//! ```rust
//! use bigcalc::evaluate;
//!
//! let result = evaluate("12 - (30 + 13) * 10").unwrap();
//! assert_eq!(result.to_string(), "12 - (30 + 13) * 10 = -418");
//! ```
//!
//! Or work with the integers directly:
//!
//! ```rust
//! use bigcalc::BigInt;
//!
//! let a: BigInt = "298371409847102398471902387409875890237".parse().unwrap();
//! let b: BigInt = "-7641982374698123764981273649812376".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "+298363767864727700348137406136226077861");
//! ```
//!
//! Division truncates toward zero and is surfaced as approximate by the
//! evaluator (`~` instead of `=`):
//!
//! ```rust
//! use bigcalc::evaluate;
//!
//! assert_eq!(evaluate("-7 / 2").unwrap().to_string(), "-7 / 2 ~ -3");
//! ```

mod bigint;
mod digits;
mod error;
mod eval;
mod sign;

pub use bigint::BigInt;
pub use error::{Error, Result};
pub use eval::{Evaluation, evaluate};
pub use sign::Sign;
