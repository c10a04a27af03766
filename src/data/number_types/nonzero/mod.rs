//! # Nonzero values
//!
//! Traits for values that are known, or need to be checked, not to be zero.
use num::{BigInt, Zero};

pub use sign::NonzeroSigned as NonzeroSigned;
pub use sign::Sign as NonzeroSign;

pub mod sign;

/// Implementors should not be zero.
///
/// A denominator is the main example: it must be checked once, at construction, after which the
/// rest of the code can rely on it. Types that can represent zero implement this trait by
/// checking, types that can't would simply return `true`.
pub trait Nonzero {
    /// Whether the value is not equal to zero.
    fn is_not_zero(&self) -> bool;
}

impl Nonzero for BigInt {
    fn is_not_zero(&self) -> bool {
        !Zero::is_zero(self)
    }
}
