use std::cmp::Ordering;
use std::ops::Neg;

use num::{BigInt, Zero};

use crate::data::number_types::nonzero::Nonzero;

/// A signed number that can have a nonzero value.
pub trait NonzeroSigned: Nonzero {
    /// Whether the value is positive or negative.
    ///
    /// Should only be called on values that are not zero.
    fn signum(&self) -> Sign;
    /// Whether `x > 0`.
    fn is_positive(&self) -> bool {
        self.signum() == Sign::Positive
    }
    /// Whether `x < 0`.
    fn is_negative(&self) -> bool {
        self.signum() == Sign::Negative
    }
}

/// Sign of a nonzero value.
///
/// Existing `Sign` types, such as the one in `num::bigint`, typically have a third value for the
/// sign of 0. Working with that type creates match cases that should never be possible.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Sign {
    /// `x > 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// Give a value this sign, assuming it was positive.
    pub fn apply<T: Neg<Output = T>>(self, value: T) -> T {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}

impl NonzeroSigned for BigInt {
    fn signum(&self) -> Sign {
        debug_assert!(self.is_not_zero());

        match self.cmp(&Self::zero()) {
            Ordering::Less => Sign::Negative,
            Ordering::Greater => Sign::Positive,
            Ordering::Equal => unreachable!("Should only be used on nonzero values."),
        }
    }
}
