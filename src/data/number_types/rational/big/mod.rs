//! # Arbitrary precision rationals
//!
//! Values are always in canonical form: the denominator is positive and shares no factor greater
//! than one with the numerator. Zero is `0/1`. Because the form is unique, equality and hashing
//! can work on the fields directly.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

use log::debug;
use num::{BigInt, Integer, One, Zero};

use crate::data::number_types::nonzero::{Nonzero, NonzeroSign, NonzeroSigned};
use crate::data::number_types::rational::Rational;
use crate::error::InvalidArgument;

mod ops;
pub mod with_primitive;

/// Fraction of two big integers in canonical form.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Big {
    numerator: BigInt,
    denominator: BigInt,
}

impl Big {
    /// Create a new rational number.
    ///
    /// The sign is moved to the numerator and the fraction is reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// When the denominator is zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, InvalidArgument> {
        Self::from_parts(numerator.into(), denominator.into())
    }

    /// Create a rational number with denominator one.
    pub fn from_integer<N: Into<BigInt>>(numerator: N) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: One::one(),
        }
    }

    pub(crate) fn from_parts(
        numerator: BigInt,
        denominator: BigInt,
    ) -> Result<Self, InvalidArgument> {
        if !denominator.is_not_zero() {
            debug!("Rejecting fraction {}/0", numerator);
            return Err(InvalidArgument::zero_denominator(numerator));
        }

        let sign = NonzeroSigned::signum(&denominator);
        Ok(Self::reduce(sign.apply(numerator), sign.apply(denominator)))
    }

    /// Divide out the greatest common divisor.
    ///
    /// The denominator should already be positive.
    fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_not_zero() && NonzeroSigned::is_positive(&denominator));

        // Also well defined when the numerator is zero, the gcd is then the denominator itself.
        let gcd = numerator.gcd(&denominator);
        if gcd.is_one() {
            Self { numerator, denominator }
        } else {
            Self {
                numerator: numerator / &gcd,
                denominator: denominator / gcd,
            }
        }
    }

    /// Divide by another value.
    ///
    /// # Errors
    ///
    /// When `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, InvalidArgument> {
        Self::from_parts(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }

    /// Take the fraction apart.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }
}

impl Rational for Big {
    type Numerator = BigInt;
    type Denominator = BigInt;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl From<BigInt> for Big {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Big {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Big {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross multiplying keeps the direction.
        if self.denominator == other.denominator {
            self.numerator.cmp(&other.numerator)
        } else {
            let left = &self.numerator * &other.denominator;
            let right = &other.numerator * &self.denominator;
            left.cmp(&right)
        }
    }
}

impl Display for Big {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Nonzero for Big {
    fn is_not_zero(&self) -> bool {
        self.numerator.is_not_zero()
    }
}

impl NonzeroSigned for Big {
    fn signum(&self) -> NonzeroSign {
        NonzeroSigned::signum(&self.numerator)
    }
}

impl Zero for Big {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Big {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}
