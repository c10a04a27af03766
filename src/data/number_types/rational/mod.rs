//! # Rational numbers
//!
//! Primary way to do arbitrary precision computation.
pub use big::Big as RationalBig;
pub use big::with_primitive::DivBy;

mod big;
mod macros;
mod parse;

/// A fraction, stored as a separate numerator and denominator.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}
