//! # Rationals
//!
//! Exact fractions of arbitrary precision, always kept in canonical form: a positive denominator
//! that shares no factor with the numerator.
//!
//! ```
//! use rationals::RationalBig;
//!
//! let half = RationalBig::new(1, 2)?;
//! let third: RationalBig = "1/3".parse()?;
//! assert_eq!(half + third, RationalBig::new(5, 6)?);
//! # Ok::<(), rationals::InvalidArgument>(())
//! ```
pub use data::number_types::rational::{DivBy, Rational, RationalBig};
pub use error::InvalidArgument;

pub mod data;
pub mod error;
