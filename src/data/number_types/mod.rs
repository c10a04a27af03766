//! # Number types
//!
//! Rational numbers of arbitrary precision, and the traits describing values that are not zero.
pub mod nonzero;
pub mod rational;
