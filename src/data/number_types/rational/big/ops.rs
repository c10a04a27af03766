//! # Field operations
//!
//! Each operation is implemented once on references; the owned variants forward to it.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use super::Big;

impl Neg for &Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        // Negating the numerator keeps the fraction in canonical form.
        Big {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        Big {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Add<&Big> for &Big {
    type Output = Big;

    fn add(self, rhs: &Big) -> Self::Output {
        Big::reduce(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Big> for &Big {
    type Output = Big;

    fn sub(self, rhs: &Big) -> Self::Output {
        Big::reduce(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Big> for &Big {
    type Output = Big;

    fn mul(self, rhs: &Big) -> Self::Output {
        Big::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div<&Big> for &Big {
    type Output = Big;

    /// # Panics
    ///
    /// When dividing by zero. Use `Big::try_div` to get an error instead.
    fn div(self, rhs: &Big) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("Division by zero: {}", error),
        }
    }
}

macro_rules! forward_owned {
    ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident) => {
        impl $operation<Big> for Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $operation::$method(&self, &rhs)
            }
        }

        impl $operation<&Big> for Big {
            type Output = Big;

            fn $method(self, rhs: &Big) -> Self::Output {
                $operation::$method(&self, rhs)
            }
        }

        impl $operation<Big> for &Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $operation::$method(self, &rhs)
            }
        }

        impl $assign_operation<Big> for Big {
            fn $assign_method(&mut self, rhs: Big) {
                *self = $operation::$method(&*self, &rhs);
            }
        }

        impl $assign_operation<&Big> for Big {
            fn $assign_method(&mut self, rhs: &Big) {
                *self = $operation::$method(&*self, rhs);
            }
        }
    }
}

forward_owned!(Add, add, AddAssign, add_assign);
forward_owned!(Sub, sub, SubAssign, sub_assign);
forward_owned!(Mul, mul, MulAssign, mul_assign);
forward_owned!(Div, div, DivAssign, div_assign);

impl Sum for Big {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Big::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Big> for Big {
    fn sum<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Big::zero(), |total, value| total + value)
    }
}

impl Product for Big {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Big::one(), |total, value| total * value)
    }
}

impl<'a> Product<&'a Big> for Big {
    fn product<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Big::one(), |total, value| total * value)
    }
}
