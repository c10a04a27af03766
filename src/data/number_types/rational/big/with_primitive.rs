//! # Interactions with fixed size integers
use num::{BigInt, One};

use crate::error::InvalidArgument;

use super::Big;

/// Build a fraction from two integers of the same type, as in `1.div_by(2)`.
pub trait DivBy<Rhs = Self> {
    /// Divide `self` by `denominator` without loss of precision.
    ///
    /// # Errors
    ///
    /// When the denominator is zero.
    fn div_by(self, denominator: Rhs) -> Result<Big, InvalidArgument>;
}

impl DivBy for BigInt {
    fn div_by(self, denominator: Self) -> Result<Big, InvalidArgument> {
        Big::from_parts(self, denominator)
    }
}

macro_rules! define_interactions {
    ($t:ty) => {
        impl From<$t> for Big {
            fn from(value: $t) -> Self {
                Self::from_integer(value)
            }
        }

        impl From<&$t> for Big {
            fn from(value: &$t) -> Self {
                Self::from(*value)
            }
        }

        impl DivBy for $t {
            fn div_by(self, denominator: Self) -> Result<Big, InvalidArgument> {
                Big::new(self, denominator)
            }
        }

        impl PartialEq<$t> for Big {
            fn eq(&self, other: &$t) -> bool {
                self.denominator.is_one() && self.numerator == BigInt::from(*other)
            }
        }
    }
}

define_interactions!(i8);
define_interactions!(i16);
define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
define_interactions!(u8);
define_interactions!(u16);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(u128);
define_interactions!(usize);

#[cfg(test)]
mod test {
    use num::BigInt;

    use crate::data::number_types::rational::{DivBy, Rational, RationalBig};
    use crate::error::Kind;

    #[test]
    fn div_by() {
        assert_eq!(1_i32.div_by(2).unwrap(), RationalBig::new(1, 2).unwrap());
        assert_eq!(2_000_000_000_i64.div_by(4_000_000_000).unwrap(), 1_i32.div_by(2).unwrap());
        assert_eq!(6_u8.div_by(4).unwrap().to_string(), "3/2");
        assert_eq!(1_i32.div_by(0).unwrap_err().kind(), Kind::ZeroDenominator);
    }

    #[test]
    fn div_by_big() {
        let numerator: BigInt = "912016490186296920119201192141970416029".parse().unwrap();
        let denominator: BigInt = "1824032980372593840238402384283940832058".parse().unwrap();
        assert_eq!(numerator.div_by(denominator).unwrap(), 1_i32.div_by(2).unwrap());
    }

    #[test]
    fn from() {
        let value = RationalBig::from(-7_i64);
        assert_eq!(value.numerator(), &BigInt::from(-7));
        assert_eq!(value.denominator(), &BigInt::from(1));
        assert_eq!(RationalBig::from(&3_u32), RationalBig::new(3, 1).unwrap());
    }

    #[test]
    fn eq() {
        assert_eq!(RationalBig::new(6, 3).unwrap(), 2_i32);
        assert_eq!(RationalBig::new(0, 3).unwrap(), 0_u64);
        assert_ne!(RationalBig::new(5, 2).unwrap(), 2_i32);
        assert_ne!(RationalBig::new(-2, 1).unwrap(), 2_i8);
    }
}
