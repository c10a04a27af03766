/// Shorthand for creating a rational number in tests.
///
/// Panics when the denominator is zero.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::RationalBig::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalBig::new($numer, $denom).unwrap()
    };
}
