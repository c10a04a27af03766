//! # Reading rationals from text
//!
//! Accepts `n` and `n/d`, where both parts are decimal integers with an optional sign.
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use num::BigInt;

use crate::data::number_types::rational::RationalBig;
use crate::error::{InvalidArgument, Kind};

impl FromStr for RationalBig {
    type Err = InvalidArgument;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !text.contains('/') {
            return parse_integer(text, text).map(RationalBig::from_integer);
        }

        let (numerator, denominator) = text.split('/').collect_tuple()
            .ok_or_else(|| {
                debug!("Rejecting \"{}\": expected exactly one '/'", text);
                malformed(text)
            })?;
        let numerator = parse_integer(numerator, text)?;
        let denominator = parse_integer(denominator, text)?;

        RationalBig::from_parts(numerator, denominator)
    }
}

/// Parse a decimal integer literal that is part of `text`.
///
/// Only an optional leading sign followed by at least one digit is allowed, so whitespace,
/// underscores and radix prefixes are all rejected.
fn parse_integer(part: &str, text: &str) -> Result<BigInt, InvalidArgument> {
    let digits = part.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        debug!("Rejecting \"{}\" in \"{}\": not an integer literal", part, text);
        return Err(malformed(text));
    }

    part.parse().map_err(|error| InvalidArgument::wrap_other(error, expectation(text)))
}

fn malformed(text: &str) -> InvalidArgument {
    InvalidArgument::new(Kind::MalformedText, expectation(text))
}

fn expectation(text: &str) -> String {
    format!("Expecting rational in the form of 'n/d' or 'n', was '{}'", text)
}
