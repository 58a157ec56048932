//! Common parsing utilities for SDP attributes
//!
//! This module provides reusable parsers that are shared among multiple
//! attribute parsers.

use std::str::FromStr;

use nom::{
    character::complete::{digit1, space0},
    sequence::preceded,
    IResult,
};

/// Parses a run of decimal digits, skipping leading blanks
pub fn decimal_digits(input: &str) -> IResult<&str, &str> {
    preceded(space0, digit1)(input)
}

/// Parse the leading integer of a token, ignoring anything after the digits.
///
/// Mirrors how permissive SDP stacks read numeric fields: `"48000"` and
/// `"48000abc"` both give 48000, while `""`, `"abc"` or a value that does
/// not fit the target type give `None`.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::common::leading_int;
///
/// assert_eq!(leading_int::<u32>("90000"), Some(90000));
/// assert_eq!(leading_int::<u16>(" 5000;foo"), Some(5000));
/// assert_eq!(leading_int::<u8>("300"), None);
/// assert_eq!(leading_int::<u32>("x1"), None);
/// ```
pub fn leading_int<T: FromStr>(input: &str) -> Option<T> {
    let (_, digits) = decimal_digits(input).ok()?;
    digits.parse().ok()
}

/// The text after the first space of a line, or `""` if it has none
pub fn after_first_space(line: &str) -> &str {
    line.split_once(' ').map_or("", |(_, rest)| rest)
}

/// Byte-offset substring that tolerates short input, like JavaScript's
/// `substring(n)`
pub fn tail_from(line: &str, offset: usize) -> &str {
    line.get(offset..).unwrap_or_default()
}
