//! Conversions between sequences of integers, floats, bytes, and strings.
//!
//! The integer conversions are total and follow Rust's `as` casts: bytes keep
//! the low eight bits, unsigned values reinterpret the two's-complement bits.
//! The string parsers are not total; they stop at the first element that
//! doesn't parse and report it as a [`ConvertError`].

use crate::error::{ConvertError, Result};
use std::fmt::Display;
use std::num::ParseIntError;

/// Returns the low eight bits of each element of `a`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ints_to_bytes(a: &[i64]) -> Vec<u8> {
    a.iter().map(|&n| n as u8).collect()
}

/// Returns the `f64` nearest to each element of `a`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ints_to_floats(a: &[i64]) -> Vec<f64> {
    a.iter().map(|&n| n as f64).collect()
}

/// Returns each element of `a` reinterpreted as an unsigned integer, so `-1`
/// becomes `u64::MAX`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn ints_to_uints(a: &[i64]) -> Vec<u64> {
    a.iter().map(|&n| n as u64).collect()
}

/// Returns the `Display` text of each element of `a`.
#[must_use]
pub fn to_strings<T: Display>(a: &[T]) -> Vec<String> {
    a.iter().map(ToString::to_string).collect()
}

/// Returns the UTF-8 bytes of each element of `a`.
#[must_use]
pub fn to_byte_strings<S: AsRef<str>>(a: &[S]) -> Vec<Vec<u8>> {
    a.iter().map(|s| s.as_ref().as_bytes().to_vec()).collect()
}

/// Parses each element of `a` as a signed integer in `radix`.
///
/// A `radix` of 0 takes the base from the element's prefix (after an optional
/// sign): `0x` for hexadecimal, `0o` or a bare leading `0` for octal, `0b` for
/// binary, and decimal otherwise.
pub fn parse_ints<S: AsRef<str>>(a: &[S], radix: u32) -> Result<Vec<i64>> {
    parse_each(a, radix, i64::from_str_radix)
}

/// Parses each element of `a` as an unsigned integer in `radix`, with the
/// same prefix rules as [`parse_ints`].
pub fn parse_uints<S: AsRef<str>>(a: &[S], radix: u32) -> Result<Vec<u64>> {
    parse_each(a, radix, u64::from_str_radix)
}

/// Parses each element of `a` as a decimal or scientific-notation float.
/// `inf`, `infinity`, and `nan` (in any case, optionally signed) are accepted.
pub fn parse_floats<S: AsRef<str>>(a: &[S]) -> Result<Vec<f64>> {
    let mut b = Vec::with_capacity(a.len());
    for (index, s) in a.iter().enumerate() {
        let s = s.as_ref();
        let f: f64 = s.parse().map_err(|source| ConvertError::Float {
            index,
            input: s.to_string(),
            source,
        })?;
        b.push(f);
    }
    Ok(b)
}

fn parse_each<S: AsRef<str>, N>(
    a: &[S],
    radix: u32,
    from_str_radix: fn(&str, u32) -> std::result::Result<N, ParseIntError>,
) -> Result<Vec<N>> {
    if radix != 0 && !(2..=36).contains(&radix) {
        return Err(ConvertError::InvalidRadix { radix });
    }
    let mut b = Vec::with_capacity(a.len());
    for (index, s) in a.iter().enumerate() {
        let s = s.as_ref();
        let (digits, base) = with_base(s, radix);
        let n = from_str_radix(&digits, base).map_err(|source| ConvertError::Int {
            index,
            input: s.to_string(),
            radix,
            source,
        })?;
        b.push(n);
    }
    Ok(b)
}

/// Returns the text to hand to `from_str_radix`, and the base to use. For a
/// nonzero `radix` that's just `s` and `radix`; for 0 the prefix is stripped
/// and decides the base.
fn with_base(s: &str, radix: u32) -> (String, u32) {
    if radix != 0 {
        return (s.to_string(), radix);
    }
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'+' | b'-') => s.split_at(1),
        _ => ("", s),
    };
    let (digits, base) = if let Some(hex) = strip_prefix_ignoring_case(unsigned, "0x") {
        (hex, 16)
    } else if let Some(oct) = strip_prefix_ignoring_case(unsigned, "0o") {
        (oct, 8)
    } else if let Some(bin) = strip_prefix_ignoring_case(unsigned, "0b") {
        (bin, 2)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (&unsigned[1..], 8)
    } else {
        (unsigned, 10)
    };
    // A sign after the prefix ("0x-5") isn't a number. The prefix itself is
    // never a valid digit string in `base`, so keeping it gets the text rejected.
    if digits.starts_with(['+', '-']) {
        return (s.to_string(), base);
    }
    (format!("{sign}{digits}"), base)
}

fn strip_prefix_ignoring_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}
