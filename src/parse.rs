//! Text input.
//!
//! The digits are validated first, then folded in limb-sized segments: every segment is
//! parsed with native 64-bit arithmetic and merged into the accumulator with one 128-bit
//! multiply-add.

use crate::error::{self, Error};
use crate::fmt::chunk;
use crate::int128::Int128;
use crate::uint128::Uint128;
use std::str::FromStr;

fn digit_value(c: u8) -> u8 {
	match c {
		b'0'..=b'9' => c - b'0',
		b'a'..=b'z' => c - b'a' + 10,
		b'A'..=b'Z' => c - b'A' + 10,
		_ => u8::MAX,
	}
}

/// Splits off the sign and checks the digits.
///
/// Returns:
///     (negative, digits)
fn split_sign(text: &str, radix: u32, allow_minus: bool) -> Result<(bool, &[u8]), Error> {
	error::assert((2..=36).contains(&radix), || Error::new_invalid_radix("from_str_radix: radix must be in 2..=36"))?;

	let bytes = text.as_bytes();
	error::assert(!bytes.is_empty(), || Error::new_empty("from_str: empty string"))?;

	let (neg, digits) = match bytes[0] {
		b'+' => (false, &bytes[1..]),
		b'-' if allow_minus => (true, &bytes[1..]),
		_ => (false, bytes),
	};
	error::assert(!digits.is_empty(), || Error::new_invalid_digit("from_str: no digits found"))?;

	for &c in digits {
		error::assert((digit_value(c) as u32) < radix, || Error::new_invalid_digit("from_str: invalid digit"))?;
	}

	Ok((neg, digits))
}

/// The magnitude of the digits, `None` if it doesn't fit 128 bits.
fn fold_digits(digits: &[u8], radix: u32) -> Option<Uint128> {
	let (big, per_chunk) = chunk(radix);
	let big = Uint128::from_u64(big);
	let radix = radix as u64;

	let parse_segment = |segment: &[u8]| segment.iter().fold(0u64, |acc, &c| acc * radix + digit_value(c) as u64);

	let first = match digits.len() % per_chunk {
		0 => per_chunk.min(digits.len()),
		n => n,
	};
	let mut acc = Uint128::from_u64(parse_segment(&digits[..first]));

	for segment in digits[first..].chunks(per_chunk) {
		let (low, high) = acc.widening_mul(big);
		if !high.is_zero() {
			return None;
		}
		acc = low.checked_add(Uint128::from_u64(parse_segment(segment)))?;
	}

	Some(acc)
}

impl Uint128 {
	/// Parses an optionally `+` prefixed number in `radix`.
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
		let parsed = split_sign(text, radix, false)
			.and_then(|(_, digits)| fold_digits(digits, radix).ok_or_else(|| Error::new_pos_overflow("from_str: number too large")));
		if let Err(err) = &parsed {
			log::debug!("rejected {text:?} in radix {radix}: {err}");
		}
		parsed
	}
}

impl Int128 {
	/// Parses an optionally signed number in `radix`.
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
		let parsed = split_sign(text, radix, true).and_then(|(neg, digits)| {
			let magnitude = fold_digits(digits, radix);
			if neg {
				// MIN has magnitude 2**127, one past MAX.
				match magnitude {
					Some(m) if m.const_le(Int128::MIN.unsigned_abs()) => Ok(m.wrapping_neg().as_signed()),
					_ => Err(Error::new_neg_overflow("from_str: number too small")),
				}
			} else {
				match magnitude {
					Some(m) if m.const_le(Int128::MAX.as_unsigned()) => Ok(m.as_signed()),
					_ => Err(Error::new_pos_overflow("from_str: number too large")),
				}
			}
		});
		if let Err(err) = &parsed {
			log::debug!("rejected {text:?} in radix {radix}: {err}");
		}
		parsed
	}
}

impl FromStr for Uint128 {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Error> {
		Self::from_str_radix(text, 10)
	}
}

impl FromStr for Int128 {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Error> {
		Self::from_str_radix(text, 10)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use crate::testutil;
	use rand::Rng;

	fn kind<T: std::fmt::Debug>(r: Result<T, Error>) -> ErrorKind {
		r.unwrap_err().kind
	}

	#[test]
	fn test_decimal() {
		assert_eq!("0".parse::<Uint128>(), Ok(Uint128::ZERO));
		assert_eq!("+17".parse::<Uint128>(), Ok(Uint128::from(17u64)));
		assert_eq!(u128::MAX.to_string().parse::<Uint128>(), Ok(Uint128::MAX));
		assert_eq!("00000000000000000000000000000000000000000000000042".parse::<Uint128>(), Ok(Uint128::from(42u64)));
		assert_eq!(i128::MIN.to_string().parse::<Int128>(), Ok(Int128::MIN));
		assert_eq!(i128::MAX.to_string().parse::<Int128>(), Ok(Int128::MAX));
		assert_eq!("-100".parse::<Int128>(), Ok(Int128::from(-100i64)));
		assert_eq!("-0".parse::<Int128>(), Ok(Int128::ZERO));
	}

	#[test]
	fn test_errors_match_native() {
		assert_eq!(kind("".parse::<Uint128>()), ErrorKind::Empty);
		assert_eq!(kind("+".parse::<Uint128>()), ErrorKind::InvalidDigit);
		assert_eq!(kind("-".parse::<Int128>()), ErrorKind::InvalidDigit);
		assert_eq!(kind("-1".parse::<Uint128>()), ErrorKind::InvalidDigit);
		assert_eq!(kind("12a".parse::<Uint128>()), ErrorKind::InvalidDigit);
		assert_eq!(kind(" 1".parse::<Int128>()), ErrorKind::InvalidDigit);
		assert_eq!(kind("340282366920938463463374607431768211456".parse::<Uint128>()), ErrorKind::PosOverflow);
		assert_eq!(kind("170141183460469231731687303715884105728".parse::<Int128>()), ErrorKind::PosOverflow);
		assert_eq!(kind("-170141183460469231731687303715884105729".parse::<Int128>()), ErrorKind::NegOverflow);
		assert_eq!(kind("9".repeat(100).parse::<Uint128>()), ErrorKind::PosOverflow);
		assert_eq!(kind(Uint128::from_str_radix("1", 37)), ErrorKind::InvalidRadix);
		assert_eq!(kind(Int128::from_str_radix("1", 1)), ErrorKind::InvalidRadix);
	}

	#[test]
	fn test_radix() {
		assert_eq!(Uint128::from_str_radix("ff", 16), Ok(Uint128::from(255u64)));
		assert_eq!(Uint128::from_str_radix("FF", 16), Ok(Uint128::from(255u64)));
		assert_eq!(Uint128::from_str_radix("z", 36), Ok(Uint128::from(35u64)));
		assert_eq!(Uint128::from_str_radix(&"1".repeat(128), 2), Ok(Uint128::MAX));
		assert_eq!(kind(Uint128::from_str_radix(&"1".repeat(129), 2)), ErrorKind::PosOverflow);
		assert_eq!(kind(Uint128::from_str_radix("2", 2)), ErrorKind::InvalidDigit);
		assert_eq!(Int128::from_str_radix("-80000000000000000000000000000000", 16), Ok(Int128::MIN));
	}

	#[test]
	fn test_against_native() {
		let mut rng = testutil::rng();
		for _ in 0..2000 {
			let a = testutil::operand(&mut rng);
			let radix = rng.gen_range(2..=36u32);
			let text = a.to_str_radix(radix).unwrap();
			assert_eq!(Uint128::from_str_radix(&text, radix), Ok(a));

			let s = testutil::signed_operand(&mut rng);
			let text = s.to_str_radix(radix).unwrap();
			assert_eq!(Int128::from_str_radix(&text, radix), Ok(s));
			assert_eq!(i128::from_str_radix(&text, radix).map(Int128::from).ok(), Some(s));
		}
	}
}
