//! Text output.
//!
//! Digits come out one limb-sized chunk at a time: each paired division by the largest
//! power of the radix that fits a limb yields a whole chunk of digits in its remainder.

use crate::div;
use crate::error::{self, Error};
use crate::int128::Int128;
use crate::uint128::Uint128;
use arrayvec::{ArrayString, ArrayVec};
use std::fmt;

/// Enough for 128 binary digits.
pub type DigitBuf = ArrayString<128>;

/// Largest power of `radix` that fits a limb, and its exponent.
pub(crate) const fn chunk(radix: u32) -> (u64, usize) {
	let radix = radix as u64;
	let mut big = radix;
	let mut digits = 1;
	while let Some(next) = big.checked_mul(radix) {
		big = next;
		digits += 1;
	}
	(big, digits)
}

fn digit_char(d: u8, upper: bool) -> char {
	match d {
		0..=9 => (b'0' + d) as char,
		_ if upper => (b'A' + d - 10) as char,
		_ => (b'a' + d - 10) as char,
	}
}

/// Digits of `value` in `radix`, most significant first, no prefix.
/// Requires `2 <= radix <= 36`.
pub fn digits(value: Uint128, radix: u32, upper: bool) -> DigitBuf {
	debug_assert!((2..=36).contains(&radix));
	let (big, per_chunk) = chunk(radix);
	let divisor = Uint128::from_u64(big);
	let radix = radix as u64;

	// Least significant digit first.
	let mut rev = ArrayVec::<u8, 128>::new();
	let mut value = value;
	while value.high != 0 || value.low >= big {
		let div::DivRem { quot, rem } = div::div_rem_nonconst(value, divisor);
		let mut rem = rem.low;
		for _ in 0..per_chunk {
			rev.push((rem % radix) as u8);
			rem /= radix;
		}
		value = quot;
	}
	let mut rest = value.low;
	loop {
		rev.push((rest % radix) as u8);
		rest /= radix;
		if rest == 0 {
			break;
		}
	}

	let mut out = DigitBuf::new();
	for &d in rev.iter().rev() {
		out.push(digit_char(d, upper));
	}
	out
}

impl Uint128 {
	/// The value in `radix` with lowercase letters, for radixes the format traits don't cover.
	pub fn to_str_radix(self, radix: u32) -> Result<String, Error> {
		error::assert((2..=36).contains(&radix), || Error::new_invalid_radix("radix must be in 2..=36"))?;
		Ok(digits(self, radix, false).to_string())
	}
}

impl Int128 {
	/// The value in `radix` with a leading `-` when negative.
	pub fn to_str_radix(self, radix: u32) -> Result<String, Error> {
		error::assert((2..=36).contains(&radix), || Error::new_invalid_radix("radix must be in 2..=36"))?;
		let magnitude = digits(self.unsigned_abs(), radix, false);
		Ok(if self.is_negative() { format!("-{magnitude}") } else { magnitude.to_string() })
	}
}

//--------------------------------------------------------------------------------------------------

impl fmt::Display for Uint128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "", &digits(*self, 10, false))
	}
}

impl fmt::Display for Int128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &digits(self.unsigned_abs(), 10, false))
	}
}

/// Hex, octal and binary print the bit pattern, so a negative `Int128` shows its two's
/// complement like the native types do.
macro_rules! impl_radix_fmt {
	($Trait:ident, $radix:expr, $prefix:expr, $upper:expr) => {
		impl fmt::$Trait for Uint128 {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.pad_integral(true, $prefix, &digits(*self, $radix, $upper))
			}
		}

		impl fmt::$Trait for Int128 {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.pad_integral(true, $prefix, &digits(self.as_unsigned(), $radix, $upper))
			}
		}
	};
}

impl_radix_fmt!(LowerHex, 16, "0x", false);
impl_radix_fmt!(UpperHex, 16, "0x", true);
impl_radix_fmt!(Octal, 8, "0o", false);
impl_radix_fmt!(Binary, 2, "0b", false);

macro_rules! impl_debug {
	($($ty:ty),*) => {
		$(
			impl fmt::Debug for $ty {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					fmt::Display::fmt(self, f)
				}
			}
		)*
	};
}

impl_debug!(Uint128, Int128);
