//! Bitwise and shift engine.

use crate::uint128::Uint128;

/// `Some(n)` when `amount` is a valid shift count for a 128-bit value.
#[inline]
pub const fn amount_in_range(amount: i64) -> Option<u32> {
	if amount >= 0 && amount < Uint128::BITS as i64 { Some(amount as u32) } else { None }
}

/// Logical left shift, `n < 128`.
#[inline]
pub const fn shl(a: Uint128, n: u32) -> Uint128 {
	debug_assert!(n < Uint128::BITS);
	if n == 0 {
		a
	} else if n < 64 {
		Uint128::from_parts((a.high << n) | (a.low >> (64 - n)), a.low << n)
	} else {
		Uint128::from_parts(a.low << (n - 64), 0)
	}
}

/// Logical right shift, `n < 128`.
#[inline]
pub const fn shr(a: Uint128, n: u32) -> Uint128 {
	debug_assert!(n < Uint128::BITS);
	if n == 0 {
		a
	} else if n < 64 {
		Uint128::from_parts(a.high >> n, (a.low >> n) | (a.high << (64 - n)))
	} else {
		Uint128::from_parts(0, a.high >> (n - 64))
	}
}

/// Arithmetic right shift of the two's-complement pattern `a`, `n < 128`.
#[inline]
pub const fn sar(a: Uint128, n: u32) -> Uint128 {
	debug_assert!(n < Uint128::BITS);
	let high = a.high as i64;
	if n == 0 {
		a
	} else if n < 64 {
		Uint128::from_parts((high >> n) as u64, (a.low >> n) | (a.high << (64 - n)))
	} else {
		Uint128::from_parts((high >> 63) as u64, (high >> (n - 64)) as u64)
	}
}

/// Sign fill of `a`: all ones when bit 127 is set, zero otherwise.
#[inline]
pub const fn sign_fill(a: Uint128) -> Uint128 {
	let fill = ((a.high as i64) >> 63) as u64;
	Uint128::from_parts(fill, fill)
}

#[inline]
pub const fn rotate_left(a: Uint128, amount: u32) -> Uint128 {
	let n = amount % Uint128::BITS;
	if n == 0 { a } else { or(shl(a, n), shr(a, Uint128::BITS - n)) }
}

#[inline]
pub const fn rotate_right(a: Uint128, amount: u32) -> Uint128 {
	let n = amount % Uint128::BITS;
	if n == 0 { a } else { or(shr(a, n), shl(a, Uint128::BITS - n)) }
}

//--------------------------------------------------------------------------------------------------
// limb-wise logic

#[inline]
pub const fn not(a: Uint128) -> Uint128 {
	Uint128::from_parts(!a.high, !a.low)
}

#[inline]
pub const fn and(a: Uint128, b: Uint128) -> Uint128 {
	Uint128::from_parts(a.high & b.high, a.low & b.low)
}

#[inline]
pub const fn or(a: Uint128, b: Uint128) -> Uint128 {
	Uint128::from_parts(a.high | b.high, a.low | b.low)
}

#[inline]
pub const fn xor(a: Uint128, b: Uint128) -> Uint128 {
	Uint128::from_parts(a.high ^ b.high, a.low ^ b.low)
}
