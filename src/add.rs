//! Additive engine: two-limb add/sub with carry and borrow propagation.
//!
//! The same bit-level algorithms serve both types, so `Int128` routes through here by
//! reinterpreting its bits.

use crate::limb;
use crate::uint128::Uint128;

/// Returns:
///     (value, carry)
/// Where:
///     value = (a + b) % 2**128
///     carry = (a + b) > Uint128::MAX
#[inline]
pub const fn overflowing_add(a: Uint128, b: Uint128) -> (Uint128, bool) {
	let (low, carry) = limb::addc(a.low, b.low, false);
	let (high, carry) = limb::addc(a.high, b.high, carry);
	(Uint128::from_parts(high, low), carry)
}

/// Returns:
///     (value, borrow)
/// Where:
///     value = (a - b) % 2**128
///     borrow = a < b
#[inline]
pub const fn overflowing_sub(a: Uint128, b: Uint128) -> (Uint128, bool) {
	let (low, borrow) = limb::subb(a.low, b.low, false);
	let (high, borrow) = limb::subb(a.high, b.high, borrow);
	(Uint128::from_parts(high, low), borrow)
}

/// If `condition`, return 2's complement of `a`. Otherwise, return `a` unchanged.
#[inline]
pub const fn neg_if(a: Uint128, condition: bool) -> Uint128 {
	if condition { wrapping_neg(a) } else { a }
}

#[inline]
pub const fn wrapping_neg(a: Uint128) -> Uint128 {
	let (low, borrow) = a.low.overflowing_neg();
	let high = (!a.high).wrapping_add(!borrow as u64);
	Uint128::from_parts(high, low)
}

/// Calculates:
///     negative = a < b
///     value = abs(a - b)
///     return (value, negative)
#[inline]
pub const fn sub_abs(a: Uint128, b: Uint128) -> (Uint128, bool) {
	let (r, borrow) = overflowing_sub(a, b);
	(neg_if(r, borrow), borrow)
}

//--------------------------------------------------------------------------------------------------

/// Wrapping add through the carry flag of the target.
#[inline]
pub fn add_nonconst(a: Uint128, b: Uint128) -> Uint128 {
	let (low, carry) = limb::addc_nonconst(a.low, b.low, false);
	let (high, _) = limb::addc_nonconst(a.high, b.high, carry);
	Uint128::from_parts(high, low)
}

/// Wrapping sub through the borrow flag of the target.
#[inline]
pub fn sub_nonconst(a: Uint128, b: Uint128) -> Uint128 {
	let (low, borrow) = limb::subb_nonconst(a.low, b.low, false);
	let (high, _) = limb::subb_nonconst(a.high, b.high, borrow);
	Uint128::from_parts(high, low)
}
