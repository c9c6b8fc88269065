//! Boundary values of both types behind a common trait, for callers that are generic over
//! the two types. Inside the crate the inherent constants are used directly.

use crate::int128::Int128;
use crate::uint128::Uint128;

pub trait Limits: Copy {
	const MIN: Self;
	const MAX: Self;
	const BITS: u32;
	/// Number of value bits, excluding the sign.
	const DIGITS: u32;
	/// Number of decimal digits that always fit.
	const DIGITS10: u32;
	const IS_SIGNED: bool;
}

impl Limits for Uint128 {
	const MIN: Self = Uint128::MIN;
	const MAX: Self = Uint128::MAX;
	const BITS: u32 = 128;
	const DIGITS: u32 = 128;
	const DIGITS10: u32 = 38;
	const IS_SIGNED: bool = false;
}

impl Limits for Int128 {
	const MIN: Self = Int128::MIN;
	const MAX: Self = Int128::MAX;
	const BITS: u32 = 128;
	const DIGITS: u32 = 127;
	const DIGITS10: u32 = 38;
	const IS_SIGNED: bool = true;
}
