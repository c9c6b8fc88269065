//! Operand generators shared by the unit tests.

use crate::int128::Int128;
use crate::uint128::Uint128;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rng() -> StdRng {
	StdRng::seed_from_u64(0x5eed_1280_dead_beef)
}

/// A random value whose significant width falls in one of the division classes:
/// 32-bit, 64-bit, 96-bit or full 128-bit, picked with equal probability.
pub fn operand(rng: &mut StdRng) -> Uint128 {
	let bits = match rng.gen_range(0..4u32) {
		0 => 32,
		1 => 64,
		2 => 96,
		_ => 128,
	};
	let value: u128 = rng.r#gen();
	let value = if bits == 128 { value } else { value & ((1u128 << bits) - 1) };
	// Shrink now and then so that values near a class boundary show up too.
	let shrink = if rng.gen_bool(0.25) { rng.gen_range(0..32u32) } else { 0 };
	Uint128::from(value >> shrink)
}

/// Nonzero variant of [`operand`].
pub fn divisor(rng: &mut StdRng) -> Uint128 {
	loop {
		let v = operand(rng);
		if !v.is_zero() {
			return v;
		}
	}
}

/// A divisor with a nonzero high limb.
pub fn wide_divisor(rng: &mut StdRng) -> Uint128 {
	let high: u64 = rng.r#gen::<u64>() >> rng.gen_range(0..64u32);
	Uint128::from_parts(high.max(1), rng.r#gen())
}

pub fn signed_operand(rng: &mut StdRng) -> Int128 {
	let v = operand(rng).as_signed();
	if rng.gen_bool(0.5) { v.wrapping_neg() } else { v }
}

pub fn signed_divisor(rng: &mut StdRng) -> Int128 {
	divisor(rng).as_signed()
}
