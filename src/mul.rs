//! Multiplicative engine.
//!
//! Both operands are split into four 32-bit digits and multiplied with Knuth's Algorithm M.
//! `wrapping_mul` keeps only the columns that land in the low 128 bits; `widening_mul` keeps
//! all eight digits of the product and is what overflow detection is built on.

use crate::limb::{self, Digit};
use crate::uint128::Uint128;

/// Returns `(a * b) % 2**128`.
pub const fn wrapping_mul(a: Uint128, b: Uint128) -> Uint128 {
	let u = a.to_digits();
	let v = b.to_digits();
	let mut w = [0 as Digit; 4];

	let mut j = 0;
	while j < 4 {
		if v[j] != 0 {
			let mut k = 0;
			let mut i = 0;
			while i + j < 4 {
				[w[i + j], k] = limb::mul_digits(u[i], v[j], w[i + j], k);
				i += 1;
			}
		}
		j += 1;
	}

	Uint128::from_digits(w)
}

/// Returns:
///     (low, high)
/// Where:
///     low + high * 2**128 == a * b
pub const fn widening_mul(a: Uint128, b: Uint128) -> (Uint128, Uint128) {
	let u = a.to_digits();
	let v = b.to_digits();
	let mut w = [0 as Digit; 8];

	let mut j = 0;
	while j < 4 {
		let mut k = 0;
		let mut i = 0;
		while i < 4 {
			[w[i + j], k] = limb::mul_digits(u[i], v[j], w[i + j], k);
			i += 1;
		}
		w[j + 4] = k;
		j += 1;
	}

	(Uint128::from_digits([w[0], w[1], w[2], w[3]]), Uint128::from_digits([w[4], w[5], w[6], w[7]]))
}

//--------------------------------------------------------------------------------------------------

/// Same result as [`wrapping_mul`], computing the six partial products that reach the low
/// 128 bits three pairs at a time with `pmuludq`.
#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
#[allow(unused_unsafe)]
pub fn sse2_mul(a: Uint128, b: Uint128) -> Uint128 {
	use core::arch::x86_64::{__m128i, _mm_mul_epu32, _mm_set_epi64x, _mm_storeu_si128};

	let [a0, a1, a2, a3] = a.to_digits();
	let [b0, b1, b2, b3] = b.to_digits();

	#[inline(always)]
	fn lanes(x: __m128i) -> [u64; 2] {
		let mut out = [0u64; 2];
		// SAFETY: `out` is 16 writable bytes and the store is unaligned.
		unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, x) };
		out
	}

	#[inline(always)]
	fn mul_pair(x: [Digit; 2], y: [Digit; 2]) -> [u64; 2] {
		// SAFETY: SSE2 is enabled for this target.
		let r = unsafe {
			_mm_mul_epu32(
				_mm_set_epi64x(x[1] as i64, x[0] as i64),
				_mm_set_epi64x(y[1] as i64, y[0] as i64),
			)
		};
		lanes(r)
	}

	let [p00, p10] = mul_pair([a0, a1], [b0, b0]);
	let [p01, p20] = mul_pair([a0, a2], [b1, b0]);
	let [p11, p02] = mul_pair([a1, a0], [b1, b2]);

	// Only the low digit of the fourth column survives.
	let col3 = a3
		.wrapping_mul(b0)
		.wrapping_add(a2.wrapping_mul(b1))
		.wrapping_add(a1.wrapping_mul(b2))
		.wrapping_add(a0.wrapping_mul(b3));

	let lo32 = |x: u64| x & limb::DIGIT_MASK;
	let hi32 = |x: u64| x >> limb::DIGIT_BITS;

	let mid = hi32(p00) + lo32(p10) + lo32(p01);
	let low = (mid << limb::DIGIT_BITS) | lo32(p00);
	let high = hi32(mid)
		.wrapping_add(hi32(p10))
		.wrapping_add(hi32(p01))
		.wrapping_add(p20)
		.wrapping_add(p11)
		.wrapping_add(p02)
		.wrapping_add((col3 as u64) << limb::DIGIT_BITS);

	Uint128::from_parts(high, low)
}

/// Multiplication used by the `*` operator.
#[inline]
pub fn mul_nonconst(a: Uint128, b: Uint128) -> Uint128 {
	#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
	{
		sse2_mul(a, b)
	}

	#[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
	{
		wrapping_mul(a, b)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil;
	use num_bigint::BigUint;

	fn u(v: u128) -> Uint128 {
		Uint128::from(v)
	}

	fn big(v: Uint128) -> BigUint {
		BigUint::from(u128::from(v))
	}

	#[test]
	fn test_small() {
		assert_eq!(wrapping_mul(u(0), u(12345)), u(0));
		assert_eq!(wrapping_mul(u(6), u(7)), u(42));
		assert_eq!(wrapping_mul(u(u64::MAX as u128), u(u64::MAX as u128)), u((u64::MAX as u128) * (u64::MAX as u128)));
		assert_eq!(wrapping_mul(Uint128::MAX, Uint128::MAX), u(1));
		assert_eq!(wrapping_mul(u(1 << 64), u(1 << 64)), u(0));
	}

	#[test]
	fn test_widening() {
		assert_eq!(widening_mul(Uint128::MAX, Uint128::MAX), (u(1), u(u128::MAX - 1)));
		assert_eq!(widening_mul(u(1 << 64), u(1 << 64)), (u(0), u(1)));
		assert_eq!(widening_mul(u(3), u(5)), (u(15), u(0)));
	}

	#[test]
	fn test_against_native() {
		let mut rng = testutil::rng();
		for _ in 0..10_000 {
			let (a, b) = (testutil::operand(&mut rng), testutil::operand(&mut rng));
			let expected = u(u128::from(a).wrapping_mul(u128::from(b)));
			assert_eq!(wrapping_mul(a, b), expected);
			assert_eq!(mul_nonconst(a, b), expected);
			assert_eq!(a * b, b * a);
		}
	}

	#[test]
	fn test_widening_against_bigint() {
		let mut rng = testutil::rng();
		for _ in 0..2000 {
			let (a, b) = (testutil::operand(&mut rng), testutil::operand(&mut rng));
			let (low, high) = widening_mul(a, b);
			assert_eq!((big(high) << 128u32) + big(low), big(a) * big(b));
		}
	}

	#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
	#[test]
	fn test_sse2_matches_scalar() {
		let mut rng = testutil::rng();
		for _ in 0..10_000 {
			let (a, b) = (testutil::operand(&mut rng), testutil::operand(&mut rng));
			assert_eq!(sse2_mul(a, b), wrapping_mul(a, b));
		}

		let edges = [u(0), u(1), u(u32::MAX as u128), u(u64::MAX as u128), u(1 << 64), u(1 << 127), Uint128::MAX];
		for &a in &edges {
			for &b in &edges {
				assert_eq!(sse2_mul(a, b), wrapping_mul(a, b));
			}
		}
	}

	#[test]
	fn test_associative() {
		let mut rng = testutil::rng();
		for _ in 0..1000 {
			let a = testutil::operand(&mut rng);
			let b = testutil::operand(&mut rng);
			let c = testutil::operand(&mut rng);
			assert_eq!(wrapping_mul(wrapping_mul(a, b), c), wrapping_mul(a, wrapping_mul(b, c)));
		}
	}

	#[test]
	fn test_const() {
		const P: (Uint128, Uint128) = widening_mul(Uint128::MAX, Uint128::from_parts(0, 2));
		assert_eq!(P, (u(u128::MAX - 1), u(1)));
	}
}
