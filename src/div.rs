//! Division engine.
//!
//! Every division produces quotient and remainder in one pass. The divisor's width picks
//! one of a closed set of strategies (see [`DivStrategy`]); each strategy is a standalone
//! function so it can be checked against the others. Long division works on 32-bit digits
//! so every intermediate fits a 64-bit limb.
//!
//! Division by zero is not an error: quotient and remainder are both zero.

use crate::add;
use crate::int128::Int128;
use crate::limb::{self, Digit, Value};
use crate::uint128::Uint128;

/// Quotient and remainder of one division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DivRem<T> {
	pub quot: T,
	pub rem: T,
}

/// How a division `x / y` is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivStrategy {
	/// `y == 0`. Both results are zero.
	ByZero,
	/// `x < y`, or both fit a single limb and the native division does the job.
	Trivial,
	/// `y` fits 32 bits. Four digit steps of schoolbook division.
	HalfWord,
	/// `y` fits 64 bits. A 128 by 64 division, done by the `div` instruction at runtime.
	OneWord,
	/// `y` has a nonzero high limb. Knuth's Algorithm D.
	Knuth,
}

impl DivStrategy {
	pub const fn classify(x: Uint128, y: Uint128) -> Self {
		if y.is_zero() {
			Self::ByZero
		} else if x.const_lt(y) || x.high == 0 {
			Self::Trivial
		} else if y.high != 0 {
			Self::Knuth
		} else if y.low <= Digit::MAX as Value {
			Self::HalfWord
		} else {
			Self::OneWord
		}
	}
}

//--------------------------------------------------------------------------------------------------
// unsigned core

/// Requires `y != 0`. Handles `x < y` and the single limb case.
#[inline]
pub const fn trivial_div(x: Uint128, y: Uint128) -> DivRem<Uint128> {
	if x.const_lt(y) {
		DivRem { quot: Uint128::ZERO, rem: x }
	} else {
		DivRem { quot: Uint128::from_u64(x.low / y.low), rem: Uint128::from_u64(x.low % y.low) }
	}
}

/// Divides by a single digit. Requires `d != 0`.
pub const fn half_word_div(x: Uint128, d: Digit) -> (Uint128, Digit) {
	let u = x.to_digits();
	let d = d as Value;
	let mut q = [0 as Digit; 4];
	let mut r: Value = 0;

	let mut i = 4;
	while i > 0 {
		i -= 1;
		let cur = (r << limb::DIGIT_BITS) | u[i] as Value;
		q[i] = (cur / d) as Digit;
		r = cur % d;
	}

	(Uint128::from_digits(q), r as Digit)
}

/// Returns:
///     (quot, rem)
/// Where:
///     quot = (u1 * 2**64 + u0) / v
///     rem = (u1 * 2**64 + u0) % v
///
/// Requires `u1 < v`, so that the quotient fits one limb.
pub const fn div_2by1(u1: Value, u0: Value, v: Value) -> (Value, Value) {
	debug_assert!(u1 < v);
	const B: Value = limb::DIGIT_BASE;

	let s = v.leading_zeros();
	let v = v << s;
	let vn1 = v >> limb::DIGIT_BITS;
	let vn0 = v & limb::DIGIT_MASK;

	let un32 = if s == 0 { u1 } else { (u1 << s) | (u0 >> (limb::BITS - s)) };
	let un10 = u0 << s;
	let un1 = un10 >> limb::DIGIT_BITS;
	let un0 = un10 & limb::DIGIT_MASK;

	let mut q1 = un32 / vn1;
	let mut rhat = un32 % vn1;
	while q1 >= B || q1 * vn0 > B * rhat + un1 {
		q1 -= 1;
		rhat += vn1;
		if rhat >= B {
			break;
		}
	}

	let un21 = (un32 << limb::DIGIT_BITS).wrapping_add(un1).wrapping_sub(q1.wrapping_mul(v));

	let mut q0 = un21 / vn1;
	let mut rhat = un21 % vn1;
	while q0 >= B || q0 * vn0 > B * rhat + un0 {
		q0 -= 1;
		rhat += vn1;
		if rhat >= B {
			break;
		}
	}

	let r = (un21 << limb::DIGIT_BITS).wrapping_add(un0).wrapping_sub(q0.wrapping_mul(v));
	((q1 << limb::DIGIT_BITS) | q0, r >> s)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn native_div_2by1(u1: Value, u0: Value, v: Value) -> (Value, Value) {
	debug_assert!(u1 < v);
	let q: Value;
	let r: Value;
	// SAFETY: `u1 < v`, so the quotient fits in rax and `div` cannot fault.
	unsafe {
		core::arch::asm!(
			"div {0}",
			in(reg) v,
			inout("rax") u0 => q,
			inout("rdx") u1 => r,
			options(pure, nomem, nostack),
		);
	}
	(q, r)
}

/// Same as [`div_2by1`], using the `div` instruction where there is one.
#[inline]
pub fn div_2by1_nonconst(u1: Value, u0: Value, v: Value) -> (Value, Value) {
	#[cfg(target_arch = "x86_64")]
	{
		native_div_2by1(u1, u0, v)
	}

	#[cfg(not(target_arch = "x86_64"))]
	{
		div_2by1(u1, u0, v)
	}
}

/// Divides by a single limb. Requires `d != 0`.
#[inline]
pub const fn one_word_div(x: Uint128, d: Value) -> (Uint128, Value) {
	if x.high == 0 {
		return (Uint128::from_u64(x.low / d), x.low % d);
	}
	let (low, r) = div_2by1(x.high % d, x.low, d);
	(Uint128::from_parts(x.high / d, low), r)
}

#[inline]
pub fn one_word_div_nonconst(x: Uint128, d: Value) -> (Uint128, Value) {
	if x.high == 0 {
		return (Uint128::from_u64(x.low / d), x.low % d);
	}
	let (low, r) = div_2by1_nonconst(x.high % d, x.low, d);
	(Uint128::from_parts(x.high / d, low), r)
}

/// Knuth's Algorithm D on digit arrays.
///
/// `u` holds `m` significant digits, `v` holds `n` significant digits, least significant
/// first. Requires `2 <= n <= m <= 4` and `v[n - 1] != 0`.
///
/// Returns:
///     (quot, rem)
/// Where:
///     quot has at most `m - n + 1` significant digits
///     rem has at most `n` significant digits
pub const fn knuth_divide(u: [Digit; 4], m: usize, v: [Digit; 4], n: usize) -> ([Digit; 4], [Digit; 4]) {
	debug_assert!(2 <= n && n <= m && m <= 4);
	debug_assert!(v[n - 1] != 0);
	const B: Value = limb::DIGIT_BASE;
	const MASK: Value = limb::DIGIT_MASK;

	// Normalize so that the top divisor digit has its high bit set.
	let s = v[n - 1].leading_zeros();
	let mut vn = [0 as Digit; 4];
	let mut i = n - 1;
	while i > 0 {
		vn[i] = (limb::make_double(v[i - 1], v[i]) << s >> limb::DIGIT_BITS) as Digit;
		i -= 1;
	}
	vn[0] = v[0] << s;

	let mut un = [0 as Digit; 5];
	un[m] = ((u[m - 1] as Value) << s >> limb::DIGIT_BITS) as Digit;
	let mut i = m - 1;
	while i > 0 {
		un[i] = (limb::make_double(u[i - 1], u[i]) << s >> limb::DIGIT_BITS) as Digit;
		i -= 1;
	}
	un[0] = u[0] << s;

	let vtop = vn[n - 1] as Value;
	let vnext = vn[n - 2] as Value;
	let mut q = [0 as Digit; 4];

	let mut j = m - n + 1;
	while j > 0 {
		j -= 1;

		// Estimate the quotient digit from the top two dividend digits.
		let num = limb::make_double(un[j + n - 1], un[j + n]);
		let mut qhat = num / vtop;
		let mut rhat = num % vtop;
		while qhat >= B || qhat * vnext > B * rhat + un[j + n - 2] as Value {
			qhat -= 1;
			rhat += vtop;
			if rhat >= B {
				break;
			}
		}

		// Multiply and subtract.
		let mut k: i64 = 0;
		let mut t: i64;
		let mut i = 0;
		while i < n {
			let p = qhat * vn[i] as Value;
			t = un[i + j] as i64 - k - (p & MASK) as i64;
			un[i + j] = t as Digit;
			k = (p >> limb::DIGIT_BITS) as i64 - (t >> limb::DIGIT_BITS);
			i += 1;
		}
		t = un[j + n] as i64 - k;
		un[j + n] = t as Digit;

		q[j] = qhat as Digit;
		if t < 0 {
			// Subtracted too much, add one divisor back.
			q[j] = q[j].wrapping_sub(1);
			let mut k: i64 = 0;
			let mut i = 0;
			while i < n {
				let t = un[i + j] as i64 + vn[i] as i64 + k;
				un[i + j] = t as Digit;
				k = t >> limb::DIGIT_BITS;
				i += 1;
			}
			un[j + n] = (un[j + n] as i64 + k) as Digit;
		}
	}

	// Denormalize the remainder.
	let mut r = [0 as Digit; 4];
	let mut i = 0;
	while i < n {
		r[i] = (limb::make_double(un[i], un[i + 1]) >> s) as Digit;
		i += 1;
	}

	(q, r)
}

/// Long division for a divisor with a nonzero high limb. Requires `x >= y`.
#[inline]
pub const fn knuth_div(x: Uint128, y: Uint128) -> DivRem<Uint128> {
	let (q, r) = knuth_divide(x.to_digits(), x.digit_count(), y.to_digits(), y.digit_count());
	DivRem { quot: Uint128::from_digits(q), rem: Uint128::from_digits(r) }
}

/// Unsigned quotient and remainder. Division by zero gives zero for both.
pub const fn div_rem(x: Uint128, y: Uint128) -> DivRem<Uint128> {
	match DivStrategy::classify(x, y) {
		DivStrategy::ByZero => DivRem { quot: Uint128::ZERO, rem: Uint128::ZERO },
		DivStrategy::Trivial => trivial_div(x, y),
		DivStrategy::HalfWord => {
			let (quot, rem) = half_word_div(x, y.low as Digit);
			DivRem { quot, rem: Uint128::from_u64(rem as Value) }
		},
		DivStrategy::OneWord => {
			let (quot, rem) = one_word_div(x, y.low);
			DivRem { quot, rem: Uint128::from_u64(rem) }
		},
		DivStrategy::Knuth => knuth_div(x, y),
	}
}

/// Same as [`div_rem`], but takes the hardware path for one-word divisors.
pub fn div_rem_nonconst(x: Uint128, y: Uint128) -> DivRem<Uint128> {
	match DivStrategy::classify(x, y) {
		DivStrategy::OneWord => {
			let (quot, rem) = one_word_div_nonconst(x, y.low);
			DivRem { quot, rem: Uint128::from_u64(rem) }
		},
		_ => div_rem(x, y),
	}
}

//--------------------------------------------------------------------------------------------------
// signed

#[inline]
const fn apply_signs(x: Int128, y: Int128, r: DivRem<Uint128>) -> DivRem<Int128> {
	let quot = add::neg_if(r.quot, x.is_negative() != y.is_negative());
	let rem = add::neg_if(r.rem, x.is_negative());
	DivRem { quot: quot.as_signed(), rem: rem.as_signed() }
}

/// Truncating signed division: the quotient rounds toward zero and the remainder takes the
/// sign of the dividend. `MIN / -1` wraps to `MIN` with remainder zero.
pub const fn div_rem_signed(x: Int128, y: Int128) -> DivRem<Int128> {
	apply_signs(x, y, div_rem(x.unsigned_abs(), y.unsigned_abs()))
}

pub fn div_rem_signed_nonconst(x: Int128, y: Int128) -> DivRem<Int128> {
	apply_signs(x, y, div_rem_nonconst(x.unsigned_abs(), y.unsigned_abs()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil;
	use num_bigint::BigUint;
	use rand::Rng;

	fn u(v: u128) -> Uint128 {
		Uint128::from(v)
	}

	fn i(v: i128) -> Int128 {
		Int128::from(v)
	}

	fn big(v: Uint128) -> BigUint {
		BigUint::from(u128::from(v))
	}

	fn check_identity(x: Uint128, y: Uint128, r: DivRem<Uint128>) {
		assert!(r.rem < y, "{x} / {y}: remainder {} too large", r.rem);
		assert_eq!(r.quot * y + r.rem, x, "{x} / {y}");
	}

	#[test]
	fn test_classify() {
		assert_eq!(DivStrategy::classify(u(7), u(0)), DivStrategy::ByZero);
		assert_eq!(DivStrategy::classify(u(7), u(9)), DivStrategy::Trivial);
		assert_eq!(DivStrategy::classify(u(u64::MAX as u128), u(3)), DivStrategy::Trivial);
		assert_eq!(DivStrategy::classify(u(1 << 100), u(3)), DivStrategy::HalfWord);
		assert_eq!(DivStrategy::classify(u(1 << 100), u(u32::MAX as u128)), DivStrategy::HalfWord);
		assert_eq!(DivStrategy::classify(u(1 << 100), u(1 << 32)), DivStrategy::OneWord);
		assert_eq!(DivStrategy::classify(u(1 << 100), u(1 << 50)), DivStrategy::OneWord);
		assert_eq!(DivStrategy::classify(u(1 << 100), u(1 << 64)), DivStrategy::Knuth);
		assert_eq!(DivStrategy::classify(Uint128::MAX, Uint128::MAX), DivStrategy::Knuth);
	}

	#[test]
	fn test_by_zero() {
		let zero = DivRem { quot: Uint128::ZERO, rem: Uint128::ZERO };
		assert_eq!(div_rem(u(7), u(0)), zero);
		assert_eq!(div_rem(Uint128::MAX, u(0)), zero);
		assert_eq!(div_rem_nonconst(u(7), u(0)), zero);

		let zero = DivRem { quot: Int128::ZERO, rem: Int128::ZERO };
		assert_eq!(div_rem_signed(i(-7), i(0)), zero);
		assert_eq!(div_rem_signed(Int128::MIN, i(0)), zero);
	}

	#[test]
	fn test_powers_of_two() {
		assert_eq!(div_rem(u(1 << 100), u(1 << 50)), DivRem { quot: u(1 << 50), rem: u(0) });
		assert_eq!(div_rem(u(1 << 127), u(1 << 64)), DivRem { quot: u(1 << 63), rem: u(0) });
		assert_eq!(div_rem(u((1 << 100) + 5), u(1 << 99)), DivRem { quot: u(2), rem: u(5) });
	}

	#[test]
	fn test_half_word() {
		assert_eq!(half_word_div(Uint128::MAX, 1), (Uint128::MAX, 0));
		assert_eq!(half_word_div(Uint128::MAX, 10), (u(u128::MAX / 10), (u128::MAX % 10) as u32));
		assert_eq!(half_word_div(Uint128::MAX, u32::MAX), (u(u128::MAX / u32::MAX as u128), 0));

		let mut rng = testutil::rng();
		for _ in 0..5000 {
			let x = testutil::operand(&mut rng);
			let d = rng.gen_range(1..=u32::MAX);
			let (q, r) = half_word_div(x, d);
			assert_eq!(q, u(u128::from(x) / d as u128));
			assert_eq!(r as u128, u128::from(x) % d as u128);
		}
	}

	#[test]
	fn test_div_2by1() {
		assert_eq!(div_2by1(0, 100, 7), (14, 2));
		assert_eq!(div_2by1(u64::MAX - 1, u64::MAX, u64::MAX), (u64::MAX, u64::MAX - 1));
		assert_eq!(div_2by1(1, 0, 2), (1 << 63, 0));
		assert_eq!(div_2by1(0x7fff_ffff, 0, 0x8000_0000), (((0x7fff_ffffu128 << 64) / 0x8000_0000) as u64, 0));
		// Largest quotient with a divisor that needs normalizing.
		assert_eq!(div_2by1(0x7fff_ffff, u64::MAX, 0x8000_0000), (u64::MAX, 0x7fff_ffff));

		let mut rng = testutil::rng();
		for _ in 0..10_000 {
			let v: u64 = rng.r#gen::<u64>() >> rng.gen_range(0..63u32);
			let v = v.max(1);
			let u1 = rng.r#gen::<u64>() % v;
			let u0: u64 = rng.r#gen();
			let n = ((u1 as u128) << 64) | u0 as u128;
			let expected = ((n / v as u128) as u64, (n % v as u128) as u64);
			assert_eq!(div_2by1(u1, u0, v), expected);
			assert_eq!(div_2by1_nonconst(u1, u0, v), expected);
		}
	}

	#[test]
	fn test_one_word() {
		let mut rng = testutil::rng();
		for _ in 0..5000 {
			let x = testutil::operand(&mut rng);
			let d = rng.r#gen::<u64>() | (1 << 32);
			let expected = (u(u128::from(x) / d as u128), (u128::from(x) % d as u128) as u64);
			assert_eq!(one_word_div(x, d), expected);
			assert_eq!(one_word_div_nonconst(x, d), expected);
		}
	}

	#[test]
	fn test_knuth_against_bigint() {
		let mut rng = testutil::rng();
		for _ in 0..2000 {
			let y = testutil::wide_divisor(&mut rng);
			let x = Uint128::from_parts(rng.r#gen(), rng.r#gen()).const_max(y);
			let r = knuth_div(x, y);
			assert_eq!(big(r.quot), big(x) / big(y), "{x} / {y}");
			assert_eq!(big(r.rem), big(x) % big(y), "{x} % {y}");
		}
	}

	#[test]
	fn test_knuth_add_back() {
		// The first case needs the add-back step, the second a borrow out of the top digit.
		let cases = [
			(Uint128::from_digits([3, 0, 0x8000_0000, 0]), Uint128::from_digits([1, 0, 0x2000_0000, 0])),
			(Uint128::from_digits([0, 0, 0x8000_0000, 0x7fff_ffff]), Uint128::from_digits([1, 0, 0x8000_0000, 0])),
			(u(0xffff_ffff_ffff_ffff_0000_0000_0000_0000), u(0x0000_0001_0000_0000_ffff_ffff_ffff_ffff)),
			(Uint128::MAX, u(0x0000_0000_0000_0001_ffff_ffff_ffff_ffff)),
		];
		for (x, y) in cases {
			let r = knuth_div(x, y);
			assert_eq!(r.quot, u(u128::from(x) / u128::from(y)));
			assert_eq!(r.rem, u(u128::from(x) % u128::from(y)));
		}
	}

	#[test]
	fn test_knuth_two_digit_divisor() {
		let mut rng = testutil::rng();
		for _ in 0..1000 {
			let x = Uint128::from_parts(rng.r#gen::<u64>() | 1, rng.r#gen());
			let y: u64 = rng.r#gen::<u64>() | (1 << 40);
			let (q, r) = knuth_divide(x.to_digits(), 4, Uint128::from_u64(y).to_digits(), 2);
			assert_eq!(Uint128::from_digits(q), u(u128::from(x) / y as u128));
			assert_eq!(Uint128::from_digits(r), u(u128::from(x) % y as u128));
		}
	}

	#[test]
	fn test_identity_all_strategies() {
		let mut rng = testutil::rng();
		for _ in 0..10_000 {
			let x = testutil::operand(&mut rng);
			let y = testutil::divisor(&mut rng);
			let r = div_rem(x, y);
			check_identity(x, y, r);
			assert_eq!(div_rem_nonconst(x, y), r);
			assert_eq!(r.quot, u(u128::from(x) / u128::from(y)));
		}
	}

	#[test]
	fn test_signed() {
		assert_eq!(div_rem_signed(i(-100), i(7)), DivRem { quot: i(-14), rem: i(-2) });
		assert_eq!(div_rem_signed(i(100), i(-7)), DivRem { quot: i(-14), rem: i(2) });
		assert_eq!(div_rem_signed(i(-100), i(-7)), DivRem { quot: i(14), rem: i(-2) });
		assert_eq!(div_rem_signed(i(100), i(7)), DivRem { quot: i(14), rem: i(2) });
		assert_eq!(div_rem_signed(Int128::MIN, i(-1)), DivRem { quot: Int128::MIN, rem: i(0) });
		assert_eq!(div_rem_signed(Int128::MIN, i(1)), DivRem { quot: Int128::MIN, rem: i(0) });
		assert_eq!(div_rem_signed(Int128::MIN, Int128::MIN), DivRem { quot: i(1), rem: i(0) });
		assert_eq!(div_rem_signed(Int128::MAX, Int128::MIN), DivRem { quot: i(0), rem: Int128::MAX });
	}

	#[test]
	fn test_signed_against_native() {
		let mut rng = testutil::rng();
		for _ in 0..10_000 {
			let x = testutil::signed_operand(&mut rng);
			let y = testutil::signed_divisor(&mut rng);
			let y = if rng.gen_bool(0.5) { y.wrapping_neg() } else { y };
			let (nx, ny) = (i128::from(x), i128::from(y));
			let expected = DivRem { quot: i(nx.wrapping_div(ny)), rem: i(nx.wrapping_rem(ny)) };
			assert_eq!(div_rem_signed(x, y), expected);
			assert_eq!(div_rem_signed_nonconst(x, y), expected);
		}
	}

	#[test]
	fn test_const() {
		const Q: DivRem<Uint128> = div_rem(Uint128::MAX, Uint128::from_parts(1, 1));
		const S: DivRem<Int128> = div_rem_signed(Int128::from_i64(-100), Int128::from_i64(7));
		const W: (Value, Value) = div_2by1(1, 0, 3);
		assert_eq!(Q.quot, u(u128::MAX / ((1 << 64) + 1)));
		assert_eq!(Q.rem, u(u128::MAX % ((1 << 64) + 1)));
		assert_eq!(S, DivRem { quot: Int128::from_i64(-14), rem: Int128::from_i64(-2) });
		assert_eq!(W, (((1u128 << 64) / 3) as u64, ((1u128 << 64) % 3) as u64));
	}
}
