//! Saturating arithmetic and saturating conversions.
//!
//! These clamp to the representable range instead of wrapping. They are separate entry
//! points; the operators always wrap.

use crate::int128::Int128;
use crate::uint128::Uint128;

impl Uint128 {
	#[inline]
	pub const fn saturating_add(self, rhs: Self) -> Self {
		match self.overflowing_add(rhs) {
			(value, false) => value,
			(_, true) => Self::MAX,
		}
	}

	#[inline]
	pub const fn saturating_sub(self, rhs: Self) -> Self {
		match self.overflowing_sub(rhs) {
			(value, false) => value,
			(_, true) => Self::MIN,
		}
	}

	#[inline]
	pub const fn saturating_mul(self, rhs: Self) -> Self {
		match self.overflowing_mul(rhs) {
			(value, false) => value,
			(_, true) => Self::MAX,
		}
	}

	/// Unsigned division cannot overflow; division by zero gives zero.
	#[inline]
	pub const fn saturating_div(self, rhs: Self) -> Self {
		self.wrapping_div(rhs)
	}
}

impl Int128 {
	#[inline]
	pub const fn saturating_add(self, rhs: Self) -> Self {
		match self.overflowing_add(rhs) {
			(value, false) => value,
			(_, true) if rhs.is_negative() => Self::MIN,
			(_, true) => Self::MAX,
		}
	}

	#[inline]
	pub const fn saturating_sub(self, rhs: Self) -> Self {
		match self.overflowing_sub(rhs) {
			(value, false) => value,
			(_, true) if rhs.is_negative() => Self::MAX,
			(_, true) => Self::MIN,
		}
	}

	#[inline]
	pub const fn saturating_mul(self, rhs: Self) -> Self {
		match self.overflowing_mul(rhs) {
			(value, false) => value,
			(_, true) if self.is_negative() != rhs.is_negative() => Self::MIN,
			(_, true) => Self::MAX,
		}
	}

	/// Same as the wrapping division except for `MIN / -1`, which gives `MAX`.
	#[inline]
	pub const fn saturating_div(self, rhs: Self) -> Self {
		if self.const_eq(Self::MIN) && rhs.const_eq(Self::NEG_ONE) {
			Self::MAX
		} else {
			self.wrapping_div(rhs)
		}
	}

	#[inline]
	pub const fn saturating_neg(self) -> Self {
		if self.const_eq(Self::MIN) { Self::MAX } else { self.wrapping_neg() }
	}

	#[inline]
	pub const fn saturating_abs(self) -> Self {
		if self.is_negative() { self.saturating_neg() } else { self }
	}
}

//--------------------------------------------------------------------------------------------------

/// Conversion that clamps the value into the range of `T`.
pub trait SaturatingCast<T> {
	fn saturating_cast(self) -> T;
}

macro_rules! impl_saturating_cast_unsigned {
	($($n:ty),*) => {
		$(
			impl SaturatingCast<$n> for Uint128 {
				#[inline]
				fn saturating_cast(self) -> $n {
					let value = u128::from(self);
					if value > <$n>::MAX as u128 { <$n>::MAX } else { value as $n }
				}
			}
		)*
	};
}

macro_rules! impl_saturating_cast_signed {
	($($n:ty),*) => {
		$(
			impl SaturatingCast<$n> for Int128 {
				#[inline]
				fn saturating_cast(self) -> $n {
					let value = i128::from(self);
					if value < <$n>::MIN as i128 {
						<$n>::MIN
					} else if value > <$n>::MAX as i128 {
						<$n>::MAX
					} else {
						value as $n
					}
				}
			}
		)*
	};
}

impl_saturating_cast_unsigned!(u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);
impl_saturating_cast_signed!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl SaturatingCast<u128> for Int128 {
	#[inline]
	fn saturating_cast(self) -> u128 {
		if self.is_negative() { 0 } else { u128::from(self.as_unsigned()) }
	}
}

impl SaturatingCast<Int128> for Uint128 {
	#[inline]
	fn saturating_cast(self) -> Int128 {
		if self.high >> 63 != 0 { Int128::MAX } else { self.as_signed() }
	}
}

impl SaturatingCast<Uint128> for Int128 {
	#[inline]
	fn saturating_cast(self) -> Uint128 {
		if self.is_negative() { Uint128::ZERO } else { self.as_unsigned() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil;

	fn u(v: u128) -> Uint128 {
		Uint128::from(v)
	}

	fn i(v: i128) -> Int128 {
		Int128::from(v)
	}

	#[test]
	fn test_unsigned_laws() {
		for k in [1u128, 2, 1 << 64, u128::MAX] {
			assert_eq!(Uint128::MAX.saturating_add(u(k)), Uint128::MAX);
			assert_eq!(Uint128::MIN.saturating_sub(u(k)), Uint128::MIN);
		}
		assert_eq!(u(5).saturating_sub(u(3)), u(2));
		assert_eq!(u(1 << 64).saturating_mul(u(1 << 64)), Uint128::MAX);
		assert_eq!(u(1 << 63).saturating_mul(u(2)), u(1 << 64));
		assert_eq!(u(9).saturating_div(u(0)), u(0));
		assert_eq!(u(9).saturating_div(u(2)), u(4));
	}

	#[test]
	fn test_signed_laws() {
		for k in [1i128, 2, 1 << 64, i128::MAX] {
			assert_eq!(Int128::MAX.saturating_add(i(k)), Int128::MAX);
			assert_eq!(Int128::MIN.saturating_sub(i(k)), Int128::MIN);
			assert_eq!(Int128::MIN.saturating_add(i(-k)), Int128::MIN);
			assert_eq!(Int128::MAX.saturating_sub(i(-k)), Int128::MAX);
		}
		assert_eq!(Int128::MIN.saturating_div(Int128::NEG_ONE), Int128::MAX);
		assert_eq!(Int128::MIN.wrapping_div(Int128::NEG_ONE), Int128::MIN);
		assert_eq!(i(-100).saturating_div(i(7)), i(-14));
		assert_eq!(i(1 << 100).saturating_mul(i(-(1 << 100))), Int128::MIN);
		assert_eq!(i(-(1 << 100)).saturating_mul(i(-(1 << 100))), Int128::MAX);
		assert_eq!(Int128::MIN.saturating_neg(), Int128::MAX);
		assert_eq!(Int128::MIN.saturating_abs(), Int128::MAX);
		assert_eq!(i(-3).saturating_abs(), i(3));
	}

	#[test]
	fn test_against_native() {
		let mut rng = testutil::rng();
		for _ in 0..5000 {
			let (a, b) = (testutil::operand(&mut rng), testutil::operand(&mut rng));
			let (na, nb) = (u128::from(a), u128::from(b));
			assert_eq!(a.saturating_add(b), u(na.saturating_add(nb)));
			assert_eq!(a.saturating_sub(b), u(na.saturating_sub(nb)));
			assert_eq!(a.saturating_mul(b), u(na.saturating_mul(nb)));

			let (c, d) = (testutil::signed_operand(&mut rng), testutil::signed_operand(&mut rng));
			let (nc, nd) = (i128::from(c), i128::from(d));
			assert_eq!(c.saturating_add(d), i(nc.saturating_add(nd)));
			assert_eq!(c.saturating_sub(d), i(nc.saturating_sub(nd)));
			assert_eq!(c.saturating_mul(d), i(nc.saturating_mul(nd)));
			if nd != 0 {
				assert_eq!(c.saturating_div(d), i(nc.saturating_div(nd)));
			}
		}
	}

	#[test]
	fn test_casts() {
		let big = u(1 << 100);
		assert_eq!(SaturatingCast::<u8>::saturating_cast(big), u8::MAX);
		assert_eq!(SaturatingCast::<i64>::saturating_cast(big), i64::MAX);
		assert_eq!(SaturatingCast::<u32>::saturating_cast(u(17)), 17u32);
		assert_eq!(SaturatingCast::<i128>::saturating_cast(Uint128::MAX), i128::MAX);
		assert_eq!(SaturatingCast::<Int128>::saturating_cast(Uint128::MAX), Int128::MAX);
		assert_eq!(SaturatingCast::<Int128>::saturating_cast(u(5)), i(5));

		let neg = i(-1 << 100);
		assert_eq!(SaturatingCast::<i8>::saturating_cast(neg), i8::MIN);
		assert_eq!(SaturatingCast::<u64>::saturating_cast(neg), 0u64);
		assert_eq!(SaturatingCast::<u128>::saturating_cast(neg), 0u128);
		assert_eq!(SaturatingCast::<Uint128>::saturating_cast(neg), Uint128::ZERO);
		assert_eq!(SaturatingCast::<i16>::saturating_cast(i(1 << 20)), i16::MAX);
		assert_eq!(SaturatingCast::<i16>::saturating_cast(i(-300)), -300i16);
		assert_eq!(SaturatingCast::<u128>::saturating_cast(Int128::MAX), i128::MAX as u128);
	}

	#[test]
	fn test_const() {
		const S: Int128 = Int128::MIN.saturating_div(Int128::NEG_ONE);
		const A: Uint128 = Uint128::MAX.saturating_add(Uint128::ONE);
		assert_eq!(S, Int128::MAX);
		assert_eq!(A, Uint128::MAX);
	}
}
