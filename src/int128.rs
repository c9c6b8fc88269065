use crate::div::{self, DivRem};
use crate::shift;
use crate::uint128::Uint128;

/// Signed 128-bit two's-complement integer made of a signed high limb and an unsigned low limb.
///
/// The value is `high * 2**64 + low`. The sign of the value is the sign of `high`.
/// Arithmetic reuses the unsigned engines on the same bit pattern.
#[cfg(target_endian = "little")]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Int128 {
	pub low: u64,
	pub high: i64,
}

#[cfg(target_endian = "big")]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Int128 {
	pub high: i64,
	pub low: u64,
}

impl Int128 {
	pub const BITS: u32 = 128;

	pub const ZERO: Self = Self::from_parts(0, 0);
	pub const ONE: Self = Self::from_parts(0, 1);
	pub const NEG_ONE: Self = Self::from_parts(-1, u64::MAX);
	pub const MIN: Self = Self::from_parts(i64::MIN, 0);
	pub const MAX: Self = Self::from_parts(i64::MAX, u64::MAX);

	#[inline]
	pub const fn from_parts(high: i64, low: u64) -> Self {
		Self { low, high }
	}

	#[inline]
	pub const fn high(self) -> i64 {
		self.high
	}

	#[inline]
	pub const fn low(self) -> u64 {
		self.low
	}

	/// Sign-extends `value` into the high limb.
	#[inline]
	pub const fn from_i64(value: i64) -> Self {
		Self::from_parts(value >> 63, value as u64)
	}

	#[inline]
	pub const fn from_u64(value: u64) -> Self {
		Self::from_parts(0, value)
	}

	/// Reinterprets the bits as an unsigned value.
	#[inline]
	pub const fn as_unsigned(self) -> Uint128 {
		Uint128::from_parts(self.high as u64, self.low)
	}

	#[inline]
	pub const fn is_negative(self) -> bool {
		self.high < 0
	}

	#[inline]
	pub const fn is_positive(self) -> bool {
		self.high > 0 || (self.high == 0 && self.low != 0)
	}

	/// The magnitude as an unsigned value. `MIN` has no positive counterpart, its magnitude
	/// is `2**127`.
	#[inline]
	pub const fn unsigned_abs(self) -> Uint128 {
		if self.const_eq(Self::MIN) {
			Uint128::from_parts(1 << 63, 0)
		} else if self.is_negative() {
			self.as_unsigned().wrapping_neg()
		} else {
			self.as_unsigned()
		}
	}

	/// `-1`, `0` or `1`.
	#[inline]
	pub const fn signum(self) -> Self {
		if self.is_negative() {
			Self::NEG_ONE
		} else if self.is_zero() {
			Self::ZERO
		} else {
			Self::ONE
		}
	}

	//----------------------------------------------------------------------------------------------
	// additive

	#[inline]
	pub const fn wrapping_add(self, rhs: Self) -> Self {
		self.as_unsigned().wrapping_add(rhs.as_unsigned()).as_signed()
	}

	#[inline]
	pub const fn wrapping_sub(self, rhs: Self) -> Self {
		self.as_unsigned().wrapping_sub(rhs.as_unsigned()).as_signed()
	}

	/// `abs(MIN)` is `MIN`, like the native `wrapping_abs`.
	#[inline]
	pub const fn wrapping_abs(self) -> Self {
		if self.is_negative() { self.wrapping_neg() } else { self }
	}

	#[inline]
	pub const fn wrapping_neg(self) -> Self {
		self.as_unsigned().wrapping_neg().as_signed()
	}

	/// Overflow happens when both operands have the same sign and the sum has the other one.
	#[inline]
	pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let sum = self.wrapping_add(rhs);
		let overflow = self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative();
		(sum, overflow)
	}

	#[inline]
	pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let diff = self.wrapping_sub(rhs);
		let overflow = self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative();
		(diff, overflow)
	}

	#[inline]
	pub const fn overflowing_neg(self) -> (Self, bool) {
		(self.wrapping_neg(), self.const_eq(Self::MIN))
	}

	#[inline]
	pub const fn checked_add(self, rhs: Self) -> Option<Self> {
		match self.overflowing_add(rhs) {
			(value, false) => Some(value),
			(_, true) => None,
		}
	}

	#[inline]
	pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.overflowing_sub(rhs) {
			(value, false) => Some(value),
			(_, true) => None,
		}
	}

	#[inline]
	pub const fn checked_neg(self) -> Option<Self> {
		if self.const_eq(Self::MIN) { None } else { Some(self.wrapping_neg()) }
	}

	//----------------------------------------------------------------------------------------------
	// multiplicative

	#[inline]
	pub const fn wrapping_mul(self, rhs: Self) -> Self {
		self.as_unsigned().wrapping_mul(rhs.as_unsigned()).as_signed()
	}

	/// The product of the magnitudes is computed in full; the result overflows when it
	/// exceeds `2**127` for a negative product or `2**127 - 1` otherwise.
	#[inline]
	pub const fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let value = self.wrapping_mul(rhs);
		let (low, high) = self.unsigned_abs().widening_mul(rhs.unsigned_abs());
		let negative = self.is_negative() != rhs.is_negative();
		let limit = if negative { Uint128::from_parts(1 << 63, 0) } else { Self::MAX.as_unsigned() };
		let overflow = !high.is_zero() || limit.const_lt(low);
		(value, overflow)
	}

	#[inline]
	pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(value, false) => Some(value),
			(_, true) => None,
		}
	}

	//----------------------------------------------------------------------------------------------
	// division

	/// Truncating quotient and remainder. Division by zero gives zero for both, and
	/// `MIN / -1` gives `MIN` with remainder zero.
	#[inline]
	pub const fn div_rem(self, rhs: Self) -> DivRem<Self> {
		div::div_rem_signed(self, rhs)
	}

	#[inline]
	pub const fn wrapping_div(self, rhs: Self) -> Self {
		div::div_rem_signed(self, rhs).quot
	}

	#[inline]
	pub const fn wrapping_rem(self, rhs: Self) -> Self {
		div::div_rem_signed(self, rhs).rem
	}

	#[inline]
	pub const fn checked_div(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() || (self.const_eq(Self::MIN) && rhs.const_eq(Self::NEG_ONE)) {
			None
		} else {
			Some(div::div_rem_signed(self, rhs).quot)
		}
	}

	#[inline]
	pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() || (self.const_eq(Self::MIN) && rhs.const_eq(Self::NEG_ONE)) {
			None
		} else {
			Some(div::div_rem_signed(self, rhs).rem)
		}
	}

	//----------------------------------------------------------------------------------------------
	// shifts

	/// Left shift. Amounts outside `0..128` give zero.
	#[inline]
	pub const fn shift_left(self, amount: i64) -> Self {
		match shift::amount_in_range(amount) {
			Some(n) => shift::shl(self.as_unsigned(), n).as_signed(),
			None => Self::ZERO,
		}
	}

	/// Arithmetic right shift. Amounts outside `0..128` fill every bit with the sign,
	/// giving `0` or `-1`.
	#[inline]
	pub const fn shift_right(self, amount: i64) -> Self {
		match shift::amount_in_range(amount) {
			Some(n) => shift::sar(self.as_unsigned(), n).as_signed(),
			None => shift::sign_fill(self.as_unsigned()).as_signed(),
		}
	}

	#[inline]
	pub const fn wrapping_shl(self, amount: u32) -> Self {
		shift::shl(self.as_unsigned(), amount % Self::BITS).as_signed()
	}

	#[inline]
	pub const fn wrapping_shr(self, amount: u32) -> Self {
		shift::sar(self.as_unsigned(), amount % Self::BITS).as_signed()
	}

	#[inline]
	pub const fn rotate_left(self, amount: u32) -> Self {
		shift::rotate_left(self.as_unsigned(), amount).as_signed()
	}

	#[inline]
	pub const fn rotate_right(self, amount: u32) -> Self {
		shift::rotate_right(self.as_unsigned(), amount).as_signed()
	}

	#[inline]
	pub(crate) const fn shift_amount(self) -> i64 {
		if self.is_negative() { -1 } else { self.as_unsigned().shift_amount() }
	}
}

impl_truncating_casts!(Int128;
	as_u8 => u8, as_u16 => u16, as_u32 => u32, as_u64 => u64, as_usize => usize,
	as_i8 => i8, as_i16 => i16, as_i32 => i32, as_i64 => i64, as_isize => isize,
);

impl Int128 {
	/// Nearest `f64`, rounding like `i128 as f64`.
	pub const fn as_f64(self) -> f64 {
		let magnitude = self.unsigned_abs().as_f64();
		if self.is_negative() { -magnitude } else { magnitude }
	}

	/// Nearest `f32`, rounding like `i128 as f32`.
	pub const fn as_f32(self) -> f32 {
		let magnitude = self.unsigned_abs().as_f32();
		if self.is_negative() { -magnitude } else { magnitude }
	}
}

//--------------------------------------------------------------------------------------------------
// conversions

macro_rules! impl_from_signed {
	($($n:ty),*) => {
		$(
			impl From<$n> for Int128 {
				#[inline]
				fn from(value: $n) -> Self {
					Self::from_i64(value as i64)
				}
			}
		)*
	};
}

macro_rules! impl_from_unsigned {
	($($n:ty),*) => {
		$(
			impl From<$n> for Int128 {
				#[inline]
				fn from(value: $n) -> Self {
					Self::from_u64(value as u64)
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Int128 {
	#[inline]
	fn from(value: bool) -> Self {
		Self::from_u64(value as u64)
	}
}

impl From<i128> for Int128 {
	#[inline]
	fn from(value: i128) -> Self {
		Self::from_parts((value >> 64) as i64, value as u64)
	}
}

impl From<Int128> for i128 {
	#[inline]
	fn from(value: Int128) -> Self {
		((value.high as i128) << 64) | (value.low as i128)
	}
}

//--------------------------------------------------------------------------------------------------
// operators

#[inline]
fn add_op(lhs: Int128, rhs: Int128) -> Int128 {
	(lhs.as_unsigned() + rhs.as_unsigned()).as_signed()
}

#[inline]
fn sub_op(lhs: Int128, rhs: Int128) -> Int128 {
	(lhs.as_unsigned() - rhs.as_unsigned()).as_signed()
}

#[inline]
fn mul_op(lhs: Int128, rhs: Int128) -> Int128 {
	(lhs.as_unsigned() * rhs.as_unsigned()).as_signed()
}

#[inline]
fn div_op(lhs: Int128, rhs: Int128) -> Int128 {
	div::div_rem_signed_nonconst(lhs, rhs).quot
}

#[inline]
fn rem_op(lhs: Int128, rhs: Int128) -> Int128 {
	div::div_rem_signed_nonconst(lhs, rhs).rem
}

#[inline]
fn and_op(lhs: Int128, rhs: Int128) -> Int128 {
	shift::and(lhs.as_unsigned(), rhs.as_unsigned()).as_signed()
}

#[inline]
fn or_op(lhs: Int128, rhs: Int128) -> Int128 {
	shift::or(lhs.as_unsigned(), rhs.as_unsigned()).as_signed()
}

#[inline]
fn xor_op(lhs: Int128, rhs: Int128) -> Int128 {
	shift::xor(lhs.as_unsigned(), rhs.as_unsigned()).as_signed()
}

impl_binop!(Int128, Add, add, AddAssign, add_assign, add_op);
impl_binop!(Int128, Sub, sub, SubAssign, sub_assign, sub_op);
impl_binop!(Int128, Mul, mul, MulAssign, mul_assign, mul_op);
impl_binop!(Int128, Div, div, DivAssign, div_assign, div_op);
impl_binop!(Int128, Rem, rem, RemAssign, rem_assign, rem_op);
impl_binop!(Int128, BitAnd, bitand, BitAndAssign, bitand_assign, and_op);
impl_binop!(Int128, BitOr, bitor, BitOrAssign, bitor_assign, or_op);
impl_binop!(Int128, BitXor, bitxor, BitXorAssign, bitxor_assign, xor_op);

impl_native_binops!(Int128; i8, i16, i32, i64, isize, i128);

impl_shift_ops!(Int128; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_wide_shift_ops!(Int128; Uint128 => Uint128, Int128 => Int128, u128 => Uint128, i128 => Int128);

impl core::ops::Not for Int128 {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		shift::not(self.as_unsigned()).as_signed()
	}
}

impl core::ops::Neg for Int128 {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.wrapping_neg()
	}
}
