use crate::add;
use crate::div::{self, DivRem};
use crate::int128::Int128;
use crate::limb::{self, Digit};
use crate::mul;
use crate::shift;

/// Unsigned 128-bit integer made of two 64-bit limbs.
///
/// Every bit pattern is a valid value in `0 ..= 2**128 - 1`. The field order follows the
/// byte order of the target, so the in-memory image matches a native `u128`; code that
/// needs a portable view should use the `high`/`low` fields or the byte conversions.
#[cfg(target_endian = "little")]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Uint128 {
	/// Bits 0..64.
	pub low: u64,
	/// Bits 64..128.
	pub high: u64,
}

#[cfg(target_endian = "big")]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Uint128 {
	/// Bits 64..128.
	pub high: u64,
	/// Bits 0..64.
	pub low: u64,
}

impl Uint128 {
	pub const BITS: u32 = 128;

	pub const ZERO: Self = Self::from_parts(0, 0);
	pub const ONE: Self = Self::from_parts(0, 1);
	pub const MIN: Self = Self::ZERO;
	pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

	#[inline]
	pub const fn from_parts(high: u64, low: u64) -> Self {
		Self { low, high }
	}

	#[inline]
	pub const fn high(self) -> u64 {
		self.high
	}

	#[inline]
	pub const fn low(self) -> u64 {
		self.low
	}

	#[inline]
	pub const fn from_u64(value: u64) -> Self {
		Self::from_parts(0, value)
	}

	/// Sign-extends `value` into the high limb, so `from_i64(-1) == MAX`.
	#[inline]
	pub const fn from_i64(value: i64) -> Self {
		Self::from_parts(if value < 0 { u64::MAX } else { 0 }, value as u64)
	}

	/// Reinterprets the bits as a two's-complement signed value.
	#[inline]
	pub const fn as_signed(self) -> Int128 {
		Int128::from_parts(self.high as i64, self.low)
	}

	/// The value as four 32-bit digits, least significant first.
	#[inline]
	pub const fn to_digits(self) -> [Digit; 4] {
		[
			limb::low_half(self.low),
			limb::high_half(self.low),
			limb::low_half(self.high),
			limb::high_half(self.high),
		]
	}

	#[inline]
	pub const fn from_digits(digits: [Digit; 4]) -> Self {
		Self::from_parts(
			limb::make_double(digits[2], digits[3]),
			limb::make_double(digits[0], digits[1]),
		)
	}

	/// Number of significant 32-bit digits, 0 for zero.
	#[inline]
	pub const fn digit_count(self) -> usize {
		let digits = self.to_digits();
		let mut n = 4;
		while n > 0 && digits[n - 1] == 0 {
			n -= 1;
		}
		n
	}

	//----------------------------------------------------------------------------------------------
	// additive

	#[inline]
	pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		add::overflowing_add(self, rhs)
	}

	#[inline]
	pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		add::overflowing_sub(self, rhs)
	}

	#[inline]
	pub const fn wrapping_add(self, rhs: Self) -> Self {
		add::overflowing_add(self, rhs).0
	}

	#[inline]
	pub const fn wrapping_sub(self, rhs: Self) -> Self {
		add::overflowing_sub(self, rhs).0
	}

	/// Two's complement, `0 - self` modulo 2^128.
	#[inline]
	pub const fn wrapping_neg(self) -> Self {
		add::wrapping_neg(self)
	}

	#[inline]
	pub const fn checked_add(self, rhs: Self) -> Option<Self> {
		match add::overflowing_add(self, rhs) {
			(value, false) => Some(value),
			(_, true) => None,
		}
	}

	#[inline]
	pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
		match add::overflowing_sub(self, rhs) {
			(value, false) => Some(value),
			(_, true) => None,
		}
	}

	//----------------------------------------------------------------------------------------------
	// multiplicative

	#[inline]
	pub const fn wrapping_mul(self, rhs: Self) -> Self {
		mul::wrapping_mul(self, rhs)
	}

	/// Full 256-bit product as `(low, high)`.
	#[inline]
	pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
		mul::widening_mul(self, rhs)
	}

	#[inline]
	pub const fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let (low, high) = mul::widening_mul(self, rhs);
		(low, !high.is_zero())
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

	/// Quotient and remainder from a single division pass.
	///
	/// Division by zero returns zero for both.
	#[inline]
	pub const fn div_rem(self, rhs: Self) -> DivRem<Self> {
		div::div_rem(self, rhs)
	}

	#[inline]
	pub const fn wrapping_div(self, rhs: Self) -> Self {
		div::div_rem(self, rhs).quot
	}

	#[inline]
	pub const fn wrapping_rem(self, rhs: Self) -> Self {
		div::div_rem(self, rhs).rem
	}

	#[inline]
	pub const fn checked_div(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() { None } else { Some(div::div_rem(self, rhs).quot) }
	}

	#[inline]
	pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() { None } else { Some(div::div_rem(self, rhs).rem) }
	}

	//----------------------------------------------------------------------------------------------
	// shifts

	/// Logical left shift. Amounts outside `0..128` give zero.
	#[inline]
	pub const fn shift_left(self, amount: i64) -> Self {
		match shift::amount_in_range(amount) {
			Some(n) => shift::shl(self, n),
			None => Self::ZERO,
		}
	}

	/// Logical right shift. Amounts outside `0..128` give zero.
	#[inline]
	pub const fn shift_right(self, amount: i64) -> Self {
		match shift::amount_in_range(amount) {
			Some(n) => shift::shr(self, n),
			None => Self::ZERO,
		}
	}

	/// Left shift by `amount % 128`, like the native `wrapping_shl`.
	#[inline]
	pub const fn wrapping_shl(self, amount: u32) -> Self {
		shift::shl(self, amount % Self::BITS)
	}

	/// Right shift by `amount % 128`, like the native `wrapping_shr`.
	#[inline]
	pub const fn wrapping_shr(self, amount: u32) -> Self {
		shift::shr(self, amount % Self::BITS)
	}

	#[inline]
	pub const fn rotate_left(self, amount: u32) -> Self {
		shift::rotate_left(self, amount)
	}

	#[inline]
	pub const fn rotate_right(self, amount: u32) -> Self {
		shift::rotate_right(self, amount)
	}

	/// This value used as a shift amount; anything outside `0..128` maps to an out-of-range amount.
	#[inline]
	pub(crate) const fn shift_amount(self) -> i64 {
		if self.high == 0 && self.low < Self::BITS as u64 { self.low as i64 } else { i64::MAX }
	}
}

impl_truncating_casts!(Uint128;
	as_u8 => u8, as_u16 => u16, as_u32 => u32, as_u64 => u64, as_usize => usize,
	as_i8 => i8, as_i16 => i16, as_i32 => i32, as_i64 => i64, as_isize => isize,
);

impl Uint128 {
	/// Returns:
	///     (top, exp)
	/// Where:
	///     top = the 64 most significant bits, with bit 0 set if any lower bit was set
	///     exp = how far `top` must be scaled up, `1 ..= 64`
	///
	/// Requires `high != 0`. Only the conversion of `top` rounds, scaling by `2**exp` is exact.
	const fn float_parts(self) -> (u64, u32) {
		let n = self.high.leading_zeros();
		let norm = self.shift_left(n as i64);
		(norm.high | (norm.low != 0) as u64, 64 - n)
	}

	/// Nearest `f64`, rounding like `u128 as f64`.
	pub const fn as_f64(self) -> f64 {
		if self.high == 0 {
			return self.low as f64;
		}
		let (top, exp) = self.float_parts();
		top as f64 * f64::from_bits(((f64::MAX_EXP - 1 + exp as i32) as u64) << 52)
	}

	/// Nearest `f32`, rounding like `u128 as f32`. Values that round to `2**128` give infinity.
	pub const fn as_f32(self) -> f32 {
		if self.high == 0 {
			return self.low as f32;
		}
		let (top, exp) = self.float_parts();
		top as f32 * f32::from_bits(((f32::MAX_EXP - 1 + exp as i32) as u32) << 23)
	}
}

//--------------------------------------------------------------------------------------------------
// conversions

macro_rules! impl_from_unsigned {
	($($n:ty),*) => {
		$(
			impl From<$n> for Uint128 {
				#[inline]
				fn from(value: $n) -> Self {
					Self::from_u64(value as u64)
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Uint128 {
	#[inline]
	fn from(value: bool) -> Self {
		Self::from_u64(value as u64)
	}
}

impl From<u128> for Uint128 {
	#[inline]
	fn from(value: u128) -> Self {
		Self::from_parts((value >> 64) as u64, value as u64)
	}
}

impl From<Uint128> for u128 {
	#[inline]
	fn from(value: Uint128) -> Self {
		((value.high as u128) << 64) | (value.low as u128)
	}
}

//--------------------------------------------------------------------------------------------------
// operators

#[inline]
fn div_op(lhs: Uint128, rhs: Uint128) -> Uint128 {
	div::div_rem_nonconst(lhs, rhs).quot
}

#[inline]
fn rem_op(lhs: Uint128, rhs: Uint128) -> Uint128 {
	div::div_rem_nonconst(lhs, rhs).rem
}

impl_binop!(Uint128, Add, add, AddAssign, add_assign, add::add_nonconst);
impl_binop!(Uint128, Sub, sub, SubAssign, sub_assign, add::sub_nonconst);
impl_binop!(Uint128, Mul, mul, MulAssign, mul_assign, mul::mul_nonconst);
impl_binop!(Uint128, Div, div, DivAssign, div_assign, div_op);
impl_binop!(Uint128, Rem, rem, RemAssign, rem_assign, rem_op);
impl_binop!(Uint128, BitAnd, bitand, BitAndAssign, bitand_assign, shift::and);
impl_binop!(Uint128, BitOr, bitor, BitOrAssign, bitor_assign, shift::or);
impl_binop!(Uint128, BitXor, bitxor, BitXorAssign, bitxor_assign, shift::xor);

impl_native_binops!(Uint128; u8, u16, u32, u64, usize, u128);

impl_shift_ops!(Uint128; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_wide_shift_ops!(Uint128; Uint128 => Uint128, Int128 => Int128, u128 => Uint128, i128 => Int128);

impl core::ops::Not for Uint128 {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		shift::not(self)
	}
}

impl core::ops::Neg for Uint128 {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.wrapping_neg()
	}
}
