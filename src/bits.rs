//! Bit counting and bit manipulation.

use crate::int128::Int128;
use crate::uint128::Uint128;

impl Uint128 {
	#[inline]
	pub const fn leading_zeros(self) -> u32 {
		if self.high != 0 { self.high.leading_zeros() } else { 64 + self.low.leading_zeros() }
	}

	#[inline]
	pub const fn trailing_zeros(self) -> u32 {
		if self.low != 0 { self.low.trailing_zeros() } else { 64 + self.high.trailing_zeros() }
	}

	#[inline]
	pub const fn leading_ones(self) -> u32 {
		Self::from_parts(!self.high, !self.low).leading_zeros()
	}

	#[inline]
	pub const fn trailing_ones(self) -> u32 {
		Self::from_parts(!self.high, !self.low).trailing_zeros()
	}

	#[inline]
	pub const fn count_ones(self) -> u32 {
		self.high.count_ones() + self.low.count_ones()
	}

	#[inline]
	pub const fn count_zeros(self) -> u32 {
		Self::BITS - self.count_ones()
	}

	/// Number of bits needed to represent the value, 0 for zero.
	#[inline]
	pub const fn bit_width(self) -> u32 {
		Self::BITS - self.leading_zeros()
	}

	#[inline]
	pub const fn is_power_of_two(self) -> bool {
		self.count_ones() == 1
	}

	/// Smallest power of two not less than `self`. Zero when that does not fit.
	#[inline]
	pub const fn bit_ceil(self) -> Self {
		if self.const_le(Self::ONE) {
			return Self::ONE;
		}
		let width = self.wrapping_sub(Self::ONE).bit_width();
		if width >= Self::BITS { Self::ZERO } else { Self::ONE.shift_left(width as i64) }
	}

	/// Largest power of two not greater than `self`, 0 for zero.
	#[inline]
	pub const fn bit_floor(self) -> Self {
		if self.is_zero() { Self::ZERO } else { Self::ONE.shift_left(self.bit_width() as i64 - 1) }
	}

	#[inline]
	pub const fn swap_bytes(self) -> Self {
		Self::from_parts(self.low.swap_bytes(), self.high.swap_bytes())
	}

	#[inline]
	pub const fn reverse_bits(self) -> Self {
		Self::from_parts(self.low.reverse_bits(), self.high.reverse_bits())
	}
}

impl Int128 {
	#[inline]
	pub const fn leading_zeros(self) -> u32 {
		self.as_unsigned().leading_zeros()
	}

	#[inline]
	pub const fn trailing_zeros(self) -> u32 {
		self.as_unsigned().trailing_zeros()
	}

	#[inline]
	pub const fn count_ones(self) -> u32 {
		self.as_unsigned().count_ones()
	}

	#[inline]
	pub const fn count_zeros(self) -> u32 {
		self.as_unsigned().count_zeros()
	}

	#[inline]
	pub const fn swap_bytes(self) -> Self {
		self.as_unsigned().swap_bytes().as_signed()
	}

	#[inline]
	pub const fn reverse_bits(self) -> Self {
		self.as_unsigned().reverse_bits().as_signed()
	}
}
