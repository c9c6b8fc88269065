//! Comparison engine.
//!
//! The high limb is the primary key (signed for `Int128`), the low limb the secondary key
//! (always unsigned). The trait impls forward to the const methods.

use crate::int128::Int128;
use crate::uint128::Uint128;
use core::cmp::Ordering;

impl Uint128 {
	#[inline]
	pub const fn is_zero(self) -> bool {
		(self.high | self.low) == 0
	}

	#[inline]
	pub const fn const_eq(self, b: Self) -> bool {
		self.high == b.high && self.low == b.low
	}

	#[inline]
	pub const fn const_lt(self, b: Self) -> bool {
		self.high < b.high || (self.high == b.high && self.low < b.low)
	}

	#[inline]
	pub const fn const_le(self, b: Self) -> bool {
		!b.const_lt(self)
	}

	#[inline]
	pub const fn const_cmp(self, b: Self) -> Ordering {
		if self.const_lt(b) {
			Ordering::Less
		} else if self.const_eq(b) {
			Ordering::Equal
		} else {
			Ordering::Greater
		}
	}

	#[inline]
	pub const fn const_max(self, b: Self) -> Self {
		if self.const_lt(b) { b } else { self }
	}

	#[inline]
	pub const fn const_min(self, b: Self) -> Self {
		if b.const_lt(self) { b } else { self }
	}
}

impl Int128 {
	#[inline]
	pub const fn is_zero(self) -> bool {
		self.as_unsigned().is_zero()
	}

	#[inline]
	pub const fn const_eq(self, b: Self) -> bool {
		self.high == b.high && self.low == b.low
	}

	#[inline]
	pub const fn const_lt(self, b: Self) -> bool {
		self.high < b.high || (self.high == b.high && self.low < b.low)
	}

	#[inline]
	pub const fn const_le(self, b: Self) -> bool {
		!b.const_lt(self)
	}

	#[inline]
	pub const fn const_cmp(self, b: Self) -> Ordering {
		if self.const_lt(b) {
			Ordering::Less
		} else if self.const_eq(b) {
			Ordering::Equal
		} else {
			Ordering::Greater
		}
	}

	#[inline]
	pub const fn const_max(self, b: Self) -> Self {
		if self.const_lt(b) { b } else { self }
	}

	#[inline]
	pub const fn const_min(self, b: Self) -> Self {
		if b.const_lt(self) { b } else { self }
	}
}

macro_rules! impl_ord {
	($($ty:ty),*) => {
		$(
			impl Ord for $ty {
				#[inline]
				fn cmp(&self, other: &Self) -> Ordering {
					self.const_cmp(*other)
				}
			}

			impl PartialOrd for $ty {
				#[inline]
				fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
					Some(self.cmp(other))
				}
			}
		)*
	};
}

impl_ord!(Uint128, Int128);

/// Equality and ordering against a native integer, widened through `From` first.
macro_rules! impl_native_cmp {
	($ty:ty; $($n:ty),*) => {
		$(
			impl PartialEq<$n> for $ty {
				#[inline]
				fn eq(&self, other: &$n) -> bool {
					*self == <$ty>::from(*other)
				}
			}

			impl PartialEq<$ty> for $n {
				#[inline]
				fn eq(&self, other: &$ty) -> bool {
					<$ty>::from(*self) == *other
				}
			}

			impl PartialOrd<$n> for $ty {
				#[inline]
				fn partial_cmp(&self, other: &$n) -> Option<Ordering> {
					Some(self.cmp(&<$ty>::from(*other)))
				}
			}

			impl PartialOrd<$ty> for $n {
				#[inline]
				fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
					Some(<$ty>::from(*self).cmp(other))
				}
			}
		)*
	};
}

impl_native_cmp!(Uint128; u8, u16, u32, u64, usize, u128);
impl_native_cmp!(Int128; i8, i16, i32, i64, isize, i128);
