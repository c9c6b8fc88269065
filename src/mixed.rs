//! Mixed-signedness comparisons and arithmetic, compiled only with the `mixed-sign` feature.
//!
//! Comparisons are by value: a negative number is less than every unsigned one.
//! Arithmetic reinterprets the right operand modulo 2**128 and keeps the type of the left one.

use crate::int128::Int128;
use crate::uint128::Uint128;
use core::cmp::Ordering;

/// Orders an unsigned value against a signed one.
#[inline]
pub const fn cmp_mixed(a: Uint128, b: Int128) -> Ordering {
	if b.is_negative() { Ordering::Greater } else { a.const_cmp(b.as_unsigned()) }
}

impl PartialEq<Int128> for Uint128 {
	#[inline]
	fn eq(&self, other: &Int128) -> bool {
		cmp_mixed(*self, *other).is_eq()
	}
}

impl PartialEq<Uint128> for Int128 {
	#[inline]
	fn eq(&self, other: &Uint128) -> bool {
		cmp_mixed(*other, *self).is_eq()
	}
}

impl PartialOrd<Int128> for Uint128 {
	#[inline]
	fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
		Some(cmp_mixed(*self, *other))
	}
}

impl PartialOrd<Uint128> for Int128 {
	#[inline]
	fn partial_cmp(&self, other: &Uint128) -> Option<Ordering> {
		Some(cmp_mixed(*other, *self).reverse())
	}
}

/// Comparisons with natives of the other signedness, widened to their own 128-bit type first.
macro_rules! impl_mixed_native_cmp {
	($ty:ty, $wide:ty, |$a:ident, $b:ident| $cmp:expr; $($n:ty),*) => {
		$(
			impl PartialEq<$n> for $ty {
				#[inline]
				fn eq(&self, other: &$n) -> bool {
					let ($a, $b) = (*self, <$wide>::from(*other));
					$cmp.is_eq()
				}
			}

			impl PartialEq<$ty> for $n {
				#[inline]
				fn eq(&self, other: &$ty) -> bool {
					let ($a, $b) = (*other, <$wide>::from(*self));
					$cmp.is_eq()
				}
			}

			impl PartialOrd<$n> for $ty {
				#[inline]
				fn partial_cmp(&self, other: &$n) -> Option<Ordering> {
					let ($a, $b) = (*self, <$wide>::from(*other));
					Some($cmp)
				}
			}

			impl PartialOrd<$ty> for $n {
				#[inline]
				fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
					let ($a, $b) = (*other, <$wide>::from(*self));
					Some($cmp.reverse())
				}
			}
		)*
	};
}

impl_mixed_native_cmp!(Uint128, Int128, |a, b| cmp_mixed(a, b); i8, i16, i32, i64, isize, i128);
impl_mixed_native_cmp!(Int128, Uint128, |a, b| cmp_mixed(b, a).reverse(); u8, u16, u32, u64, usize, u128);

//--------------------------------------------------------------------------------------------------

macro_rules! impl_mixed_binop {
	($ty:ty, $rhs:ty, |$r:ident| $conv:expr, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
		impl core::ops::$Op<$rhs> for $ty {
			type Output = $ty;

			#[inline]
			fn $op(self, $r: $rhs) -> $ty {
				core::ops::$Op::$op(self, $conv)
			}
		}

		impl core::ops::$OpAssign<$rhs> for $ty {
			#[inline]
			fn $op_assign(&mut self, $r: $rhs) {
				*self = core::ops::$Op::$op(*self, $conv);
			}
		}
	};
}

macro_rules! impl_mixed_binops {
	($ty:ty, |$r:ident| $conv:expr; $($rhs:ty),*) => {
		$(
			impl_mixed_binop!($ty, $rhs, |$r| $conv, Add, add, AddAssign, add_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, Sub, sub, SubAssign, sub_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, Mul, mul, MulAssign, mul_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, Div, div, DivAssign, div_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, Rem, rem, RemAssign, rem_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, BitAnd, bitand, BitAndAssign, bitand_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, BitOr, bitor, BitOrAssign, bitor_assign);
			impl_mixed_binop!($ty, $rhs, |$r| $conv, BitXor, bitxor, BitXorAssign, bitxor_assign);
		)*
	};
}

impl_mixed_binops!(Uint128, |rhs| rhs.as_unsigned(); Int128);
impl_mixed_binops!(Uint128, |rhs| Uint128::from_i64(rhs as i64); i8, i16, i32, i64, isize);
impl_mixed_binops!(Uint128, |rhs| Uint128::from(rhs as u128); i128);
impl_mixed_binops!(Int128, |rhs| rhs.as_signed(); Uint128);
impl_mixed_binops!(Int128, |rhs| Int128::from(rhs); u8, u16, u32, u64, usize);
impl_mixed_binops!(Int128, |rhs| Uint128::from(rhs).as_signed(); u128);
