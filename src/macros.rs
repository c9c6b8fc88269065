/// Implements `$Op` and `$OpAssign` for `$ty` by forwarding to `$func(lhs, rhs)`.
macro_rules! impl_binop {
	($ty:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $func:path) => {
		impl core::ops::$Op for $ty {
			type Output = $ty;

			#[inline]
			fn $op(self, rhs: $ty) -> $ty {
				$func(self, rhs)
			}
		}

		impl core::ops::$OpAssign for $ty {
			#[inline]
			fn $op_assign(&mut self, rhs: $ty) {
				*self = $func(*self, rhs);
			}
		}
	};
}

/// Lets a native integer `$n` appear on either side of `$Op`, widening it with `From` first.
macro_rules! impl_native_binop {
	($ty:ty, $n:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
		impl core::ops::$Op<$n> for $ty {
			type Output = $ty;

			#[inline]
			fn $op(self, rhs: $n) -> $ty {
				core::ops::$Op::$op(self, <$ty>::from(rhs))
			}
		}

		impl core::ops::$Op<$ty> for $n {
			type Output = $ty;

			#[inline]
			fn $op(self, rhs: $ty) -> $ty {
				core::ops::$Op::$op(<$ty>::from(self), rhs)
			}
		}

		impl core::ops::$OpAssign<$n> for $ty {
			#[inline]
			fn $op_assign(&mut self, rhs: $n) {
				*self = core::ops::$Op::$op(*self, <$ty>::from(rhs));
			}
		}
	};
}

macro_rules! impl_native_binops {
	($ty:ty; $($n:ty),* $(,)?) => {
		$(
			impl_native_binop!($ty, $n, Add, add, AddAssign, add_assign);
			impl_native_binop!($ty, $n, Sub, sub, SubAssign, sub_assign);
			impl_native_binop!($ty, $n, Mul, mul, MulAssign, mul_assign);
			impl_native_binop!($ty, $n, Div, div, DivAssign, div_assign);
			impl_native_binop!($ty, $n, Rem, rem, RemAssign, rem_assign);
			impl_native_binop!($ty, $n, BitAnd, bitand, BitAndAssign, bitand_assign);
			impl_native_binop!($ty, $n, BitOr, bitor, BitOrAssign, bitor_assign);
			impl_native_binop!($ty, $n, BitXor, bitxor, BitXorAssign, bitxor_assign);
		)*
	};
}

/// Shift operators for every native amount type. The amount goes through `as i64`;
/// values that wrap negative are out of range either way, so the result is unaffected.
macro_rules! impl_shift_ops {
	($ty:ty; $($n:ty),* $(,)?) => {
		$(
			impl core::ops::Shl<$n> for $ty {
				type Output = $ty;

				#[inline]
				fn shl(self, rhs: $n) -> $ty {
					self.shift_left(rhs as i64)
				}
			}

			impl core::ops::Shr<$n> for $ty {
				type Output = $ty;

				#[inline]
				fn shr(self, rhs: $n) -> $ty {
					self.shift_right(rhs as i64)
				}
			}

			impl core::ops::ShlAssign<$n> for $ty {
				#[inline]
				fn shl_assign(&mut self, rhs: $n) {
					*self = self.shift_left(rhs as i64);
				}
			}

			impl core::ops::ShrAssign<$n> for $ty {
				#[inline]
				fn shr_assign(&mut self, rhs: $n) {
					*self = self.shift_right(rhs as i64);
				}
			}
		)*
	};
}

/// Shift operators whose amount is a 128-bit value. Each amount type is converted to
/// `Uint128` or `Int128` first, so amounts too large for `i64` still land out of range.
macro_rules! impl_wide_shift_ops {
	($ty:ty; $($n:ty => $wide:ty),* $(,)?) => {
		$(
			impl core::ops::Shl<$n> for $ty {
				type Output = $ty;

				#[inline]
				fn shl(self, rhs: $n) -> $ty {
					self.shift_left(<$wide>::from(rhs).shift_amount())
				}
			}

			impl core::ops::Shr<$n> for $ty {
				type Output = $ty;

				#[inline]
				fn shr(self, rhs: $n) -> $ty {
					self.shift_right(<$wide>::from(rhs).shift_amount())
				}
			}

			impl core::ops::ShlAssign<$n> for $ty {
				#[inline]
				fn shl_assign(&mut self, rhs: $n) {
					*self = self.shift_left(<$wide>::from(rhs).shift_amount());
				}
			}

			impl core::ops::ShrAssign<$n> for $ty {
				#[inline]
				fn shr_assign(&mut self, rhs: $n) {
					*self = self.shift_right(<$wide>::from(rhs).shift_amount());
				}
			}
		)*
	};
}

/// Truncating conversions to native integers, the equivalent of `as`.
macro_rules! impl_truncating_casts {
	($ty:ty; $($name:ident => $n:ty),* $(,)?) => {
		impl $ty {
			$(
				#[doc = concat!("Truncates to `", stringify!($n), "`, keeping the low bits like `as` does.")]
				#[inline]
				pub const fn $name(self) -> $n {
					self.low as $n
				}
			)*
		}
	};
}
