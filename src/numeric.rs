//! gcd, lcm and midpoint.

use crate::int128::Int128;
use crate::shift;
use crate::uint128::Uint128;

impl Uint128 {
	/// Greatest common divisor by Stein's binary algorithm. `gcd(0, 0)` is 0.
	pub const fn gcd(self, other: Self) -> Self {
		let mut a = self;
		let mut b = other;
		if a.is_zero() {
			return b;
		}
		if b.is_zero() {
			return a;
		}

		let common = shift::or(a, b).trailing_zeros();
		a = a.shift_right(a.trailing_zeros() as i64);
		loop {
			b = b.shift_right(b.trailing_zeros() as i64);
			if b.const_lt(a) {
				let t = a;
				a = b;
				b = t;
			}
			b = b.wrapping_sub(a);
			if b.is_zero() {
				break;
			}
		}
		a.shift_left(common as i64)
	}

	/// Least common multiple, wrapping on overflow. 0 when either argument is 0.
	pub const fn lcm(self, other: Self) -> Self {
		if self.is_zero() || other.is_zero() {
			return Self::ZERO;
		}
		self.wrapping_div(self.gcd(other)).wrapping_mul(other)
	}

	/// `(self + other) / 2` without overflow, rounded towards `self`.
	pub const fn midpoint(self, other: Self) -> Self {
		let (lo, hi, toward_hi) =
			if self.const_lt(other) { (self, other, false) } else { (other, self, true) };
		let diff = hi.wrapping_sub(lo);
		let half = diff.shift_right(1);
		let round = toward_hi && (diff.low & 1) == 1;
		lo.wrapping_add(half).wrapping_add(Self::from_u64(round as u64))
	}
}

impl Int128 {
	#[inline]
	pub const fn abs(self) -> Self {
		self.wrapping_abs()
	}

	/// gcd of the magnitudes. `gcd(MIN, MIN)` and `gcd(MIN, 0)` do not fit and wrap to `MIN`.
	pub const fn gcd(self, other: Self) -> Self {
		self.unsigned_abs().gcd(other.unsigned_abs()).as_signed()
	}

	/// lcm of the magnitudes, wrapping on overflow.
	pub const fn lcm(self, other: Self) -> Self {
		self.unsigned_abs().lcm(other.unsigned_abs()).as_signed()
	}

	/// `(self + other) / 2` without overflow, rounded towards `self`.
	pub const fn midpoint(self, other: Self) -> Self {
		// Map to unsigned with the sign bit flipped, which keeps the order.
		const FLIP: u64 = 1 << 63;
		let a = Uint128::from_parts(self.high as u64 ^ FLIP, self.low);
		let b = Uint128::from_parts(other.high as u64 ^ FLIP, other.low);
		let m = a.midpoint(b);
		Self::from_parts((m.high ^ FLIP) as i64, m.low)
	}
}
