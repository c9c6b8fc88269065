//! Limb and digit primitives.
//!
//! A 128-bit value is two 64-bit limbs. Multiplication and long division split the limbs
//! further into 32-bit digits so that every partial product `digit * digit + digit + digit`
//! still fits a single limb.

pub type Value = u64;
pub type Digit = u32;

pub const BITS: u32 = Value::BITS;
pub const DIGIT_BITS: u32 = Digit::BITS;
pub const DIGIT_MASK: Value = Digit::MAX as Value;

/// The base of the digit representation, `2**DIGIT_BITS`.
pub const DIGIT_BASE: Value = 1 << DIGIT_BITS;

#[inline]
pub const fn make_double(low: Digit, high: Digit) -> Value {
	(low as Value) | ((high as Value) << DIGIT_BITS)
}

#[inline]
pub const fn low_half(value: Value) -> Digit {
	value as Digit
}

#[inline]
pub const fn high_half(value: Value) -> Digit {
	(value >> DIGIT_BITS) as Digit
}

#[inline]
const fn __const_addc(a: Value, b: Value, carry: bool) -> (Value, bool) {
	let (sum, overflow1) = a.overflowing_add(b);
	let (sum, overflow2) = sum.overflowing_add(carry as Value);
	(sum, overflow1 | overflow2)
}

#[inline]
#[allow(unused_unsafe)]
fn __nonconst_addc(a: Value, b: Value, carry: bool) -> (Value, bool) {
	#[cfg(target_arch = "x86_64")]
	{
		let mut out: u64 = 0;
		let c_out = unsafe { core::arch::x86_64::_addcarry_u64(carry as u8, a, b, &mut out) };
		(out, c_out != 0)
	}

	#[cfg(not(target_arch = "x86_64"))]
	{
		__const_addc(a, b, carry)
	}
}

/// Returns:
///     (value, carry)
/// Where:
///     value = (a + b + carry) % 2**BITS
///     carry = (a + b + carry) > MAX
#[inline]
pub const fn addc(a: Value, b: Value, carry: bool) -> (Value, bool) {
	__const_addc(a, b, carry)
}

/// Same as [`addc`], but may use the carry flag of the target. Not usable in const context.
#[inline]
pub fn addc_nonconst(a: Value, b: Value, carry: bool) -> (Value, bool) {
	__nonconst_addc(a, b, carry)
}

#[inline]
const fn __const_subb(a: Value, b: Value, borrow: bool) -> (Value, bool) {
	let (diff, borrow1) = a.overflowing_sub(b);
	let (diff, borrow2) = diff.overflowing_sub(borrow as Value);
	(diff, borrow1 | borrow2)
}

#[inline]
#[allow(unused_unsafe)]
fn __nonconst_subb(a: Value, b: Value, borrow: bool) -> (Value, bool) {
	#[cfg(target_arch = "x86_64")]
	{
		let mut out: u64 = 0;
		let c_out = unsafe { core::arch::x86_64::_subborrow_u64(borrow as u8, a, b, &mut out) };
		(out, c_out != 0)
	}

	#[cfg(not(target_arch = "x86_64"))]
	{
		__const_subb(a, b, borrow)
	}
}

/// Returns:
///     (value, borrow)
/// Where:
///     value = (a - b - borrow) % 2**BITS
///     borrow = (a - b - borrow) < 0
#[inline]
pub const fn subb(a: Value, b: Value, borrow: bool) -> (Value, bool) {
	__const_subb(a, b, borrow)
}

/// Same as [`subb`], but may use the borrow flag of the target. Not usable in const context.
#[inline]
pub fn subb_nonconst(a: Value, b: Value, borrow: bool) -> (Value, bool) {
	__nonconst_subb(a, b, borrow)
}

/// Returns:
///     [low, high]
/// Where:
///     big_value = a * b + c + d
///     low = big_value % 2**DIGIT_BITS
///     high = big_value / 2**DIGIT_BITS
///
/// `big_value` never exceeds `Value::MAX`, so no information is lost.
#[inline]
pub const fn mul_digits(a: Digit, b: Digit, c: Digit, d: Digit) -> [Digit; 2] {
	let t = (a as Value) * (b as Value) + (c as Value) + (d as Value);
	[low_half(t), high_half(t)]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_addc() {
		assert_eq!(addc(1, 2, false), (3, false));
		assert_eq!(addc(1, 2, true), (4, false));
		assert_eq!(addc(Value::MAX, 1, false), (0, true));
		assert_eq!(addc(Value::MAX, 0, true), (0, true));
		assert_eq!(addc(Value::MAX, Value::MAX, true), (Value::MAX, true));
	}

	#[test]
	fn test_subb() {
		assert_eq!(subb(3, 2, false), (1, false));
		assert_eq!(subb(3, 2, true), (0, false));
		assert_eq!(subb(0, 1, false), (Value::MAX, true));
		assert_eq!(subb(0, 0, true), (Value::MAX, true));
		assert_eq!(subb(0, Value::MAX, true), (0, true));
	}

	#[test]
	fn test_nonconst_matches_const() {
		let samples = [0, 1, 2, DIGIT_MASK, DIGIT_BASE, Value::MAX - 1, Value::MAX, 0x8000_0000_0000_0000];
		for &a in &samples {
			for &b in &samples {
				for carry in [false, true] {
					assert_eq!(addc(a, b, carry), addc_nonconst(a, b, carry));
					assert_eq!(subb(a, b, carry), subb_nonconst(a, b, carry));
				}
			}
		}
	}

	#[test]
	fn test_mul_digits() {
		let max = Digit::MAX;
		assert_eq!(mul_digits(0, 0, 0, 0), [0, 0]);
		assert_eq!(mul_digits(2, 3, 4, 5), [15, 0]);
		// (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1
		assert_eq!(mul_digits(max, max, max, max), [max, max]);
		assert_eq!(mul_digits(max, max, 0, 0), [1, max - 1]);
	}

	#[test]
	fn test_halves() {
		let v = make_double(0x89ab_cdef, 0x0123_4567);
		assert_eq!(v, 0x0123_4567_89ab_cdef);
		assert_eq!(low_half(v), 0x89ab_cdef);
		assert_eq!(high_half(v), 0x0123_4567);
	}
}
