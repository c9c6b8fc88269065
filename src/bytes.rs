//! Byte views. Little-endian order is the portable one; `ne` follows the target.

use crate::int128::Int128;
use crate::uint128::Uint128;

impl Uint128 {
	pub const fn to_le_bytes(self) -> [u8; 16] {
		let low = self.low.to_le_bytes();
		let high = self.high.to_le_bytes();
		let mut out = [0u8; 16];
		let mut i = 0;
		while i < 8 {
			out[i] = low[i];
			out[i + 8] = high[i];
			i += 1;
		}
		out
	}

	pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
		let mut low = [0u8; 8];
		let mut high = [0u8; 8];
		let mut i = 0;
		while i < 8 {
			low[i] = bytes[i];
			high[i] = bytes[i + 8];
			i += 1;
		}
		Self::from_parts(u64::from_le_bytes(high), u64::from_le_bytes(low))
	}

	#[inline]
	pub const fn to_be_bytes(self) -> [u8; 16] {
		self.swap_bytes().to_le_bytes()
	}

	#[inline]
	pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
		Self::from_le_bytes(bytes).swap_bytes()
	}

	#[inline]
	pub const fn to_ne_bytes(self) -> [u8; 16] {
		if cfg!(target_endian = "big") { self.to_be_bytes() } else { self.to_le_bytes() }
	}

	#[inline]
	pub const fn from_ne_bytes(bytes: [u8; 16]) -> Self {
		if cfg!(target_endian = "big") { Self::from_be_bytes(bytes) } else { Self::from_le_bytes(bytes) }
	}
}

impl Int128 {
	#[inline]
	pub const fn to_le_bytes(self) -> [u8; 16] {
		self.as_unsigned().to_le_bytes()
	}

	#[inline]
	pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
		Uint128::from_le_bytes(bytes).as_signed()
	}

	#[inline]
	pub const fn to_be_bytes(self) -> [u8; 16] {
		self.as_unsigned().to_be_bytes()
	}

	#[inline]
	pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
		Uint128::from_be_bytes(bytes).as_signed()
	}

	#[inline]
	pub const fn to_ne_bytes(self) -> [u8; 16] {
		self.as_unsigned().to_ne_bytes()
	}

	#[inline]
	pub const fn from_ne_bytes(bytes: [u8; 16]) -> Self {
		Uint128::from_ne_bytes(bytes).as_signed()
	}
}
