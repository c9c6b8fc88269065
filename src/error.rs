/// Failure to turn text into a 128-bit value. Arithmetic never fails, so this is the only
/// error the crate produces.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
	/// The input was empty.
	Empty,
	/// A character is not a digit of the radix, or only a sign was given.
	InvalidDigit,
	/// The value is above the maximum of the target type.
	PosOverflow,
	/// The value is below the minimum of the target type.
	NegOverflow,
	/// The radix is outside `2..=36`.
	InvalidRadix,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub fn new_empty(msg: &'static str) -> Self {
		Self::new(ErrorKind::Empty, msg)
	}

	pub fn new_invalid_digit(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidDigit, msg)
	}

	pub fn new_pos_overflow(msg: &'static str) -> Self {
		Self::new(ErrorKind::PosOverflow, msg)
	}

	pub fn new_neg_overflow(msg: &'static str) -> Self {
		Self::new(ErrorKind::NegOverflow, msg)
	}

	pub fn new_invalid_radix(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidRadix, msg)
	}
}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what { Ok(()) } else { Err(err()) }
}
