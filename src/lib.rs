//! Portable 128-bit integers built from two 64-bit limbs.
//!
//! [`Uint128`] and [`Int128`] are bit-for-bit compatible with the native `u128` and `i128`,
//! but every algorithm is written in terms of 64-bit (and 32-bit digit) operations only.
//! Almost every method is a `const fn`. The operator traits may take a hardware shortcut
//! (carry flags, SSE2, the x86-64 `div` instruction), each of which has a const twin that
//! produces identical results.
//!
//! Semantics follow native wrapping integers:
//! - `+ - *` wrap modulo 2^128 for both types,
//! - division by zero yields a zero quotient and a zero remainder,
//! - `Int128::MIN / -1` yields `Int128::MIN`, `saturating_div` yields `Int128::MAX` instead.
//!
//! Nothing in the arithmetic core panics or returns an error. Only parsing is fallible.
#![cfg_attr(
	not(feature = "mixed-sign"),
	doc = r#"
Without the `mixed-sign` feature, signed and unsigned operands do not mix:

```compile_fail
use int128::{Int128, Uint128};
let _ = Uint128::ZERO < Int128::ZERO;
```

```compile_fail
use int128::{Int128, Uint128};
let _ = Uint128::ZERO + Int128::ZERO;
```

```compile_fail
use int128::Uint128;
let _ = Uint128::ZERO == -1i32;
```

```compile_fail
use int128::Int128;
let _ = Int128::ZERO * 7u64;
```
"#
)]

#![allow(clippy::should_implement_trait)]

#[macro_use]
mod macros;

pub mod add;
pub mod bits;
pub mod bytes;
pub mod cmp;
pub mod div;
pub mod error;
pub mod fmt;
pub mod int128;
pub mod limb;
pub mod limits;
#[cfg(feature = "mixed-sign")]
pub mod mixed;
pub mod mul;
pub mod numeric;
pub mod parse;
pub mod saturating;
pub mod shift;
pub mod uint128;

#[cfg(test)]
mod testutil;

pub use div::{DivRem, DivStrategy};
pub use error::{Error, ErrorKind};
pub use int128::Int128;
pub use limits::Limits;
pub use saturating::SaturatingCast;
pub use uint128::Uint128;
