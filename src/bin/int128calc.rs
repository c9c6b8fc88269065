//! Evaluates one binary operation on two 128-bit operands.
//!
//! ```text
//! int128calc [-v]... [--signed] [--radix N] <LHS> <OP> <RHS>
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use int128::{DivRem, DivStrategy, Error, Int128, Uint128};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Sub};
use std::process::ExitCode;

const OPS: &[&str] = &[
	"+", "-", "*", "/", "%", "divrem", "&", "|", "^", "<<", ">>", "rotl", "rotr", "add_sat", "sub_sat",
	"mul_sat", "div_sat", "gcd", "lcm", "midpoint", "cmp",
];

#[derive(Debug)]
enum CalcError {
	Operand(&'static str, Error),
	Amount(String),
	UnknownOp(String),
}

impl fmt::Display for CalcError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CalcError::Operand(which, err) => write!(f, "invalid {which} operand: {err}"),
			CalcError::Amount(text) => write!(f, "invalid shift or rotate amount: {text:?}"),
			CalcError::UnknownOp(op) => write!(f, "unknown operator {op:?}, expected one of: {}", OPS.join(" ")),
		}
	}
}

/// What the calculator needs from either operand type.
trait Operand:
	Copy
	+ Ord
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Mul<Output = Self>
	+ Div<Output = Self>
	+ Rem<Output = Self>
	+ BitAnd<Output = Self>
	+ BitOr<Output = Self>
	+ BitXor<Output = Self>
{
	fn parse(text: &str, radix: u32) -> Result<Self, Error>;
	fn render(self, radix: u32) -> Result<String, Error>;
	fn magnitude(self) -> Uint128;
	fn div_rem(self, rhs: Self) -> DivRem<Self>;
	fn shift_left(self, amount: i64) -> Self;
	fn shift_right(self, amount: i64) -> Self;
	fn rotate_left(self, amount: u32) -> Self;
	fn rotate_right(self, amount: u32) -> Self;
	fn saturating_add(self, rhs: Self) -> Self;
	fn saturating_sub(self, rhs: Self) -> Self;
	fn saturating_mul(self, rhs: Self) -> Self;
	fn saturating_div(self, rhs: Self) -> Self;
	fn gcd(self, rhs: Self) -> Self;
	fn lcm(self, rhs: Self) -> Self;
	fn midpoint(self, rhs: Self) -> Self;
}

macro_rules! impl_operand {
	($ty:ty, |$v:ident| $magnitude:expr) => {
		impl Operand for $ty {
			fn parse(text: &str, radix: u32) -> Result<Self, Error> {
				<$ty>::from_str_radix(text, radix)
			}

			fn render(self, radix: u32) -> Result<String, Error> {
				self.to_str_radix(radix)
			}

			fn magnitude(self) -> Uint128 {
				let $v = self;
				$magnitude
			}

			fn div_rem(self, rhs: Self) -> DivRem<Self> {
				<$ty>::div_rem(self, rhs)
			}

			fn shift_left(self, amount: i64) -> Self {
				<$ty>::shift_left(self, amount)
			}

			fn shift_right(self, amount: i64) -> Self {
				<$ty>::shift_right(self, amount)
			}

			fn rotate_left(self, amount: u32) -> Self {
				<$ty>::rotate_left(self, amount)
			}

			fn rotate_right(self, amount: u32) -> Self {
				<$ty>::rotate_right(self, amount)
			}

			fn saturating_add(self, rhs: Self) -> Self {
				<$ty>::saturating_add(self, rhs)
			}

			fn saturating_sub(self, rhs: Self) -> Self {
				<$ty>::saturating_sub(self, rhs)
			}

			fn saturating_mul(self, rhs: Self) -> Self {
				<$ty>::saturating_mul(self, rhs)
			}

			fn saturating_div(self, rhs: Self) -> Self {
				<$ty>::saturating_div(self, rhs)
			}

			fn gcd(self, rhs: Self) -> Self {
				<$ty>::gcd(self, rhs)
			}

			fn lcm(self, rhs: Self) -> Self {
				<$ty>::lcm(self, rhs)
			}

			fn midpoint(self, rhs: Self) -> Self {
				<$ty>::midpoint(self, rhs)
			}
		}
	};
}

impl_operand!(Uint128, |v| v);
impl_operand!(Int128, |v| v.unsigned_abs());

fn amount<N: std::str::FromStr>(text: &str) -> Result<N, CalcError> {
	text.parse::<N>().map_err(|_| CalcError::Amount(text.to_string()))
}

fn evaluate<T: Operand>(lhs: &str, op: &str, rhs: &str, radix: u32) -> Result<String, CalcError> {
	if !OPS.contains(&op) {
		return Err(CalcError::UnknownOp(op.to_string()));
	}

	let a = T::parse(lhs, radix).map_err(|e| CalcError::Operand("left", e))?;
	let render = |v: T| v.render(radix).map_err(|e| CalcError::Operand("result", e));

	// Shift and rotate amounts are plain decimal counts.
	match op {
		"<<" => return render(a.shift_left(amount(rhs)?)),
		">>" => return render(a.shift_right(amount(rhs)?)),
		"rotl" => return render(a.rotate_left(amount(rhs)?)),
		"rotr" => return render(a.rotate_right(amount(rhs)?)),
		_ => {},
	}

	let b = T::parse(rhs, radix).map_err(|e| CalcError::Operand("right", e))?;
	if matches!(op, "/" | "%" | "divrem" | "div_sat") {
		log::debug!("division strategy: {:?}", DivStrategy::classify(a.magnitude(), b.magnitude()));
	}

	let result = match op {
		"+" => a + b,
		"-" => a - b,
		"*" => a * b,
		"/" => a / b,
		"%" => a % b,
		"&" => a & b,
		"|" => a | b,
		"^" => a ^ b,
		"add_sat" => a.saturating_add(b),
		"sub_sat" => a.saturating_sub(b),
		"mul_sat" => a.saturating_mul(b),
		"div_sat" => a.saturating_div(b),
		"gcd" => a.gcd(b),
		"lcm" => a.lcm(b),
		"midpoint" => a.midpoint(b),
		"divrem" => {
			let DivRem { quot, rem } = a.div_rem(b);
			return Ok(format!("{} {}", render(quot)?, render(rem)?));
		},
		"cmp" => {
			return Ok(match a.cmp(&b) {
				Ordering::Less => "<",
				Ordering::Equal => "=",
				Ordering::Greater => ">",
			}
			.to_string());
		},
		_ => return Err(CalcError::UnknownOp(op.to_string())),
	};
	render(result)
}

fn command() -> Command {
	Command::new("int128calc")
		.about("128-bit integer calculator")
		.arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::Count).help("More log output, repeat for more"))
		.arg(
			Arg::new("signed")
				.short('s')
				.long("signed")
				.action(ArgAction::SetTrue)
				.help("Treat the operands as signed two's-complement values"),
		)
		.arg(
			Arg::new("radix")
				.short('r')
				.long("radix")
				.value_parser(value_parser!(u32).range(2..=36))
				.default_value("10")
				.help("Radix of the operands and of the result"),
		)
		.arg(Arg::new("lhs").required(true).allow_hyphen_values(true))
		.arg(Arg::new("op").required(true).allow_hyphen_values(true).help(OPS.join(" ")))
		.arg(Arg::new("rhs").required(true).allow_hyphen_values(true))
}

fn positional<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
	matches.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

fn run(matches: &ArgMatches) -> Result<String, CalcError> {
	let radix = matches.get_one::<u32>("radix").copied().unwrap_or(10);
	let (lhs, op, rhs) = (positional(matches, "lhs"), positional(matches, "op"), positional(matches, "rhs"));

	if matches.get_flag("signed") {
		evaluate::<Int128>(lhs, op, rhs, radix)
	} else {
		evaluate::<Uint128>(lhs, op, rhs, radix)
	}
}

fn main() -> ExitCode {
	let matches = command().get_matches();

	let verbosity = matches.get_count("verbose") as usize;
	if let Err(err) = stderrlog::new().module(module_path!()).module("int128").verbosity(verbosity).init() {
		eprintln!("int128calc: cannot set up logging: {err}");
	}

	match run(&matches) {
		Ok(out) => {
			println!("{out}");
			ExitCode::SUCCESS
		},
		Err(err) => {
			eprintln!("int128calc: {err}");
			ExitCode::from(2)
		},
	}
}
