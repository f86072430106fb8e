//! Weekday lookup behind a single positional argument.

use std::borrow::Cow;
use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;

use crate::types::{UsageError, WeekdayName, WEEKDAY_TABLE};

/// Run
///
/// Look up the day named by the first positional argument in `args` and write it to `out`, or
/// write the usage line to `err` if the argument is missing or rejected. Exactly one of the two
/// writers is touched. Only write failures are returned as errors.
pub fn run<W: Write, E: Write>(args: &[OsString], out: &mut W, err: &mut E) -> Result<()> {
	match lookup(args) {
		Ok(name) => writeln!(out, "{}", name)?,
		Err(usage) => writeln!(err, "{}", usage)?,
	}
	Ok(())
}

/// Lookup
///
/// `args` is the full argument list including the program name, taken as raw OS strings so
/// arguments that aren't valid UTF-8 still get looked up (or ignored). Arguments after the first
/// positional one are ignored.
pub fn lookup(args: &[OsString]) -> Result<WeekdayName, UsageError> {
	let program = args
		.first()
		.map_or(Cow::Borrowed(env!("CARGO_PKG_NAME")), |p| p.to_string_lossy());
	let arg = args.get(1).ok_or_else(|| UsageError::new(&program))?;

	let nth = parse_prefix(arg.as_encoded_bytes());
	log::debug!("Parsed '{}' as {}", arg.to_string_lossy(), nth);
	if !is_valid(nth) {
		log::debug!("Rejecting day {}", nth);
		return Err(UsageError::new(&program));
	}
	// NB can't fail once `is_valid` holds, slots 1 to 6 are always named
	day_name(nth).ok_or_else(|| UsageError::new(&program))
}

/// Parse Prefix
///
/// Best-effort integer parse over raw bytes: leading whitespace (vertical tab included) is
/// skipped, one optional sign is accepted and then leading digits are consumed. Anything without
/// a numeric prefix is 0. Results saturate at the `i32` bounds.
pub fn parse_prefix(arg: &[u8]) -> i64 {
	let start = arg
		.iter()
		.position(|b| !(b.is_ascii_whitespace() || *b == b'\x0b'))
		.unwrap_or(arg.len());
	let trimmed = &arg[start..];
	let (negative, digits) = match trimmed.first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let mut value: i64 = 0;
	for digit in digits.iter().take_while(|b| b.is_ascii_digit()) {
		value = value
			.saturating_mul(10)
			.saturating_add(i64::from(digit - b'0'));
	}
	let value = if negative { -value } else { value };
	value.clamp(i64::from(i32::MIN), i64::from(i32::MAX))
}

/// Is Valid
///
/// NB this accepts 1 through 6 only, so "sunday" is never printed even though the usage line
/// advertises `[1-7]`.
pub fn is_valid(nth: i64) -> bool {
	nth < 7 && nth > 0
}

/// Day Name
///
/// Table lookup by day number, `None` for slot 0 or anything outside the table.
pub fn day_name(nth: i64) -> Option<WeekdayName> {
	usize::try_from(nth)
		.ok()
		.and_then(|i| WEEKDAY_TABLE.get(i).copied().flatten())
}
