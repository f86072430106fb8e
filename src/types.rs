//! Global type definitions.

use thiserror::Error;

pub type WeekdayName = &'static str;

/// Day names indexed by day number. Slot 0 is never a valid lookup target.
pub static WEEKDAY_TABLE: [Option<WeekdayName>; 8] = [
	None,
	Some("monday"),
	Some("tuesday"),
	Some("wednesday"),
	Some("thursday"),
	Some("friday"),
	Some("saturday"),
	Some("sunday"),
];

/// Raised when the day argument is missing or rejected. Its display form is the usage line.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{program} [1-7]")]
pub struct UsageError {
	pub program: String,
}

impl UsageError {
	pub fn new(program: &str) -> Self {
		Self {
			program: program.to_string(),
		}
	}
}
