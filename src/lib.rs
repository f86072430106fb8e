//! Map a day number (1 being Monday) to its English weekday name.

pub mod lookup;
pub mod types;
