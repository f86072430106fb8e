//! Program entrypoint.

use std::env;
use std::ffi::OsString;
use std::io;

use anyhow::Result;
use weekday::lookup;

/// Always exits successfully unless writing to the standard streams fails. A missing or
/// rejected argument only produces the usage line on stderr.
fn main() -> Result<()> {
	env_logger::init();
	let args: Vec<OsString> = env::args_os().collect();
	let mut out = io::stdout();
	let mut err = io::stderr();
	lookup::run(&args, &mut out, &mut err)
}
