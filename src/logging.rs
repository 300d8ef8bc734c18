//! Stderr diagnostics through `tracing-subscriber`.
//!
//! Library code only uses the `log` macros; the subscriber's `log` bridge
//! picks them up once the binary calls [`initialize`].

use std::error::Error;

use tracing_subscriber::filter::LevelFilter;

/// Map a `-v` count onto a level filter. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Install the global stderr subscriber. Fails if one is already installed.
pub fn initialize(verbosity: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
	tracing_subscriber::fmt()
		.with_max_level(level_for(verbosity))
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.try_init()
}
