//! Configuration loading and resolution utilities.
//!
//! [`load`] merges config files, environment and CLI flags into a
//! [`ResolvedConfig`] that the query workflow consumes.

mod raw;
mod resolved;
mod sources;
mod util;

use anyhow::{Context, Result};

use crate::cli::CliArgs;

use raw::RawConfig;
pub use resolved::ResolvedConfig;

/// Deserialize the layered sources, let CLI flags win, then validate.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve(cli)?)
}
