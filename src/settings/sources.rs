use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use log::debug;

use crate::cli::CliArgs;
use pkgq::app_dirs;

/// Layer the default config files, explicit `--config` files and the process
/// environment, in increasing precedence.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	build_config_from(cli, &default_config_files(), environment())
}

/// `PKGQ__<KEY>` variables; `types` is split on commas.
fn environment() -> Environment {
	Environment::with_prefix("pkgq")
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("types")
}

fn build_config_from(cli: &CliArgs, defaults: &[PathBuf], env: Environment) -> Result<Config> {
	let mut builder = Config::builder();

	if cli.no_config {
		debug!("skipping {} default config location(s)", defaults.len());
	} else {
		for path in defaults {
			debug!("considering optional config file {}", path.display());
			builder = builder.add_source(File::from(path.clone()).required(false));
		}
	}

	for path in &cli.config {
		debug!("loading config file {}", path.display());
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder
		.add_source(env)
		.build()
		.context("failed to build configuration")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pkgq.toml"));
		files.push(current_dir.join("pkgq.toml"));
	}

	files
}
