use log::debug;
use serde::Deserialize;

use pkgq::{AuthConfigs, ComponentType};

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ResolvedConfig};
use super::util::split_package;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) source: Option<String>,
	pub(super) types: Option<Vec<String>>,
	pub(super) use_cache: Option<bool>,
	pub(super) all: Option<bool>,
	pub(super) no_manifest_package: Option<bool>,
	pub(super) no_oci_package: Option<bool>,
	pub(super) auth: Option<AuthConfigs>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(source) = cli.source.clone() {
			self.source = Some(source);
		}
		if let Some(types) = &cli.types {
			self.types = Some(types.iter().map(|ty| ty.as_str().to_string()).collect());
		}
		if let Some(value) = cli.cache {
			self.use_cache = Some(value);
		}
		if cli.all {
			self.all = Some(true);
		}
		if cli.no_manifest {
			self.no_manifest_package = Some(true);
		}
		if cli.no_oci {
			self.no_oci_package = Some(true);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, ConfigError> {
		let types = self
			.types
			.unwrap_or_default()
			.into_iter()
			.map(|tag| {
				tag.parse::<ComponentType>()
					.map_err(|err| ConfigError::invalid("types", tag.clone(), err.to_string()))
			})
			.collect::<Result<Vec<_>, _>>()?;

		if let Some(auths) = &self.auth {
			if let Some(domain) = auths.keys().find(|domain| domain.trim().is_empty()) {
				return Err(ConfigError::invalid(
					"auth",
					domain.clone(),
					"domain names must not be empty",
				));
			}
			debug!("loaded credentials for {} domain(s)", auths.len());
		}

		let (name, version) = cli
			.package
			.as_deref()
			.map(split_package)
			.unwrap_or_default();

		Ok(ResolvedConfig {
			source: self.source.unwrap_or_default(),
			types,
			name,
			version,
			use_cache: self.use_cache.unwrap_or(false),
			all: self.all.unwrap_or(false),
			no_manifest_package: self.no_manifest_package.unwrap_or(false),
			no_oci_package: self.no_oci_package.unwrap_or(false),
			auths: self.auth,
		})
	}
}
