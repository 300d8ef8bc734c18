use pkgq::{AuthConfigs, ComponentType};

mod errors;
mod summary;

pub(crate) use errors::ConfigError;

/// Query parameters derived from config files, environment and CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
	pub source: String,
	pub types: Vec<ComponentType>,
	pub name: String,
	pub version: String,
	pub use_cache: bool,
	pub all: bool,
	pub no_manifest_package: bool,
	pub no_oci_package: bool,
	/// `None` when no `auth` table was configured at all.
	pub auths: Option<AuthConfigs>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
