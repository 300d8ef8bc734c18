use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Credentials for a catalog domain, keyed by domain name.
pub type AuthConfigs = IndexMap<String, AuthConfig>;

/// Authentication record for a single catalog domain.
///
/// The record is passed through to the catalog untouched. It deliberately has
/// no `Serialize` implementation and its `Debug` output hides the token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
	pub user: String,
	pub token: String,
	pub endpoint: String,
	pub verify_ssl: bool,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			user: String::new(),
			token: String::new(),
			endpoint: String::new(),
			verify_ssl: true,
		}
	}
}

impl AuthConfig {
	/// Create a record for `user` authenticating with `token`.
	#[must_use]
	pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			user: user.into(),
			token: token.into(),
			..Self::default()
		}
	}

	/// Set the endpoint the credentials are presented to.
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Toggle TLS certificate verification.
	#[must_use]
	pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
		self.verify_ssl = verify_ssl;
		self
	}
}

impl fmt::Debug for AuthConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let token = if self.token.is_empty() { "" } else { "<redacted>" };
		f.debug_struct("AuthConfig")
			.field("user", &self.user)
			.field("token", &token)
			.field("endpoint", &self.endpoint)
			.field("verify_ssl", &self.verify_ssl)
			.finish()
	}
}
