use crate::fields::{self, FieldValue, Fields};
use crate::options::QueryOption;
use crate::types::{AuthConfig, AuthConfigs, ComponentType};

/// Request describing which packages a catalog should search for, fetch or prune.
///
/// A query is assembled once from a list of [`QueryOption`]s and cannot be
/// changed afterwards. Every accessor hands out a shared borrow of the stored
/// value, so the collections returned by [`types`](Self::types) and
/// [`auths`](Self::auths) are read-only views rather than copies.
///
/// No combination of fields is rejected. Whether `all` together with a
/// specific name makes sense is up to the catalog interpreting the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	/// Where the package originates from.
	pub(crate) source: String,

	/// Package kinds to consider; empty means any kind.
	pub(crate) types: Vec<ComponentType>,

	pub(crate) name: String,

	pub(crate) version: String,

	/// Whether the catalog may answer from locally cached data.
	pub(crate) use_cache: bool,

	/// Per-domain credentials. `None` means no authentication is required or
	/// available, which differs from an empty mapping.
	pub(crate) auths: Option<AuthConfigs>,

	/// Select every package. Used when pruning everything on the host.
	pub(crate) all: bool,

	/// Keep manifest packages out of a bulk selection.
	pub(crate) no_manifest_package: bool,

	/// Keep OCI packages out of a bulk selection.
	pub(crate) no_oci_package: bool,
}

impl Query {
	/// Build a query by applying `options` in order to an empty query.
	///
	/// Later options override earlier ones that target the same field.
	#[must_use]
	pub fn new<I>(options: I) -> Self
	where
		I: IntoIterator<Item = QueryOption>,
	{
		let mut query = Self::default();
		for option in options {
			option.apply(&mut query);
		}
		query
	}

	/// Origin of the package.
	#[must_use]
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Component types the package may have.
	#[must_use]
	pub fn types(&self) -> &[ComponentType] {
		&self.types
	}

	/// Name of the package.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Version of the package.
	#[must_use]
	pub fn version(&self) -> &str {
		&self.version
	}

	/// Whether the catalog should use any existing cache.
	#[must_use]
	pub fn use_cache(&self) -> bool {
		self.use_cache
	}

	/// Authentication configuration keyed by domain, or `None` when no
	/// authentication was supplied.
	#[must_use]
	pub fn auths(&self) -> Option<&AuthConfigs> {
		self.auths.as_ref()
	}

	/// Credentials for a single domain, if any.
	#[must_use]
	pub fn auth(&self, domain: &str) -> Option<&AuthConfig> {
		self.auths.as_ref()?.get(domain)
	}

	#[must_use]
	pub fn all(&self) -> bool {
		self.all
	}

	#[must_use]
	pub fn no_manifest_package(&self) -> bool {
		self.no_manifest_package
	}

	#[must_use]
	pub fn no_oci_package(&self) -> bool {
		self.no_oci_package
	}

	/// Enumerate the searchable fields under stable keys.
	///
	/// The `auth` entry is a flag reporting whether an auth mapping is
	/// present (even an empty one); the credentials themselves are omitted.
	#[must_use]
	pub fn fields(&self) -> Fields<'_> {
		let mut map = Fields::with_capacity(6);
		map.insert(fields::NAME, FieldValue::Text(&self.name));
		map.insert(fields::VERSION, FieldValue::Text(&self.version));
		map.insert(fields::SOURCE, FieldValue::Text(&self.source));
		map.insert(fields::TYPES, FieldValue::Types(&self.types));
		map.insert(fields::CACHE, FieldValue::Flag(self.use_cache));
		map.insert(fields::AUTH, FieldValue::Flag(self.auths.is_some()));
		map
	}
}

impl FromIterator<QueryOption> for Query {
	fn from_iter<I: IntoIterator<Item = QueryOption>>(options: I) -> Self {
		Self::new(options)
	}
}
