//! Options that set individual [`Query`] parameters.
//!
//! Each option writes exactly one field and leaves the others alone, so
//! options for different fields can be supplied in any order. Supplying two
//! options for the same field keeps the last one.

use std::fmt;

use crate::query::Query;
use crate::types::{AuthConfigs, ComponentType};

/// A deferred write of one query parameter, consumed by [`Query::new`].
pub struct QueryOption(Box<dyn FnOnce(&mut Query) + Send>);

impl QueryOption {
	fn new(apply: impl FnOnce(&mut Query) + Send + 'static) -> Self {
		Self(Box::new(apply))
	}

	pub(crate) fn apply(self, query: &mut Query) {
		(self.0)(query);
	}
}

impl fmt::Debug for QueryOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("QueryOption")
	}
}

/// Set the origin source of the package.
pub fn with_source(source: impl Into<String>) -> QueryOption {
	let source = source.into();
	QueryOption::new(move |query| query.source = source)
}

/// Set the component types to search for, replacing any earlier list.
pub fn with_types<I>(types: I) -> QueryOption
where
	I: IntoIterator<Item = ComponentType>,
{
	let types: Vec<ComponentType> = types.into_iter().collect();
	QueryOption::new(move |query| query.types = types)
}

/// Set the name of the package.
pub fn with_name(name: impl Into<String>) -> QueryOption {
	let name = name.into();
	QueryOption::new(move |query| query.name = name)
}

/// Set the version of the package.
pub fn with_version(version: impl Into<String>) -> QueryOption {
	let version = version.into();
	QueryOption::new(move |query| query.version = version)
}

/// Set whether locally cached data may answer the query.
pub fn with_cache(use_cache: bool) -> QueryOption {
	QueryOption::new(move |query| query.use_cache = use_cache)
}

/// Set the authentication required when making the query. `None` clears it.
pub fn with_auth_config(auths: Option<AuthConfigs>) -> QueryOption {
	QueryOption::new(move |query| query.auths = auths)
}

pub fn with_all(all: bool) -> QueryOption {
	QueryOption::new(move |query| query.all = all)
}

pub fn with_no_manifest_package(no_manifest_package: bool) -> QueryOption {
	QueryOption::new(move |query| query.no_manifest_package = no_manifest_package)
}

pub fn with_no_oci_package(no_oci_package: bool) -> QueryOption {
	QueryOption::new(move |query| query.no_oci_package = no_oci_package)
}
