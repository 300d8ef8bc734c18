use log::{debug, trace};
use pkgq::{
	Query, QueryOption, with_all, with_auth_config, with_cache, with_name,
	with_no_manifest_package, with_no_oci_package, with_source, with_types, with_version,
};

use crate::settings::ResolvedConfig;

/// Turns resolved settings into a finalized [`Query`].
pub(crate) struct QueryWorkflow {
	config: ResolvedConfig,
}

impl QueryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// One option per configured field, in a fixed order.
	fn options(self) -> Vec<QueryOption> {
		let ResolvedConfig {
			source,
			types,
			name,
			version,
			use_cache,
			all,
			no_manifest_package,
			no_oci_package,
			auths,
		} = self.config;

		vec![
			with_source(source),
			with_types(types),
			with_name(name),
			with_version(version),
			with_cache(use_cache),
			with_auth_config(auths),
			with_all(all),
			with_no_manifest_package(no_manifest_package),
			with_no_oci_package(no_oci_package),
		]
	}

	pub(crate) fn run(self) -> Query {
		let query = Query::new(self.options());
		debug!("query: {query}");
		trace!("query details: {query:?}");
		query
	}
}
