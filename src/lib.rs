//! Core crate exports for building and printing `pkgq` catalog queries.
//!
//! The query types live in the `pkgq-query` crate and are re-exported here so
//! embedders can depend on a single crate.

pub mod app_dirs;
pub mod logging;

pub use pkgq_query::{
	AuthConfig, AuthConfigs, ComponentType, FieldValue, Fields, ParseComponentTypeError, Query,
	QueryOption, fields, with_all, with_auth_config, with_cache, with_name,
	with_no_manifest_package, with_no_oci_package, with_source, with_types, with_version,
};
