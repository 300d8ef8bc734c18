//! Query descriptors for searching a package catalog.
//!
//! A [`Query`] is assembled from a list of [`QueryOption`] values and is
//! read-only afterwards. Catalog implementations consume it through its
//! accessors; logs and user-facing output use its [`Display`](std::fmt::Display)
//! form.

pub mod error;
pub mod fields;
pub mod options;
pub mod query;
mod render;
pub mod types;

pub use error::ParseComponentTypeError;
pub use fields::{FieldValue, Fields};
pub use options::{
	QueryOption, with_all, with_auth_config, with_cache, with_name, with_no_manifest_package,
	with_no_oci_package, with_source, with_types, with_version,
};
pub use query::Query;
pub use types::{AuthConfig, AuthConfigs, ComponentType};
