use anyhow::Result;
use pkgq::{Fields, Query};
use serde::Serialize;

/// JSON document printed by `--output json`. Field order follows
/// [`Query::fields`].
#[derive(Serialize)]
struct QueryPayload<'a> {
	query: String,
	fields: Fields<'a>,
	selection: Selection,
}

#[derive(Serialize)]
struct Selection {
	all: bool,
	no_manifest_package: bool,
	no_oci_package: bool,
}

/// Print the canonical form of the query.
pub(crate) fn print_plain(query: &Query) {
	println!("{query}");
}

/// Format the query as a JSON document. Credentials are reduced to the
/// presence flag carried by [`Query::fields`].
pub(crate) fn format_query_json(query: &Query) -> Result<String> {
	let payload = QueryPayload {
		query: query.to_string(),
		fields: query.fields(),
		selection: Selection {
			all: query.all(),
			no_manifest_package: query.no_manifest_package(),
			no_oci_package: query.no_oci_package(),
		},
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the query.
pub(crate) fn print_json(query: &Query) -> Result<()> {
	println!("{}", format_query_json(query)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use pkgq::{
		AuthConfig, AuthConfigs, ComponentType, with_all, with_auth_config, with_cache, with_name,
		with_source, with_types, with_version,
	};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_rendered_query_and_fields() {
		let query = Query::new([
			with_types([ComponentType::Lib]),
			with_name("musl"),
			with_version("1.2.3"),
			with_all(true),
		]);

		let json = format_query_json(&query).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "lib-musl:1.2.3");
		assert_eq!(value["fields"]["name"], "musl");
		assert_eq!(value["fields"]["types"][0], "lib");
		assert_eq!(value["fields"]["cache"], false);
		assert_eq!(value["selection"]["all"], true);
		assert_eq!(value["selection"]["no_oci_package"], false);
	}

	#[test]
	fn json_format_keeps_field_order() {
		let query = Query::new([
			with_cache(true),
			with_source("oci"),
			with_version("1.25"),
			with_name("nginx"),
		]);

		let json = format_query_json(&query).expect("json");
		let position = |key: &str| {
			json.find(&format!("\"{key}\""))
				.unwrap_or_else(|| panic!("{key} missing from {json}"))
		};

		let top = ["query", "fields", "selection"].map(position);
		assert!(top.is_sorted(), "{json}");
		let fields = ["name", "version", "source", "types", "cache", "auth"].map(position);
		assert!(fields.is_sorted(), "{json}");
		let selection = ["all", "no_manifest_package", "no_oci_package"].map(position);
		assert!(selection.is_sorted(), "{json}");
	}

	#[test]
	fn json_format_hides_credentials() {
		let mut auths = AuthConfigs::new();
		auths.insert("ghcr.io".into(), AuthConfig::new("octocat", "ghp_secret"));
		let query = Query::new([with_auth_config(Some(auths))]);

		let json = format_query_json(&query).expect("json");
		assert!(!json.contains("ghp_secret"));
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["fields"]["auth"], true);
	}
}
