use std::fmt::Write;

use super::ResolvedConfig;

/// Render the effective configuration. Auth tokens are never included.
pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Source: {}", or_any(&config.source));
	if config.types.is_empty() {
		let _ = writeln!(out, "  Types: (any)");
	} else {
		let labels: Vec<&str> = config.types.iter().map(|ty| ty.plural()).collect();
		let _ = writeln!(out, "  Types: {}", labels.join(", "));
	}
	let _ = writeln!(out, "  Name: {}", or_any(&config.name));
	let _ = writeln!(out, "  Version: {}", or_any(&config.version));
	let _ = writeln!(out, "  Use cache: {}", bool_to_word(config.use_cache));
	let _ = writeln!(out, "  Select all: {}", bool_to_word(config.all));
	let _ = writeln!(
		out,
		"  Skip manifest packages: {}",
		bool_to_word(config.no_manifest_package)
	);
	let _ = writeln!(
		out,
		"  Skip OCI packages: {}",
		bool_to_word(config.no_oci_package)
	);
	match &config.auths {
		None => {
			let _ = writeln!(out, "  Auth: (none)");
		}
		Some(auths) if auths.is_empty() => {
			let _ = writeln!(out, "  Auth: (empty)");
		}
		Some(auths) => {
			let _ = writeln!(out, "  Auth:");
			for (domain, auth) in auths {
				let user = if auth.user.is_empty() { "(anonymous)" } else { auth.user.as_str() };
				let tls = if auth.verify_ssl { "" } else { ", TLS unverified" };
				let _ = writeln!(out, "    {domain}: {user}{tls}");
			}
		}
	}
	out
}

fn or_any(value: &str) -> &str {
	if value.is_empty() { "(any)" } else { value }
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
