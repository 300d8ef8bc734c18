/// Split a `NAME[:VERSION]` package argument on its last colon.
///
/// Surrounding whitespace is trimmed; an empty side stays empty and so leaves
/// that query field unset.
pub(super) fn split_package(arg: &str) -> (String, String) {
	match arg.rsplit_once(':') {
		Some((name, version)) => (name.trim().to_string(), version.trim().to_string()),
		None => (arg.trim().to_string(), String::new()),
	}
}
