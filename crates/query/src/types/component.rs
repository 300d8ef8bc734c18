use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseComponentTypeError;

/// Kind of package tracked by a catalog, used as a query filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
	Unknown,
	Core,
	Arch,
	Plat,
	Lib,
	App,
}

impl ComponentType {
	/// Every concrete component type, in catalog display order.
	pub const ALL: [ComponentType; 5] = [
		ComponentType::Core,
		ComponentType::Arch,
		ComponentType::Plat,
		ComponentType::Lib,
		ComponentType::App,
	];

	/// Canonical lowercase tag, as used in rendered queries.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			ComponentType::Unknown => "unknown",
			ComponentType::Core => "core",
			ComponentType::Arch => "arch",
			ComponentType::Plat => "plat",
			ComponentType::Lib => "lib",
			ComponentType::App => "app",
		}
	}

	/// Plural label for summaries, e.g. `libraries`.
	#[must_use]
	pub const fn plural(self) -> &'static str {
		match self {
			ComponentType::Unknown => "unknown",
			ComponentType::Core => "cores",
			ComponentType::Arch => "architectures",
			ComponentType::Plat => "platforms",
			ComponentType::Lib => "libraries",
			ComponentType::App => "applications",
		}
	}
}

impl fmt::Display for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ComponentType {
	type Err = ParseComponentTypeError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let tag = value.trim().to_ascii_lowercase();
		match tag.as_str() {
			"unknown" => Ok(ComponentType::Unknown),
			"core" => Ok(ComponentType::Core),
			"arch" => Ok(ComponentType::Arch),
			"plat" => Ok(ComponentType::Plat),
			"lib" => Ok(ComponentType::Lib),
			"app" => Ok(ComponentType::App),
			_ => Err(ParseComponentTypeError::new(value)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tags_parse_back_to_their_variant() {
		for ty in ComponentType::ALL {
			assert_eq!(ty.as_str().parse::<ComponentType>(), Ok(ty));
		}
	}

	#[test]
	fn parsing_ignores_case_and_whitespace() {
		assert_eq!(" LIB ".parse::<ComponentType>(), Ok(ComponentType::Lib));
		assert_eq!("App".parse::<ComponentType>(), Ok(ComponentType::App));
	}

	#[test]
	fn unknown_tags_are_rejected_with_the_input_text() {
		let err = "kernel".parse::<ComponentType>().unwrap_err();
		assert_eq!(err.value, "kernel");
		assert!(err.to_string().contains("'kernel'"));
	}

	#[test]
	fn unknown_is_an_accepted_tag_and_listed_in_errors() {
		assert_eq!("unknown".parse::<ComponentType>(), Ok(ComponentType::Unknown));
		assert_eq!(" Unknown".parse::<ComponentType>(), Ok(ComponentType::Unknown));

		let message = "kernel".parse::<ComponentType>().unwrap_err().to_string();
		for tag in ["unknown", "core", "arch", "plat", "lib", "app"] {
			assert!(message.contains(tag), "{message} should list {tag}");
		}
	}

	#[test]
	fn serde_uses_lowercase_tags() {
		let json = serde_json::to_string(&[ComponentType::Lib, ComponentType::Plat]).unwrap();
		assert_eq!(json, r#"["lib","plat"]"#);
		let parsed: ComponentType = serde_json::from_str(r#""arch""#).unwrap();
		assert_eq!(parsed, ComponentType::Arch);
	}

	#[test]
	fn all_excludes_unknown() {
		assert!(!ComponentType::ALL.contains(&ComponentType::Unknown));
		assert_eq!(ComponentType::Lib.plural(), "libraries");
	}
}
