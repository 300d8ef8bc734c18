//! Generic field enumeration for [`Query`](crate::Query) values.
//!
//! Consumers that log or display queries without knowing their concrete shape
//! iterate these fields instead of calling each accessor. Credentials are
//! never exposed here: the auth entry only records whether any were supplied.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::ComponentType;

pub const NAME: &str = "name";
pub const VERSION: &str = "version";
pub const SOURCE: &str = "source";
pub const TYPES: &str = "types";
pub const CACHE: &str = "cache";
pub const AUTH: &str = "auth";

/// Field map returned by [`Query::fields`](crate::Query::fields), in a stable order.
pub type Fields<'a> = IndexMap<&'static str, FieldValue<'a>>;

/// Representative value of a single query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Types(&'a [ComponentType]),
	Flag(bool),
}

impl<'a> FieldValue<'a> {
	#[must_use]
	pub fn as_text(&self) -> Option<&'a str> {
		match *self {
			FieldValue::Text(text) => Some(text),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_types(&self) -> Option<&'a [ComponentType]> {
		match *self {
			FieldValue::Types(types) => Some(types),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_flag(&self) -> Option<bool> {
		match *self {
			FieldValue::Flag(flag) => Some(flag),
			_ => None,
		}
	}
}
