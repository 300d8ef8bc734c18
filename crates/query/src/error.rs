use thiserror::Error;

/// Returned when text does not name a known [`ComponentType`](crate::ComponentType).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown component type '{value}' (expected one of: unknown, core, arch, plat, lib, app)")]
pub struct ParseComponentTypeError {
	pub value: String,
}

impl ParseComponentTypeError {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}
}
