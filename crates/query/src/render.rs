use std::fmt;

use crate::query::Query;

/// Canonical `[type-|{type, type}-]name[:version]` form, with `*` standing in
/// for a missing name. Only types, name and version take part.
impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.types.as_slice() {
			[] => {}
			[only] => write!(f, "{only}-")?,
			many => {
				let tags: Vec<&str> = many.iter().map(|ty| ty.as_str()).collect();
				write!(f, "{{{}}}-", tags.join(", "))?;
			}
		}

		if self.name.is_empty() {
			f.write_str("*")?;
		} else {
			f.write_str(&self.name)?;
		}

		if !self.version.is_empty() {
			write!(f, ":{}", self.version)?;
		}

		Ok(())
	}
}
