use regex::Regex;

use super::Filter;
use crate::error::IdGenError;

/// Rejects candidates matching a regular expression.
#[derive(Clone, Debug)]
pub struct RegexFilter {
	id: String,
	description: String,
	pattern: Regex,
}

impl RegexFilter {
	/// Compiles `pattern`; the filter id embeds it so several patterns can
	/// live in one chain.
	pub fn new(pattern: &str) -> Result<Self, IdGenError> {
		Ok(Self {
			id: format!("regex:{pattern}"),
			description: format!("Rejects ids matching /{pattern}/"),
			pattern: Regex::new(pattern)?,
		})
	}
}

impl Filter for RegexFilter {
	fn id(&self) -> &str {
		&self.id
	}

	fn description(&self) -> &str {
		&self.description
	}

	fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError> {
		Ok(!self.pattern.is_match(candidate))
	}
}
