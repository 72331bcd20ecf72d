//! Acceptance filters applied to every generated candidate.
//!
//! A [`Filter`] is a named predicate; a [`FilterChain`] accepts a candidate
//! only if every registered filter does, stopping at the first rejection.

/// Rejects candidates containing a blacklisted word.
pub mod blacklist;

/// Rejects candidates that already exist as system accounts.
pub mod passwd;

/// Rejects candidates matching a regular expression.
pub mod pattern;

/// Delegates the decision to an external command.
pub mod shell_cmd;

pub use blacklist::BlacklistFilter;
pub use passwd::PasswdFilter;
pub use pattern::RegexFilter;
pub use shell_cmd::ShellCmdFilter;

use crate::error::IdGenError;

/// A named predicate over candidate strings.
///
/// `apply` takes `&mut self` so filters may keep state (caches, counters).
/// An `Err` is fatal for the generation session.
pub trait Filter {
	/// Identity of the filter inside a chain.
	fn id(&self) -> &str;

	/// Human readable description.
	fn description(&self) -> &str;

	/// Returns `true` if `candidate` is acceptable.
	fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError>;

	/// Returns the acceptable candidates, preserving order.
	fn apply_all(&mut self, candidates: &[String]) -> Result<Vec<String>, IdGenError> {
		let mut suitable = Vec::new();
		for candidate in candidates {
			if self.apply(candidate)? {
				suitable.push(candidate.clone());
			}
		}
		Ok(suitable)
	}
}

/// Ordered collection of filters, keyed by filter id.
#[derive(Default)]
pub struct FilterChain {
	filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a filter.
	///
	/// A filter with the same id is replaced in place, keeping its position.
	pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
		log::trace!("adding filter {} - {}", filter.id(), filter.description());
		match self.filters.iter_mut().find(|f| f.id() == filter.id()) {
			Some(existing) => *existing = filter,
			None => self.filters.push(filter),
		}
	}

	/// Removes and returns the filter registered under `id`.
	pub fn remove_filter(&mut self, id: &str) -> Option<Box<dyn Filter>> {
		let index = self.filters.iter().position(|f| f.id() == id)?;
		Some(self.filters.remove(index))
	}

	pub fn clear(&mut self) {
		self.filters.clear();
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Ids of the registered filters, in application order.
	pub fn ids(&self) -> Vec<&str> {
		self.filters.iter().map(|f| f.id()).collect()
	}

	/// Accepts `candidate` iff every filter accepts it.
	///
	/// Filters after the first rejecting one are not called.
	pub fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError> {
		for filter in &mut self.filters {
			if !filter.apply(candidate)? {
				log::trace!("candidate '{candidate}' rejected by filter {}", filter.id());
				return Ok(false);
			}
		}
		Ok(true)
	}

	/// Returns the candidates accepted by the whole chain, preserving order.
	pub fn apply_all(&mut self, candidates: &[String]) -> Result<Vec<String>, IdGenError> {
		let mut suitable = Vec::new();
		for candidate in candidates {
			if self.apply(candidate)? {
				suitable.push(candidate.clone());
			}
		}
		Ok(suitable)
	}
}

impl std::fmt::Debug for FilterChain {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FilterChain").field("filters", &self.ids()).finish()
	}
}
