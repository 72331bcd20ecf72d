use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::IdGenError;

/// Externally supplied data for template variables.
///
/// Maps a single lowercase letter (`a`..=`z`) to the string a fragment such as
/// `f`, `2f` or `f3+` works on, e.g. a first name, a surname or a pool of
/// characters to sample from.
///
/// # Invariants
/// - Every key is an ASCII lowercase letter
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "BTreeMap<char, String>", into = "BTreeMap<char, String>")]
pub struct VariableBindings {
	values: BTreeMap<char, String>,
}

impl VariableBindings {
	/// Creates an empty set of bindings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `value` to the variable `key`, replacing any previous value.
	///
	/// # Errors
	/// Returns `InvalidBindingKey` if `key` is not a lowercase ASCII letter.
	pub fn set(&mut self, key: char, value: &str) -> Result<(), IdGenError> {
		if !key.is_ascii_lowercase() {
			return Err(IdGenError::InvalidBindingKey(key.to_string()));
		}
		self.values.insert(key, value.to_owned());
		Ok(())
	}

	/// Builder-style variant of [`VariableBindings::set`].
	pub fn with(mut self, key: char, value: &str) -> Result<Self, IdGenError> {
		self.set(key, value)?;
		Ok(self)
	}

	/// Parses and applies an assignment of the form `a=value`.
	///
	/// The value may be empty and may itself contain `=`.
	pub fn parse_assignment(&mut self, assignment: &str) -> Result<(), IdGenError> {
		let (key, value) = assignment
			.split_once('=')
			.ok_or_else(|| IdGenError::InvalidBindingKey(assignment.to_owned()))?;

		let mut chars = key.chars();
		match (chars.next(), chars.next()) {
			(Some(k), None) => self.set(k, value),
			_ => Err(IdGenError::InvalidBindingKey(key.to_owned())),
		}
	}

	/// Returns the value bound to `key`, if any.
	pub fn get(&self, key: char) -> Option<&str> {
		self.values.get(&key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl TryFrom<BTreeMap<char, String>> for VariableBindings {
	type Error = IdGenError;

	fn try_from(values: BTreeMap<char, String>) -> Result<Self, Self::Error> {
		let mut bindings = Self::new();
		for (key, value) in &values {
			bindings.set(*key, value)?;
		}
		Ok(bindings)
	}
}

impl From<VariableBindings> for BTreeMap<char, String> {
	fn from(bindings: VariableBindings) -> Self {
		bindings.values
	}
}
