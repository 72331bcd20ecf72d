use std::path::Path;

use super::Filter;
use crate::error::IdGenError;
use crate::io::LineSource;

/// Default location of the blacklist file.
pub const DEFAULT_BLACKLIST_FILE: &str = "blacklist";

/// Rejects every candidate that contains a blacklisted word.
///
/// Matching is a plain substring test, so the word `adm` also rejects
/// `xadmin`.
#[derive(Clone, Debug)]
pub struct BlacklistFilter {
	id: String,
	description: String,
	words: Vec<String>,
}

impl Default for BlacklistFilter {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl BlacklistFilter {
	pub fn new(words: Vec<String>) -> Self {
		Self {
			id: "blacklist".to_owned(),
			description: "Rejects ids containing a blacklisted word".to_owned(),
			words,
		}
	}

	/// Builds a filter from a file holding one word per line.
	///
	/// Blank lines are skipped.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IdGenError> {
		let mut filter = Self::default();
		let mut source = LineSource::open(path)?;
		while let Some(line) = source.next_line()? {
			filter.add_word(&line);
		}
		log::debug!("loaded {} blacklisted word(s) from {}", filter.words.len(), source.path().display());
		source.close();
		Ok(filter)
	}

	/// Adds a word, returning `false` if it was empty and thus ignored.
	pub fn add_word(&mut self, word: &str) -> bool {
		let word = word.trim();
		if word.is_empty() {
			return false;
		}
		log::trace!("added blacklisted word '{word}'");
		self.words.push(word.to_owned());
		true
	}

	/// Removes a word, returning `true` if it was present.
	pub fn remove_word(&mut self, word: &str) -> bool {
		match self.words.iter().position(|w| w == word) {
			Some(index) => {
				self.words.remove(index);
				true
			}
			None => false,
		}
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}
}

impl Filter for BlacklistFilter {
	fn id(&self) -> &str {
		&self.id
	}

	fn description(&self) -> &str {
		&self.description
	}

	fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError> {
		match self.words.iter().find(|word| candidate.contains(word.as_str())) {
			Some(word) => {
				log::trace!("id '{candidate}' matched blacklist entry '{word}'");
				Ok(false)
			}
			None => Ok(true),
		}
	}
}
