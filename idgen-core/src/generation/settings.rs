use serde::{Deserialize, Serialize};

use crate::error::IdGenError;

/// Default iteration ceiling of a generation run.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Default number of ids requested.
pub const DEFAULT_TARGET_COUNT: usize = 1;

/// Parameters of one generation run.
///
/// # Responsibilities
/// - Track the number of ids requested and the optional RNG seed
/// - Keep the attempt ceiling valid (strictly positive)
///
/// Deserializes from partial documents: missing fields take their defaults,
/// and an invalid `max_attempts` is rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawSettings")]
pub struct GenerationSettings {
	/// Number of unique ids to produce.
	pub target_count: usize,

	/// Seed for the random elements; `None` seeds from the thread RNG.
	pub seed: Option<u64>,

	/// Maximum number of candidates built before giving up.
	max_attempts: usize,
}

impl Default for GenerationSettings {
	fn default() -> Self {
		Self {
			target_count: DEFAULT_TARGET_COUNT,
			seed: None,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl GenerationSettings {
	pub fn new(target_count: usize) -> Self {
		Self {
			target_count,
			..Self::default()
		}
	}

	/// Returns the attempt ceiling.
	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Sets the attempt ceiling.
	///
	/// # Errors
	/// Returns `InvalidSetting` if `max_attempts` is zero.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<(), IdGenError> {
		if max_attempts == 0 {
			return Err(IdGenError::InvalidSetting("max_attempts must be greater than 0".to_owned()));
		}
		self.max_attempts = max_attempts;
		Ok(())
	}
}

/// Unvalidated mirror of `GenerationSettings` used for deserialization.
#[derive(Deserialize)]
#[serde(default)]
struct RawSettings {
	target_count: usize,
	seed: Option<u64>,
	max_attempts: usize,
}

impl Default for RawSettings {
	fn default() -> Self {
		let defaults = GenerationSettings::default();
		Self {
			target_count: defaults.target_count,
			seed: defaults.seed,
			max_attempts: defaults.max_attempts,
		}
	}
}

impl TryFrom<RawSettings> for GenerationSettings {
	type Error = IdGenError;

	fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
		let mut settings = Self {
			target_count: raw.target_count,
			seed: raw.seed,
			..Self::default()
		};
		settings.set_max_attempts(raw.max_attempts)?;
		Ok(settings)
	}
}
