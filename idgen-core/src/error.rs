use std::io;
use std::path::PathBuf;

/// Every failure the generation pipeline can report.
///
/// All variants are fatal for the current session: the caller is expected to
/// stop and report. Partial fulfillment is *not* an error, it is carried by
/// [`crate::generation::Fulfillment`].
#[derive(Debug, thiserror::Error)]
pub enum IdGenError {
	/// A fragment matched none of the template forms.
	#[error("no template form matches fragment '{fragment}'")]
	NoMatchingPattern { fragment: String },

	/// A second counter fragment was found in one template.
	#[error("only one counter element is allowed per template (second one: '{fragment}')")]
	DuplicateCounter { fragment: String },

	/// A fragment references a variable that was never bound.
	#[error("fragment '{fragment}' references unbound variable '{key}'")]
	UnboundVariable { key: char, fragment: String },

	/// A binding key is not a single lowercase ASCII letter.
	#[error("invalid variable name '{0}', expected a single lowercase letter")]
	InvalidBindingKey(String),

	/// An element lacks the data or parameters it needs to produce output.
	#[error("element '{fragment}' is incomplete (empty data or invalid parameters)")]
	IncompleteElement { fragment: String },

	/// A substring element asked for characters outside its data.
	#[error("substring '{fragment}' is out of bounds for '{data}' (start={start}, end={end})")]
	OutOfBounds {
		fragment: String,
		data: String,
		start: usize,
		end: usize,
	},

	/// The controller hit its iteration ceiling before the template exhausted.
	#[error("maximum number of attempts reached ({max_attempts}), {accepted} id(s) accepted so far")]
	AttemptLimitReached { max_attempts: usize, accepted: usize },

	#[error("file not found: {}", path.display())]
	FileNotFound { path: PathBuf },

	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A filter subprocess could not be launched or awaited.
	#[error("failed to run command '{command}': {source}")]
	Command {
		command: String,
		#[source]
		source: io::Error,
	},

	#[error("invalid regular expression: {0}")]
	InvalidPattern(#[from] regex::Error),

	#[error("invalid setting: {0}")]
	InvalidSetting(String),
}

impl IdGenError {
	/// Process exit code reported by the command line tool for this error.
	pub fn exit_code(&self) -> i32 {
		match self {
			IdGenError::Command { .. } => 120,
			IdGenError::InvalidBindingKey(_) | IdGenError::InvalidSetting(_) => 150,
			IdGenError::AttemptLimitReached { .. } => 152,
			IdGenError::NoMatchingPattern { .. }
			| IdGenError::UnboundVariable { .. }
			| IdGenError::IncompleteElement { .. }
			| IdGenError::InvalidPattern(_) => 170,
			IdGenError::DuplicateCounter { .. } => 171,
			IdGenError::OutOfBounds { .. } => 180,
			IdGenError::FileNotFound { .. } => 200,
			IdGenError::Io { .. } => 201,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(IdGenError::NoMatchingPattern { fragment: "%".to_owned() }, 170)]
	#[case(IdGenError::DuplicateCounter { fragment: "b++".to_owned() }, 171)]
	#[case(IdGenError::AttemptLimitReached { max_attempts: 10, accepted: 0 }, 152)]
	#[case(IdGenError::FileNotFound { path: PathBuf::from("blacklist") }, 200)]
	fn exit_codes(#[case] error: IdGenError, #[case] code: i32) {
		assert_eq!(error.exit_code(), code);
	}

	#[rstest]
	fn messages_name_the_offending_fragment() {
		let error = IdGenError::UnboundVariable { key: 'f', fragment: "1f".to_owned() };
		let message = error.to_string();
		assert!(message.contains("'f'"));
		assert!(message.contains("'1f'"));
	}
}
