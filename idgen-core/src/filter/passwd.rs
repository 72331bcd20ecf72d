use std::path::{Path, PathBuf};

use super::Filter;
use crate::error::IdGenError;
use crate::io::LineSource;

/// Default location of the account database.
pub const DEFAULT_PASSWD_FILE: &str = "/etc/passwd";

/// Rejects candidates that are already taken as account names.
///
/// The file is read in `passwd(5)` format, the account name being the first
/// `:`-separated field. It is read again for every candidate so accounts
/// created during a run are seen.
#[derive(Clone, Debug)]
pub struct PasswdFilter {
	id: String,
	description: String,
	path: PathBuf,
}

impl Default for PasswdFilter {
	fn default() -> Self {
		Self::new(DEFAULT_PASSWD_FILE)
	}
}

impl PasswdFilter {
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self {
			id: "passwd".to_owned(),
			description: "Rejects ids that already exist as accounts".to_owned(),
			path: path.as_ref().to_path_buf(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Filter for PasswdFilter {
	fn id(&self) -> &str {
		&self.id
	}

	fn description(&self) -> &str {
		&self.description
	}

	fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError> {
		let mut source = LineSource::open(&self.path)?;
		while let Some(line) = source.next_line()? {
			let account = line.split(':').next().unwrap_or_default();
			if account == candidate {
				log::trace!("id '{candidate}' exists in {}", self.path.display());
				return Ok(false);
			}
		}
		source.close();
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	fn passwd_file() -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "root:x:0:0:root:/root:/bin/bash").unwrap();
		writeln!(file, "alice:x:1000:1000::/home/alice:/bin/sh").unwrap();
		writeln!(file, "nocolon").unwrap();
		file
	}

	#[rstest]
	#[case("root", false)]
	#[case("alice", false)]
	#[case("nocolon", false)]
	#[case("ali", true)]
	#[case("x", true)]
	fn rejects_existing_accounts(#[case] candidate: &str, #[case] accepted: bool) {
		let file = passwd_file();
		let mut filter = PasswdFilter::new(file.path());
		assert_eq!(filter.apply(candidate).unwrap(), accepted);
	}

	#[rstest]
	fn sees_accounts_added_between_calls() {
		let mut file = passwd_file();
		let mut filter = PasswdFilter::new(file.path());
		assert!(filter.apply("bob").unwrap());

		writeln!(file, "bob:x:1001:1001::/home/bob:/bin/sh").unwrap();
		file.flush().unwrap();
		assert!(!filter.apply("bob").unwrap());
	}

	#[rstest]
	fn missing_file_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let mut filter = PasswdFilter::new(dir.path().join("passwd"));
		assert!(matches!(filter.apply("bob"), Err(IdGenError::FileNotFound { .. })));
	}
}
