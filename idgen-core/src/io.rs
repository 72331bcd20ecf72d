use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::IdGenError;

/// Line-oriented reader over a text file.
///
/// - Opening a path that does not exist is reported as `FileNotFound`
/// - Line terminators (`\n` / `\r\n`) are stripped
/// - The handle is closed when consumed by `close` or dropped
#[derive(Debug)]
pub struct LineSource {
	path: PathBuf,
	reader: BufReader<File>,
}

impl LineSource {
	/// Opens `path` for reading line by line.
	///
	/// # Errors
	/// - `FileNotFound` if the path does not exist.
	/// - `Io` for any other open failure (permissions, directory, ...).
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IdGenError> {
		let path = path.as_ref().to_path_buf();
		match File::open(&path) {
			Ok(file) => Ok(Self { path, reader: BufReader::new(file) }),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Err(IdGenError::FileNotFound { path }),
			Err(source) => Err(IdGenError::Io { path, source }),
		}
	}

	/// Returns the path this source reads from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Reads the next line, or `None` at end of input.
	pub fn next_line(&mut self) -> Result<Option<String>, IdGenError> {
		let mut line = String::new();
		let read = self.reader.read_line(&mut line).map_err(|source| IdGenError::Io {
			path: self.path.clone(),
			source,
		})?;
		if read == 0 {
			return Ok(None);
		}

		if line.ends_with('\n') {
			line.pop();
			if line.ends_with('\r') {
				line.pop();
			}
		}
		Ok(Some(line))
	}

	/// Closes the source.
	pub fn close(self) {
		log::trace!("closing {}", self.path.display());
	}
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, IdGenError> {
	let mut source = LineSource::open(filename)?;
	let mut lines = Vec::new();
	while let Some(line) = source.next_line()? {
		lines.push(line);
	}
	source.close();
	Ok(lines)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn missing_file_is_reported_as_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope");
		let err = LineSource::open(&missing).unwrap_err();
		assert!(matches!(err, IdGenError::FileNotFound { path } if path == missing));
	}

	#[rstest]
	fn lines_are_returned_without_terminators() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "root\r\nadmin\n\nlast").unwrap();

		let mut source = LineSource::open(file.path()).unwrap();
		assert_eq!(source.next_line().unwrap().as_deref(), Some("root"));
		assert_eq!(source.next_line().unwrap().as_deref(), Some("admin"));
		assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
		assert_eq!(source.next_line().unwrap().as_deref(), Some("last"));
		assert_eq!(source.next_line().unwrap(), None);
		source.close();
	}

	#[rstest]
	fn read_lines_collects_everything() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "a").unwrap();
		writeln!(file, "b").unwrap();
		assert_eq!(read_lines(file.path()).unwrap(), vec!["a", "b"]);
	}
}
