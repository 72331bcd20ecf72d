use crate::error::IdGenError;
use crate::template::classifier::Span;

/// Extracts a fixed part of its bound data.
///
/// Works on characters, not bytes. Has a single alternative.
#[derive(Clone, Debug)]
pub struct SubstringElement {
	fragment: String,
	data: Vec<char>,
	span: Span,
	has_alternatives: bool,
}

impl SubstringElement {
	pub fn new(fragment: &str, data: &str, span: Span) -> Self {
		Self {
			fragment: fragment.to_owned(),
			data: data.chars().collect(),
			span,
			has_alternatives: true,
		}
	}

	/// Returns the configured part of the data.
	///
	/// # Errors
	/// `OutOfBounds` if the span reaches past the data or is inverted.
	pub fn produce(&mut self) -> Result<String, IdGenError> {
		let len = self.data.len();
		let (start, end) = match self.span {
			Span::Range { start, end } => (start, end),
			Span::Last { count } => (len.checked_sub(count).ok_or_else(|| self.out_of_bounds(0, count))?, len),
			Span::ToEnd { start } => (start, len),
		};

		let slice = self.data.get(start..end).ok_or_else(|| self.out_of_bounds(start, end))?;
		self.has_alternatives = false;
		Ok(slice.iter().collect())
	}

	fn out_of_bounds(&self, start: usize, end: usize) -> IdGenError {
		IdGenError::OutOfBounds {
			fragment: self.fragment.clone(),
			data: self.data.iter().collect(),
			start,
			end,
		}
	}

	pub fn has_alternatives(&self) -> bool {
		self.has_alternatives
	}

	pub fn is_complete(&self) -> bool {
		!self.fragment.is_empty() && !self.data.is_empty()
	}
}
