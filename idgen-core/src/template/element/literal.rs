/// Element with exactly one alternative: a fixed string.
///
/// Backs both inline literals (`=text`) and bare variable references (`a`),
/// which emit their bound data verbatim.
#[derive(Clone, Debug)]
pub struct LiteralElement {
	text: String,
	has_alternatives: bool,
}

impl LiteralElement {
	pub fn new(text: &str) -> Self {
		Self {
			text: text.to_owned(),
			has_alternatives: true,
		}
	}

	pub fn produce(&mut self) -> String {
		self.has_alternatives = false;
		self.text.clone()
	}

	pub fn has_alternatives(&self) -> bool {
		self.has_alternatives
	}

	pub fn is_complete(&self) -> bool {
		!self.text.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn single_alternative_then_repeats() {
		let mut element = LiteralElement::new("xy");
		assert!(element.has_alternatives());
		assert_eq!(element.produce(), "xy");
		assert!(!element.has_alternatives());
		assert_eq!(element.produce(), "xy");
		assert!(!element.has_alternatives());
	}

	#[rstest]
	fn empty_text_is_incomplete() {
		assert!(!LiteralElement::new("").is_complete());
		assert!(LiteralElement::new("a").is_complete());
	}
}
