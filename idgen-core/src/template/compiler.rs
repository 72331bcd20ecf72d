use rand::SeedableRng;
use rand::rngs::StdRng;

use super::bindings::VariableBindings;
use super::classifier::{Classifier, ELEMENT_DELIMITER};
use super::element::Element;
use crate::error::IdGenError;

/// A compiled template: an ordered, fixed sequence of elements.
///
/// # Responsibilities
/// - Split the template string into fragments and classify each of them
/// - Attach bound data to every element that needs it
/// - Concatenate element output into one candidate per `produce` call
///
/// Elements are owned, so two templates never share state. Every `produce`
/// call advances the element counters.
#[derive(Clone, Debug)]
pub struct Template {
	source: String,
	elements: Vec<Element>,
}

impl Template {
	/// Compiles `template` against `bindings`, seeding random elements from
	/// the thread RNG.
	pub fn compile(template: &str, bindings: &VariableBindings) -> Result<Self, IdGenError> {
		Self::compile_seeded(template, bindings, None)
	}

	/// Compiles `template` against `bindings`.
	///
	/// With `Some(seed)`, random elements draw from generators derived from
	/// that seed and the whole output sequence is reproducible.
	///
	/// # Errors
	/// - `NoMatchingPattern` for a malformed (or empty) fragment.
	/// - `DuplicateCounter` for a second counter fragment.
	/// - `UnboundVariable` if a fragment needs a variable missing from `bindings`.
	/// - `IncompleteElement` if an element is left without usable data.
	pub fn compile_seeded(template: &str, bindings: &VariableBindings, seed: Option<u64>) -> Result<Self, IdGenError> {
		let mut master = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		};

		let mut classifier = Classifier::new();
		let mut elements = Vec::new();

		for fragment in template.split(ELEMENT_DELIMITER) {
			let descriptor = classifier.classify_fragment(fragment)?;

			let data = match descriptor.binding_key() {
				Some(key) => bindings.get(key).ok_or_else(|| IdGenError::UnboundVariable {
					key,
					fragment: descriptor.source_text.clone(),
				})?,
				None => "",
			};

			let element = Element::new(&descriptor, data, StdRng::from_rng(&mut master));
			if !element.is_complete() {
				return Err(IdGenError::IncompleteElement { fragment: fragment.to_owned() });
			}
			elements.push(element);
		}

		log::debug!("compiled template '{template}' into {} element(s)", elements.len());
		Ok(Self {
			source: template.to_owned(),
			elements,
		})
	}

	/// Builds the next candidate from every element, in fragment order.
	///
	/// # Errors
	/// `OutOfBounds` from a substring element whose span exceeds its data.
	pub fn produce(&mut self) -> Result<String, IdGenError> {
		let mut candidate = String::new();
		for element in &mut self.elements {
			candidate.push_str(&element.produce()?);
		}
		Ok(candidate)
	}

	/// Whether at least one non-resolver element may still produce new values.
	///
	/// Resolvers do not count: a template made only of resolvers is exhausted
	/// from the start, and resolvers keep varying once the rest is exhausted.
	pub fn has_alternatives(&self) -> bool {
		self.elements
			.iter()
			.any(|element| !element.is_resolver() && element.has_alternatives())
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn elements(&self) -> &[Element] {
		&self.elements
	}
}
