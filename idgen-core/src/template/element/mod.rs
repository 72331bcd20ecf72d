//! Runtime generators, one per template fragment.
//!
//! Every variant shares the same capabilities:
//! - `produce`: emit the next value (advances internal state)
//! - `has_alternatives`: whether new values may still come out
//! - `is_complete`: whether the element has everything it needs

mod counter;
mod literal;
mod random;
mod substring;

pub use counter::CounterElement;
pub use literal::LiteralElement;
pub use random::{OVERCOVERAGE_FACTOR, RandomElement};
pub use substring::SubstringElement;

use rand::rngs::StdRng;

use super::classifier::{ElementDescriptor, ElementKind, Shape};
use crate::error::IdGenError;

/// Closed set of element behaviours.
#[derive(Clone, Debug)]
pub enum Variant {
	Literal(LiteralElement),
	BoundLiteral(LiteralElement),
	Random(RandomElement),
	Substring(SubstringElement),
	Counter(CounterElement),
}

/// One compiled template fragment.
///
/// The resolver flag is fixed at classification time.
#[derive(Clone, Debug)]
pub struct Element {
	source_text: String,
	resolver: bool,
	variant: Variant,
}

impl Element {
	/// Instantiates an element from its descriptor.
	///
	/// `data` is the bound value of the descriptor's variable and is ignored
	/// for inline literals. `rng` is only consumed by random elements.
	pub fn new(descriptor: &ElementDescriptor, data: &str, rng: StdRng) -> Self {
		let variant = match descriptor.shape {
			Shape::Literal => Variant::Literal(LiteralElement::new(&descriptor.key)),
			Shape::BoundLiteral => Variant::BoundLiteral(LiteralElement::new(data)),
			Shape::Random { length } => Variant::Random(RandomElement::new(data, length, rng)),
			Shape::Substring(span) => Variant::Substring(SubstringElement::new(&descriptor.source_text, data, span)),
			Shape::Counter { length } => Variant::Counter(CounterElement::new(data, length)),
		};

		Self {
			source_text: descriptor.source_text.clone(),
			resolver: descriptor.resolver,
			variant,
		}
	}

	pub fn source_text(&self) -> &str {
		&self.source_text
	}

	pub fn is_resolver(&self) -> bool {
		self.resolver
	}

	pub fn variant(&self) -> &Variant {
		&self.variant
	}

	pub fn kind(&self) -> ElementKind {
		match self.variant {
			Variant::Literal(_) => ElementKind::Literal,
			Variant::BoundLiteral(_) => ElementKind::BoundLiteral,
			Variant::Random(_) => ElementKind::Random,
			Variant::Substring(_) => ElementKind::Substring,
			Variant::Counter(_) => ElementKind::Counter,
		}
	}

	/// Emits this element's next value.
	///
	/// # Errors
	/// `OutOfBounds` from substring elements whose span exceeds their data.
	pub fn produce(&mut self) -> Result<String, IdGenError> {
		Ok(match &mut self.variant {
			Variant::Literal(e) | Variant::BoundLiteral(e) => e.produce(),
			Variant::Random(e) => e.produce(),
			Variant::Substring(e) => e.produce()?,
			Variant::Counter(e) => e.produce(),
		})
	}

	pub fn has_alternatives(&self) -> bool {
		match &self.variant {
			Variant::Literal(e) | Variant::BoundLiteral(e) => e.has_alternatives(),
			Variant::Random(e) => e.has_alternatives(),
			Variant::Substring(e) => e.has_alternatives(),
			Variant::Counter(e) => e.has_alternatives(),
		}
	}

	pub fn is_complete(&self) -> bool {
		let complete = match &self.variant {
			Variant::Literal(e) | Variant::BoundLiteral(e) => e.is_complete(),
			Variant::Random(e) => e.is_complete(),
			Variant::Substring(e) => e.is_complete(),
			Variant::Counter(e) => e.is_complete(),
		};
		complete && !self.source_text.is_empty()
	}
}
