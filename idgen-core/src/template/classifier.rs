use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::IdGenError;

/// Kind of generator a fragment compiles to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
	Literal,
	BoundLiteral,
	Random,
	Substring,
	Counter,
}

/// Which part of the bound data a substring element extracts.
///
/// Positions are 0-based and `end` is exclusive; the 1-based positions of the
/// template language are converted when the fragment is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
	/// `data[start..end]`
	Range { start: usize, end: usize },
	/// The last `count` characters.
	Last { count: usize },
	/// `data[start..]`
	ToEnd { start: usize },
}

/// Kind-specific parameters of a classified fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
	/// Fixed text given inline (`=text`).
	Literal,
	/// Bound data used verbatim (`a`).
	BoundLiteral,
	/// `length` uniform samples from the bound data (`a+`, `aaa+`, `a3+`).
	Random { length: usize },
	/// Part of the bound data (`1a`, `a1`, `1a5`, `a1,5`, `a1,`, `a,1`).
	Substring(Span),
	/// Fixed-width numeral over the bound data as digit alphabet (`a++`, `a3++`).
	Counter { length: usize },
}

/// Typed description of one template fragment.
///
/// `key` is the variable letter for kinds that need bound data, or the
/// literal payload for `Shape::Literal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDescriptor {
	pub source_text: String,
	pub key: String,
	pub resolver: bool,
	pub shape: Shape,
}

impl ElementDescriptor {
	pub fn kind(&self) -> ElementKind {
		match self.shape {
			Shape::Literal => ElementKind::Literal,
			Shape::BoundLiteral => ElementKind::BoundLiteral,
			Shape::Random { .. } => ElementKind::Random,
			Shape::Substring(_) => ElementKind::Substring,
			Shape::Counter { .. } => ElementKind::Counter,
		}
	}

	/// Returns the variable letter this element reads, `None` for literals.
	pub fn binding_key(&self) -> Option<char> {
		match self.shape {
			Shape::Literal => None,
			_ => self.key.chars().next(),
		}
	}
}

/// One row of the form table: a whole-fragment pattern plus the constructor
/// turning its captures into a descriptor.
///
/// The constructor may still decline a match (returns `None`), in which case
/// classification moves on to the next row.
struct Form {
	name: &'static str,
	pattern: Regex,
	build: fn(&Captures<'_>) -> Option<(String, Shape)>,
}

impl Form {
	fn new(name: &'static str, pattern: &str, build: fn(&Captures<'_>) -> Option<(String, Shape)>) -> Self {
		Self {
			name,
			pattern: Regex::new(pattern).expect("template form pattern is valid"),
			build,
		}
	}
}

fn group<'a>(caps: &'a Captures<'_>, index: usize) -> &'a str {
	caps.get(index).map_or("", |m| m.as_str())
}

fn number(caps: &Captures<'_>, index: usize) -> Option<usize> {
	group(caps, index).parse().ok()
}

/// Length encoded by repeating the key letter (`aaa` → 3), or `None` if the
/// run mixes letters.
fn run_length(run: &str) -> Option<(String, usize)> {
	let mut chars = run.chars();
	let key = chars.next()?;
	if chars.all(|c| c == key) {
		Some((key.to_string(), run.chars().count()))
	} else {
		None
	}
}

/// The template forms, in priority order. First match wins.
static FORMS: LazyLock<Vec<Form>> = LazyLock::new(|| {
	vec![
		Form::new("bound literal", r"^([a-zA-Z])$", |caps| {
			Some((group(caps, 1).to_owned(), Shape::BoundLiteral))
		}),
		Form::new("literal", r"^=([a-zA-Z_0-9]*)$", |caps| {
			Some((group(caps, 1).to_owned(), Shape::Literal))
		}),
		// The regex crate has no backreferences, the repeated letter is checked by `run_length`.
		Form::new("random (repeated)", r"^([a-zA-Z]+)\+$", |caps| {
			let (key, length) = run_length(group(caps, 1))?;
			Some((key, Shape::Random { length }))
		}),
		Form::new("random (counted)", r"^([a-zA-Z])([1-9][0-9]*)\+$", |caps| {
			Some((group(caps, 1).to_owned(), Shape::Random { length: number(caps, 2)? }))
		}),
		Form::new("substring (first n)", r"^([1-9])([a-zA-Z])$", |caps| {
			let end = number(caps, 1)?;
			Some((group(caps, 2).to_owned(), Shape::Substring(Span::Range { start: 0, end })))
		}),
		Form::new("substring (last n)", r"^([a-zA-Z])([1-9])$", |caps| {
			let count = number(caps, 2)?;
			Some((group(caps, 1).to_owned(), Shape::Substring(Span::Last { count })))
		}),
		Form::new("substring (start, end)", r"^([1-9])([a-zA-Z])([1-9])$", |caps| {
			let start = number(caps, 1)? - 1;
			let end = number(caps, 3)?;
			Some((group(caps, 2).to_owned(), Shape::Substring(Span::Range { start, end })))
		}),
		Form::new("substring (start,end)", r"^([a-zA-Z])([1-9]),([1-9])$", |caps| {
			let start = number(caps, 2)? - 1;
			let span = match number(caps, 3)? {
				0 => Span::ToEnd { start },
				end => Span::Range { start, end },
			};
			Some((group(caps, 1).to_owned(), Shape::Substring(span)))
		}),
		Form::new("substring (start, to end)", r"^([a-zA-Z])([1-9]),$", |caps| {
			let start = number(caps, 2)? - 1;
			Some((group(caps, 1).to_owned(), Shape::Substring(Span::ToEnd { start })))
		}),
		Form::new("substring (,first n)", r"^([a-zA-Z]),([1-9])$", |caps| {
			let end = number(caps, 2)?;
			Some((group(caps, 1).to_owned(), Shape::Substring(Span::Range { start: 0, end })))
		}),
		Form::new("counter (repeated)", r"^([a-zA-Z]+)\+\+$", |caps| {
			let (key, length) = run_length(group(caps, 1))?;
			Some((key, Shape::Counter { length }))
		}),
		Form::new("counter (counted)", r"^([a-zA-Z])([1-9][0-9]*)\+\+$", |caps| {
			Some((group(caps, 1).to_owned(), Shape::Counter { length: number(caps, 2)? }))
		}),
	]
});

static RESOLVER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("resolver pattern is valid"));

/// Separates template fragments.
pub const ELEMENT_DELIMITER: char = ':';

/// Strips resolver brackets (`[...]`) from a raw fragment.
///
/// Returns the inner text and whether the fragment was a resolver.
pub fn strip_resolver(fragment: &str) -> (&str, bool) {
	match RESOLVER.captures(fragment).and_then(|caps| caps.get(1)) {
		Some(inner) => (inner.as_str(), true),
		None => (fragment, false),
	}
}

/// Turns template fragments into element descriptors.
///
/// A classifier lives for one compilation: it carries the number of counter
/// fragments seen so far, so a second counter is rejected without any state
/// leaking between templates.
#[derive(Debug, Default)]
pub struct Classifier {
	counters: usize,
}

impl Classifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Classifies a raw fragment, honouring resolver brackets.
	pub fn classify_fragment(&mut self, raw: &str) -> Result<ElementDescriptor, IdGenError> {
		let (fragment, resolver) = strip_resolver(raw);
		let mut descriptor = self.classify(fragment)?;
		descriptor.resolver = resolver;
		Ok(descriptor)
	}

	/// Classifies one (bracket-free) fragment.
	///
	/// # Errors
	/// - `NoMatchingPattern` if no form matches the whole fragment.
	/// - `DuplicateCounter` if this is the second counter of the session.
	pub fn classify(&mut self, fragment: &str) -> Result<ElementDescriptor, IdGenError> {
		log::debug!("classifying fragment '{fragment}'");

		for form in FORMS.iter() {
			let Some(caps) = form.pattern.captures(fragment) else {
				continue;
			};
			let Some((key, shape)) = (form.build)(&caps) else {
				continue;
			};

			if matches!(shape, Shape::Counter { .. }) {
				if self.counters > 0 {
					return Err(IdGenError::DuplicateCounter { fragment: fragment.to_owned() });
				}
				self.counters += 1;
			}

			log::debug!("fragment '{fragment}' matched {} form ({})", form.name, form.pattern.as_str());
			return Ok(ElementDescriptor {
				source_text: fragment.to_owned(),
				key,
				resolver: false,
				shape,
			});
		}

		Err(IdGenError::NoMatchingPattern { fragment: fragment.to_owned() })
	}
}
