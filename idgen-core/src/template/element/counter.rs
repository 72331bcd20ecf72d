/// Counts through every fixed-width numeral over its data.
///
/// The data is the digit alphabet, `data[0]` being zero, so `"0123456789"`
/// counts in decimal and `"ab"` counts `aa, ab, ba, bb`. Output is zero-padded
/// to `length` digits, most significant digit first.
///
/// # Invariants
/// - `counter < base^length` whenever that power is representable
/// - once every value has been emitted the element reports no alternatives,
///   and it keeps wrapping around if asked for more
#[derive(Clone, Debug)]
pub struct CounterElement {
	digits: Vec<char>,
	length: usize,
	counter: u128,
	/// `base^length`, `None` if it does not fit in `u128` (then the counter never wraps).
	modulus: Option<u128>,
	has_alternatives: bool,
}

impl CounterElement {
	pub fn new(data: &str, length: usize) -> Self {
		let digits: Vec<char> = data.chars().collect();
		let modulus = u32::try_from(length)
			.ok()
			.and_then(|exp| (digits.len() as u128).checked_pow(exp));
		Self {
			digits,
			length,
			counter: 0,
			modulus,
			has_alternatives: true,
		}
	}

	/// Number of distinct values, `None` if it exceeds `u128`.
	pub fn num_alternatives(&self) -> Option<u128> {
		self.modulus
	}

	/// Renders the current value and advances the counter.
	pub fn produce(&mut self) -> String {
		let Some(&zero) = self.digits.first() else {
			return String::new();
		};

		let base = self.digits.len() as u128;
		let mut rendered = vec![zero; self.length];
		let mut number = self.counter;
		for slot in rendered.iter_mut().rev() {
			if number == 0 {
				break;
			}
			// `number % base < base == digits.len()`, the cast cannot truncate.
			*slot = self.digits[(number % base) as usize];
			number /= base;
		}

		self.counter = match self.modulus {
			Some(modulus) => (self.counter + 1) % modulus,
			None => self.counter.saturating_add(1),
		};
		if self.counter == 0 {
			self.has_alternatives = false;
		}

		rendered.into_iter().collect()
	}

	pub fn has_alternatives(&self) -> bool {
		self.has_alternatives
	}

	pub fn is_complete(&self) -> bool {
		!self.digits.is_empty() && self.length > 0
	}
}
