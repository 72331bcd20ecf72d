use rand::Rng;
use rand::rngs::StdRng;

/// How many times the theoretical number of alternatives a random element is
/// sampled before it reports exhaustion.
///
/// Emitted values are not recorded, so without this margin a small domain
/// would claim exhaustion long before every value had shown up.
pub const OVERCOVERAGE_FACTOR: u128 = 5;

/// Draws `length` characters, uniformly and with replacement, from its data.
///
/// Exhaustion is a heuristic: the element reports no alternatives once it has
/// produced `OVERCOVERAGE_FACTOR * |data|^length` values.
#[derive(Clone, Debug)]
pub struct RandomElement {
	data: Vec<char>,
	length: usize,
	rng: StdRng,
	calls: u128,
	max_calls: u128,
}

impl RandomElement {
	pub fn new(data: &str, length: usize, rng: StdRng) -> Self {
		let data: Vec<char> = data.chars().collect();
		let max_calls = Self::alternatives(data.len(), length).saturating_mul(OVERCOVERAGE_FACTOR);
		Self {
			data,
			length,
			rng,
			calls: 0,
			max_calls,
		}
	}

	/// `base^length`, saturating at `u128::MAX`.
	fn alternatives(base: usize, length: usize) -> u128 {
		u32::try_from(length)
			.ok()
			.and_then(|exp| (base as u128).checked_pow(exp))
			.unwrap_or(u128::MAX)
	}

	/// Number of distinct strings this element can theoretically emit.
	pub fn num_alternatives(&self) -> u128 {
		Self::alternatives(self.data.len(), self.length)
	}

	pub fn produce(&mut self) -> String {
		if self.data.is_empty() {
			return String::new();
		}

		let result = (0..self.length)
			.map(|_| self.data[self.rng.random_range(0..self.data.len())])
			.collect();
		self.calls = self.calls.saturating_add(1);
		result
	}

	pub fn has_alternatives(&self) -> bool {
		self.calls < self.max_calls
	}

	pub fn is_complete(&self) -> bool {
		!self.data.is_empty() && self.length > 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rstest::rstest;
	use std::collections::HashSet;

	fn element(data: &str, length: usize) -> RandomElement {
		RandomElement::new(data, length, StdRng::seed_from_u64(7))
	}

	#[rstest]
	fn draws_only_from_the_domain() {
		let mut random = element("xyz", 4);
		for _ in 0..50 {
			let value = random.produce();
			assert_eq!(value.chars().count(), 4);
			assert!(value.chars().all(|c| "xyz".contains(c)));
		}
	}

	#[rstest]
	#[case("ab", 1, 2)]
	#[case("ab", 3, 8)]
	#[case("0123456789", 2, 100)]
	fn exhausts_after_overcoverage(#[case] data: &str, #[case] length: usize, #[case] alternatives: u128) {
		let mut random = element(data, length);
		assert_eq!(random.num_alternatives(), alternatives);

		for _ in 0..alternatives * OVERCOVERAGE_FACTOR {
			assert!(random.has_alternatives());
			random.produce();
		}
		assert!(!random.has_alternatives());
	}

	#[rstest]
	fn covers_a_small_domain() {
		let mut random = element("ab", 1);
		let mut seen = HashSet::new();
		while random.has_alternatives() {
			seen.insert(random.produce());
		}
		// 10 draws over 2 values, and the seed is fixed.
		assert_eq!(seen.len(), 2);
	}

	#[rstest]
	fn same_seed_same_sequence() {
		let mut first = element("abcdef", 5);
		let mut second = element("abcdef", 5);
		for _ in 0..10 {
			assert_eq!(first.produce(), second.produce());
		}
	}

	#[rstest]
	fn huge_domains_do_not_overflow() {
		let random = element("abcdefghijklmnopqrstuvwxyz", 200);
		assert_eq!(random.num_alternatives(), u128::MAX);
		assert!(random.has_alternatives());
	}

	#[rstest]
	fn empty_domain_is_incomplete() {
		assert!(!element("", 3).is_complete());
		assert!(element("a", 3).is_complete());
	}
}
