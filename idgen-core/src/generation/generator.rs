use std::collections::HashSet;

use serde::Serialize;

use super::settings::GenerationSettings;
use crate::error::IdGenError;
use crate::filter::FilterChain;
use crate::template::{Template, VariableBindings};

/// Where a generator stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
	/// Still building candidates.
	Collecting,
	/// Stopped: quota reached or template out of alternatives.
	Exhausted,
	/// Stopped: attempt ceiling hit.
	Aborted,
}

/// How well a finished run met its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
	/// Exactly `target_count` ids.
	Complete,
	/// Some ids, fewer than requested.
	Partial,
	/// No id at all.
	Empty,
}

/// Result of a generation run that was not aborted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationReport {
	/// Accepted ids, in the order they were found.
	pub ids: Vec<String>,
	/// Number of candidates built.
	pub attempts: usize,
	pub target_count: usize,
	pub fulfillment: Fulfillment,
}

/// Drives a template until enough unique, accepted ids are collected.
///
/// # Behavior
/// - Stops once `target_count` ids are accepted or the template reports no
///   alternatives left.
/// - A candidate is kept iff the filter chain accepts it and it was not
///   accepted before. The accepted set is checked first: a duplicate is
///   dropped without reaching the filters, so stateful filters (an external
///   command, for instance) only see candidates not accepted yet.
/// - Fails with `AttemptLimitReached` if `max_attempts` candidates were built
///   without stopping.
#[derive(Debug)]
pub struct Generator {
	template: Template,
	filters: FilterChain,
	settings: GenerationSettings,
	state: GenerationState,
}

impl Generator {
	pub fn new(template: Template, filters: FilterChain, settings: GenerationSettings) -> Self {
		Self {
			template,
			filters,
			settings,
			state: GenerationState::Collecting,
		}
	}

	/// Compiles `template` with `bindings` (seeded from `settings`) and wraps
	/// it into a generator.
	pub fn from_template(
		template: &str,
		bindings: &VariableBindings,
		filters: FilterChain,
		settings: GenerationSettings,
	) -> Result<Self, IdGenError> {
		let template = Template::compile_seeded(template, bindings, settings.seed)?;
		Ok(Self::new(template, filters, settings))
	}

	pub fn state(&self) -> GenerationState {
		self.state
	}

	pub fn settings(&self) -> &GenerationSettings {
		&self.settings
	}

	pub fn template(&self) -> &Template {
		&self.template
	}

	/// Runs the generation loop to completion.
	///
	/// # Errors
	/// - `AttemptLimitReached` when the ceiling is hit (state becomes `Aborted`).
	/// - Any error raised by the template or a filter, unchanged.
	pub fn generate(&mut self) -> Result<GenerationReport, IdGenError> {
		let target_count = self.settings.target_count;
		let max_attempts = self.settings.max_attempts();
		log::info!("generating {target_count} id(s) from template '{}'", self.template.source());

		self.state = GenerationState::Collecting;
		let mut ids: Vec<String> = Vec::new();
		let mut seen: HashSet<String> = HashSet::new();
		let mut attempts = 0;

		while self.template.has_alternatives() && ids.len() < target_count {
			if attempts == max_attempts {
				self.state = GenerationState::Aborted;
				log::debug!("maximum number of attempts reached ({max_attempts})");
				return Err(IdGenError::AttemptLimitReached {
					max_attempts,
					accepted: ids.len(),
				});
			}
			attempts += 1;

			let candidate = self.template.produce()?;
			log::trace!("id candidate: {candidate}");

			if !seen.contains(&candidate) && self.filters.apply(&candidate)? {
				seen.insert(candidate.clone());
				ids.push(candidate);
			} else {
				log::trace!("skipped candidate: {candidate}");
			}
		}

		self.state = GenerationState::Exhausted;
		log::debug!("number of iterations: {attempts}");

		let fulfillment = if ids.is_empty() {
			log::error!("no ids could be generated, the template has no alternatives left");
			Fulfillment::Empty
		} else if ids.len() < target_count {
			log::warn!("failed to reach the requested number of ids, got {}", ids.len());
			Fulfillment::Partial
		} else {
			Fulfillment::Complete
		};

		Ok(GenerationReport {
			ids,
			attempts,
			target_count,
			fulfillment,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::Filter;
	use rstest::{fixture, rstest};

	#[fixture]
	fn bindings() -> VariableBindings {
		let mut bindings = VariableBindings::new();
		bindings.set('f', "Alice").unwrap();
		bindings.set('n', "0123456789").unwrap();
		bindings.set('b', "ab").unwrap();
		bindings
	}

	fn generator(template: &str, bindings: &VariableBindings, target_count: usize) -> Generator {
		let mut settings = GenerationSettings::new(target_count);
		settings.seed = Some(3);
		Generator::from_template(template, bindings, FilterChain::new(), settings).unwrap()
	}

	#[rstest]
	fn counter_template_fills_the_quota(bindings: VariableBindings) {
		let mut generator = generator("2f:n2++", &bindings, 3);
		assert_eq!(generator.state(), GenerationState::Collecting);

		let report = generator.generate().unwrap();
		assert_eq!(report.ids, vec!["Al00", "Al01", "Al02"]);
		assert_eq!(report.attempts, 3);
		assert_eq!(report.fulfillment, Fulfillment::Complete);
		assert_eq!(generator.state(), GenerationState::Exhausted);
	}

	#[rstest]
	fn literal_template_is_partial(bindings: VariableBindings) {
		let report = generator("=x:f", &bindings, 5).generate().unwrap();
		assert_eq!(report.ids, vec!["xAlice"]);
		assert_eq!(report.attempts, 1);
		assert_eq!(report.fulfillment, Fulfillment::Partial);
	}

	#[rstest]
	fn counter_exhaustion_bounds_the_run(bindings: VariableBindings) {
		let report = generator("b2++", &bindings, 10).generate().unwrap();
		assert_eq!(report.ids, vec!["aa", "ab", "ba", "bb"]);
		assert_eq!(report.attempts, 4);
		assert_eq!(report.fulfillment, Fulfillment::Partial);
	}

	#[rstest]
	fn resolver_only_template_is_empty(bindings: VariableBindings) {
		let report = generator("[n++]", &bindings, 2).generate().unwrap();
		assert!(report.ids.is_empty());
		assert_eq!(report.attempts, 0);
		assert_eq!(report.fulfillment, Fulfillment::Empty);
	}

	#[rstest]
	fn duplicates_are_not_accepted_twice(bindings: VariableBindings) {
		let mut generator = generator("b+", &bindings, 2);
		let report = generator.generate().unwrap();
		let unique: HashSet<&String> = report.ids.iter().collect();
		assert_eq!(unique.len(), report.ids.len());
		assert!(report.ids.iter().all(|id| id == "a" || id == "b"));
		assert!(report.attempts >= report.ids.len());
	}

	struct RejectAll;

	impl Filter for RejectAll {
		fn id(&self) -> &str {
			"reject-all"
		}

		fn description(&self) -> &str {
			"rejects everything"
		}

		fn apply(&mut self, _candidate: &str) -> Result<bool, IdGenError> {
			Ok(false)
		}
	}

	#[rstest]
	fn never_exhausting_template_aborts_at_the_ceiling(bindings: VariableBindings) {
		let mut filters = FilterChain::new();
		filters.add_filter(Box::new(RejectAll));
		let mut settings = GenerationSettings::new(3);
		settings.set_max_attempts(100).unwrap();

		let mut generator = Generator::from_template("=u:n9++", &bindings, filters, settings).unwrap();
		let err = generator.generate().unwrap_err();
		assert!(matches!(err, IdGenError::AttemptLimitReached { max_attempts: 100, accepted: 0 }));
		assert_eq!(generator.state(), GenerationState::Aborted);
	}

	/// Accepts everything and counts the candidates it is shown.
	struct Counting(std::rc::Rc<std::cell::Cell<usize>>);

	impl Filter for Counting {
		fn id(&self) -> &str {
			"counting"
		}

		fn description(&self) -> &str {
			"counts calls"
		}

		fn apply(&mut self, _candidate: &str) -> Result<bool, IdGenError> {
			self.0.set(self.0.get() + 1);
			Ok(true)
		}
	}

	#[rstest]
	fn ceiling_reports_the_ids_accepted_so_far(bindings: VariableBindings) {
		let built = std::rc::Rc::new(std::cell::Cell::new(0));
		let mut filters = FilterChain::new();
		filters.add_filter(Box::new(Counting(std::rc::Rc::clone(&built))));
		// Only u000000000 and u000000001 get through.
		filters.add_filter(Box::new(crate::filter::RegexFilter::new("[1-9].|[2-9]$").unwrap()));
		let mut settings = GenerationSettings::new(3);
		settings.set_max_attempts(100).unwrap();

		let mut generator = Generator::from_template("=u:n9++", &bindings, filters, settings).unwrap();
		let err = generator.generate().unwrap_err();
		assert!(matches!(err, IdGenError::AttemptLimitReached { max_attempts: 100, accepted: 2 }));
		assert_eq!(generator.state(), GenerationState::Aborted);
		assert_eq!(built.get(), 100);
	}

	#[rstest]
	fn duplicates_never_reach_the_filters(bindings: VariableBindings) {
		let shown = std::rc::Rc::new(std::cell::Cell::new(0));
		let mut filters = FilterChain::new();
		filters.add_filter(Box::new(Counting(std::rc::Rc::clone(&shown))));
		let mut settings = GenerationSettings::new(3);
		settings.seed = Some(3);

		// Two possible values, ten draws: most candidates are repeats.
		let report = Generator::from_template("b+", &bindings, filters, settings)
			.unwrap()
			.generate()
			.unwrap();
		assert_eq!(report.attempts, 10);
		assert_eq!(shown.get(), report.ids.len());
	}

	#[rstest]
	fn rejected_candidates_still_count_as_attempts(bindings: VariableBindings) {
		let mut filters = FilterChain::new();
		filters.add_filter(Box::new(crate::filter::BlacklistFilter::new(vec!["01".to_owned(), "03".to_owned()])));

		let mut generator = Generator::from_template("n2++", &bindings, filters, GenerationSettings::new(3)).unwrap();
		let report = generator.generate().unwrap();
		assert_eq!(report.ids, vec!["00", "02", "04"]);
		assert_eq!(report.attempts, 5);
	}

	#[rstest]
	fn substring_errors_propagate(bindings: VariableBindings) {
		let mut generator = generator("9f", &bindings, 1);
		assert!(matches!(generator.generate(), Err(IdGenError::OutOfBounds { .. })));
	}

	#[rstest]
	fn report_serializes_with_lowercase_fulfillment(bindings: VariableBindings) {
		let report = generator("=x", &bindings, 1).generate().unwrap();
		let json = serde_json::to_value(&report).unwrap();
		assert_eq!(json["fulfillment"], "complete");
		assert_eq!(json["ids"][0], "x");
	}
}
