use std::process::Command;

use super::Filter;
use crate::error::IdGenError;

/// Default command template, `%s` being replaced by the candidate.
pub const DEFAULT_SHELL_CMD: &str = "./filter.sh %s";

/// Asks an external command whether a candidate is taken.
///
/// Every `%s` in the command template is replaced by the candidate, the
/// result is split on whitespace and executed directly (no shell). Exit
/// status `0` means the id is taken and the candidate is rejected; any other
/// status accepts it.
///
/// Standard output is logged at debug level, standard error at error level.
#[derive(Clone, Debug)]
pub struct ShellCmdFilter {
	id: String,
	description: String,
	template: String,
}

impl Default for ShellCmdFilter {
	fn default() -> Self {
		Self::new(DEFAULT_SHELL_CMD)
	}
}

impl ShellCmdFilter {
	pub fn new(template: &str) -> Self {
		Self {
			id: "shellcmd".to_owned(),
			description: "Rejects ids for which an external command succeeds".to_owned(),
			template: template.to_owned(),
		}
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	/// The command line run for `candidate`.
	pub fn command_line(&self, candidate: &str) -> String {
		self.template.replace("%s", candidate)
	}
}

impl Filter for ShellCmdFilter {
	fn id(&self) -> &str {
		&self.id
	}

	fn description(&self) -> &str {
		&self.description
	}

	fn apply(&mut self, candidate: &str) -> Result<bool, IdGenError> {
		let command = self.command_line(candidate);
		log::trace!("executing command: {command}");

		let mut parts = command.split_whitespace();
		let program = parts.next().ok_or_else(|| IdGenError::Command {
			command: command.clone(),
			source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
		})?;

		let output = Command::new(program)
			.args(parts)
			.output()
			.map_err(|source| IdGenError::Command {
				command: command.clone(),
				source,
			})?;

		for line in String::from_utf8_lossy(&output.stdout).lines() {
			log::debug!("STDOUT: {line}");
		}
		for line in String::from_utf8_lossy(&output.stderr).lines() {
			log::error!("STDERR: {line}");
		}

		if output.status.success() {
			log::trace!("id '{candidate}' rejected by command");
			Ok(false)
		} else {
			Ok(true)
		}
	}
}

#[cfg(all(test, unix))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn substitutes_every_placeholder() {
		let filter = ShellCmdFilter::new("check %s --user=%s");
		assert_eq!(filter.command_line("bob"), "check bob --user=bob");
	}

	#[rstest]
	#[case("true %s", false)]
	#[case("false %s", true)]
	fn exit_status_decides(#[case] template: &str, #[case] accepted: bool) {
		let mut filter = ShellCmdFilter::new(template);
		assert_eq!(filter.apply("bob").unwrap(), accepted);
	}

	#[rstest]
	fn candidate_is_passed_as_argument() {
		let mut filter = ShellCmdFilter::new("test %s = taken");
		assert!(!filter.apply("taken").unwrap());
		assert!(filter.apply("free").unwrap());
	}

	#[rstest]
	fn launch_failure_is_fatal() {
		let mut filter = ShellCmdFilter::new("/nonexistent/idgen-filter %s");
		assert!(matches!(filter.apply("bob"), Err(IdGenError::Command { .. })));
	}

	#[rstest]
	fn empty_command_is_fatal() {
		let mut filter = ShellCmdFilter::new("   ");
		assert!(matches!(filter.apply("bob"), Err(IdGenError::Command { .. })));
	}
}
