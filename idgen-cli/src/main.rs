mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;

use idgen_core::error::IdGenError;
use idgen_core::generation::{Fulfillment, Generator};

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<Fulfillment, IdGenError> {
	let bindings = cli.bindings()?;
	let settings = cli.generation_settings()?;
	let filters = cli.filters()?;

	let mut generator = Generator::from_template(&cli.template, &bindings, filters, settings)?;
	let report = generator.generate()?;

	let rendered = if cli.json {
		output::json(&report).map_err(|e| IdGenError::InvalidSetting(e.to_string()))?
	} else if cli.columns {
		output::columns(&report.ids, cli.width)
	} else {
		output::lines(&report.ids)
	};
	print!("{rendered}");

	Ok(report.fulfillment)
}

/// Process exit status of a run.
///
/// Partial and empty runs are already reported by the generator's own log
/// records; errors are logged once here.
fn exit_status(outcome: &Result<Fulfillment, IdGenError>) -> u8 {
	match outcome {
		Ok(Fulfillment::Complete | Fulfillment::Partial) => 0,
		Ok(Fulfillment::Empty) => 1,
		Err(e) => {
			log::error!("{e}");
			u8::try_from(e.exit_code()).unwrap_or(1)
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.log_level())
		.parse_default_env()
		.init();

	ExitCode::from(exit_status(&run(&cli)))
}
