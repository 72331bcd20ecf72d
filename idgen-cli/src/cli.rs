use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use idgen_core::error::IdGenError;
use idgen_core::filter::blacklist::DEFAULT_BLACKLIST_FILE;
use idgen_core::filter::passwd::DEFAULT_PASSWD_FILE;
use idgen_core::filter::shell_cmd::DEFAULT_SHELL_CMD;
use idgen_core::filter::{BlacklistFilter, FilterChain, PasswdFilter, RegexFilter, ShellCmdFilter};
use idgen_core::generation::GenerationSettings;
use idgen_core::template::VariableBindings;

const TEMPLATE_HELP: &str = "\
TEMPLATE LANGUAGE:
  A template is a list of fragments separated by ':'. Every candidate is the
  concatenation of what each fragment produces. Letters name variables bound
  with -d, positions are 1-based.

  a               value of variable a
  =text           the literal text
  a+ aaa+ a3+     1, 3, 3 random characters drawn from a
  2a a,2          first 2 characters of a
  a2              last 2 characters of a
  2a4 a2,4        characters 2 to 4 of a
  a2,             characters 2 to the end of a
  a++ aaa++ a3++  counter of width 1, 3, 3 using the characters of a as digits

  At most one counter is allowed. A fragment in brackets, e.g. [n++], is a
  resolver: it is part of every candidate but does not keep the generation
  going once the other fragments are exhausted.

EXAMPLE:
  idgen -t '1f:s:[n++]' -d f=Alice -d s=Smith -d n=0123456789 -P";

/// Template-driven identifier generator
#[derive(Parser, Debug)]
#[command(version, after_long_help = TEMPLATE_HELP)]
pub struct Cli {
	/// Template describing the ids to build
	#[arg(short, long, value_name = "TEMPLATE")]
	pub template: String,

	/// Binds a value to a template variable (repeatable)
	#[arg(short, long = "data", value_name = "KEY=VALUE")]
	pub data: Vec<String>,

	/// Number of ids to generate
	#[arg(short, long, value_name = "N")]
	pub number: Option<usize>,

	/// Maximum number of candidates built before giving up
	#[arg(long, value_name = "N")]
	pub max_attempts: Option<usize>,

	/// Seed for the random fragments
	#[arg(long, value_name = "N")]
	pub seed: Option<u64>,

	/// JSON file with generation settings; flags take precedence
	#[arg(long, value_name = "FILE")]
	pub settings: Option<PathBuf>,

	/// Rejects ids containing a blacklisted word
	#[arg(short = 'B', long)]
	pub blacklist: bool,

	/// Word list used by --blacklist, one word per line
	#[arg(long, value_name = "FILE", default_value = DEFAULT_BLACKLIST_FILE)]
	pub blacklist_file: PathBuf,

	/// Rejects ids that already exist as accounts
	#[arg(short = 'P', long)]
	pub passwd: bool,

	/// Account database used by --passwd
	#[arg(long, value_name = "FILE", default_value = DEFAULT_PASSWD_FILE)]
	pub passwd_file: PathBuf,

	/// Rejects ids for which an external command succeeds
	#[arg(short = 'S', long)]
	pub shell_cmd: bool,

	/// Command run by --shell-cmd, '%s' is replaced by the candidate
	#[arg(long, value_name = "CMD", default_value = DEFAULT_SHELL_CMD)]
	pub shell_cmd_template: String,

	/// Rejects ids matching a regular expression (repeatable)
	#[arg(long, value_name = "REGEX")]
	pub reject_pattern: Vec<String>,

	/// Prints ids in columns
	#[arg(short = 'C', long)]
	pub columns: bool,

	/// Line width used by --columns
	#[arg(short = 'W', long, value_name = "N", default_value_t = 80)]
	pub width: usize,

	/// Prints the generation report as JSON
	#[arg(long, conflicts_with = "columns")]
	pub json: bool,

	/// Increases log verbosity (-v, -vv, -vvv)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	/// Log level filter matching the number of `-v` flags.
	pub fn log_level(&self) -> log::LevelFilter {
		match self.verbose {
			0 => log::LevelFilter::Warn,
			1 => log::LevelFilter::Info,
			2 => log::LevelFilter::Debug,
			_ => log::LevelFilter::Trace,
		}
	}

	/// Parses every `-d KEY=VALUE` assignment.
	pub fn bindings(&self) -> Result<VariableBindings, IdGenError> {
		let mut bindings = VariableBindings::new();
		for assignment in &self.data {
			bindings.parse_assignment(assignment)?;
		}
		Ok(bindings)
	}

	/// Loads the settings file, if any, then applies the flags on top of it.
	pub fn generation_settings(&self) -> Result<GenerationSettings, IdGenError> {
		let mut settings = match &self.settings {
			Some(path) => {
				let content = fs::read_to_string(path).map_err(|source| match source.kind() {
					std::io::ErrorKind::NotFound => IdGenError::FileNotFound { path: path.clone() },
					_ => IdGenError::Io {
						path: path.clone(),
						source,
					},
				})?;
				serde_json::from_str(&content)
					.map_err(|e| IdGenError::InvalidSetting(format!("{}: {e}", path.display())))?
			}
			None => GenerationSettings::default(),
		};

		if let Some(number) = self.number {
			settings.target_count = number;
		}
		if let Some(max_attempts) = self.max_attempts {
			settings.set_max_attempts(max_attempts)?;
		}
		if self.seed.is_some() {
			settings.seed = self.seed;
		}
		Ok(settings)
	}

	/// Builds the filter chain requested on the command line.
	///
	/// Filters run in a fixed order: cheap in-memory checks first, the
	/// external command last.
	pub fn filters(&self) -> Result<FilterChain, IdGenError> {
		let mut chain = FilterChain::new();
		if self.blacklist {
			chain.add_filter(Box::new(BlacklistFilter::from_file(&self.blacklist_file)?));
		}
		for pattern in &self.reject_pattern {
			chain.add_filter(Box::new(RegexFilter::new(pattern)?));
		}
		if self.passwd {
			chain.add_filter(Box::new(PasswdFilter::new(&self.passwd_file)));
		}
		if self.shell_cmd {
			chain.add_filter(Box::new(ShellCmdFilter::new(&self.shell_cmd_template)));
		}
		log::debug!("filters: {:?}", chain.ids());
		Ok(chain)
	}
}
