//! Template-driven identifier generation library.
//!
//! This crate provides:
//! - A compact template language compiled into typed generator elements
//!   (literals, bound values, substrings, random draws, counters)
//! - A generation controller that collects unique candidates until a quota
//!   is met or the template runs out of alternatives
//! - A pluggable filter chain (blacklist, account database, external
//!   command, regular expression)
//!
//! ```
//! use idgen_core::filter::FilterChain;
//! use idgen_core::generation::{GenerationSettings, Generator};
//! use idgen_core::template::VariableBindings;
//!
//! let bindings = VariableBindings::new().with('f', "Alice")?.with('s', "Smith")?;
//! let mut generator = Generator::from_template(
//! 	"1f:s3:[=0]",
//! 	&bindings,
//! 	FilterChain::new(),
//! 	GenerationSettings::default(),
//! )?;
//! assert_eq!(generator.generate()?.ids, vec!["Aith0"]);
//! # Ok::<(), idgen_core::error::IdGenError>(())
//! ```

/// Error type shared by every module.
pub mod error;

/// Acceptance filters and the filter chain.
pub mod filter;

/// Generation controller and settings.
pub mod generation;

/// Line-oriented file reading used by the filters.
pub mod io;

/// Template language: classifier, elements, compiled templates.
pub mod template;
