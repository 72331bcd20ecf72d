//! Generation controller and its configuration.

/// Bounded retry loop turning a template into unique, accepted ids.
pub mod generator;

/// Run parameters: quota, attempt ceiling, seed.
pub mod settings;

pub use generator::{Fulfillment, GenerationReport, GenerationState, Generator};
pub use settings::GenerationSettings;
